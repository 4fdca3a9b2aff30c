//! # Domain Models
//!
//! The source-agnostic quote shape and the typed values it is built from.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Quote`] | Immutable price/depth observation with read accessors |
//! | [`QuoteRecord`] | Normalized input bound by [`Quote::create`] |
//! | [`PriceFields`] | Last/OHLC/volume/adjusted close, each optional |
//! | [`DepthOfMarket`] | Best bid and ask as [`BookLevel`]s |
//! | [`Symbol`] | Non-empty ticker |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! ## Absent vs. zero
//!
//! Every numeric field is an `Option<f64>`. A source that did not report a
//! value yields `None`; `Some(0.0)` is a reported zero. Consumers are forced
//! to handle the difference:
//!
//! ```rust
//! use quotekit_core::{PriceFields, Quote, QuoteRecord, SourceId, Symbol, UtcDateTime};
//!
//! let record = QuoteRecord::new(
//!     Symbol::parse("MSFT").unwrap(),
//!     UtcDateTime::parse("2024-03-01T20:00:00Z").unwrap(),
//!     SourceId::parse("polygon").unwrap(),
//! )
//! .with_price(PriceFields {
//!     open: Some(410.0),
//!     high: Some(416.0),
//!     close: Some(415.5),
//!     ..PriceFields::default()
//! });
//!
//! let quote = Quote::create(record);
//! assert_eq!(quote.low(), None);
//! assert_eq!(quote.ohlc4(), None);
//! ```

mod quote;
mod symbol;
mod timestamp;

pub use quote::{BookLevel, DepthOfMarket, PriceFields, Quote, QuoteRecord};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
