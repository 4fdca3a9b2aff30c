//! # Quotekit Core
//!
//! Source-agnostic quote model and the aggregates computed over it.
//!
//! ## Overview
//!
//! - **Quote model**: one immutable shape for a price observation, whichever
//!   upstream feed produced it. Every numeric field is optional so "not
//!   reported" never masquerades as zero.
//! - **Aggregates**: VWAP and price channel over ordered quote slices, as
//!   free functions.
//!
//! Fetching, provider-specific parsing, storage and display live outside this
//! crate. It only consumes normalized [`QuoteRecord`]s.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregates`] | `compute_vwap`, `price_channel` |
//! | [`domain`] | `Quote`, `QuoteRecord`, `Symbol`, `UtcDateTime` |
//! | [`error`] | Validation, aggregate and umbrella errors |
//! | [`source`] | Upstream provider identifier |
//!
//! ## Quick Start
//!
//! ```rust
//! use quotekit_core::{
//!     compute_vwap, price_channel, PriceFields, Quote, QuoteRecord, SourceId, Symbol,
//!     UtcDateTime,
//! };
//!
//! fn bar(date: &str, high: f64, low: f64, close: f64, volume: f64) -> Quote {
//!     let record = QuoteRecord::new(
//!         Symbol::parse("AAPL").unwrap(),
//!         UtcDateTime::parse(date).unwrap(),
//!         SourceId::parse("yahoo").unwrap(),
//!     )
//!     .with_price(PriceFields {
//!         high: Some(high),
//!         low: Some(low),
//!         close: Some(close),
//!         volume: Some(volume),
//!         ..PriceFields::default()
//!     });
//!     Quote::create(record)
//! }
//!
//! let quotes = vec![
//!     bar("2024-01-02T21:00:00Z", 12.0, 8.0, 10.0, 300.0),
//!     bar("2024-01-03T21:00:00Z", 24.0, 16.0, 20.0, 100.0),
//! ];
//!
//! assert_eq!(compute_vwap(&quotes)?, 12.5);
//!
//! let channel = price_channel(&quotes, 20)?;
//! assert_eq!(channel.high_price(), Some(24.0));
//! assert_eq!(channel.low_price(), Some(8.0));
//! # Ok::<(), quotekit_core::AggregateError>(())
//! ```
//!
//! ## Error Handling
//!
//! Building a [`Quote`] never fails. Aggregates reject structurally invalid
//! input and let missing per-quote data show up in the output:
//!
//! ```rust
//! use quotekit_core::{compute_vwap, AggregateError};
//!
//! match compute_vwap(&[]) {
//!     Err(AggregateError::InvalidInput { reason }) => assert!(reason.contains("empty")),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! Aggregates emit `tracing` events (`debug` for results, `warn` for
//! incomplete VWAP input). Install a subscriber in the host application to
//! see them.

pub mod aggregates;
pub mod domain;
pub mod error;
pub mod source;

pub use aggregates::{
    compute_vwap, ensure_vwap_inputs, has_vwap_inputs, price_channel, typical_price,
    PriceChannel,
};
pub use domain::{
    BookLevel, DepthOfMarket, PriceFields, Quote, QuoteRecord, Symbol, UtcDateTime,
};
pub use error::{AggregateError, CoreError, ValidationError};
pub use source::SourceId;
