//! Stateless aggregates over chronologically ordered quote slices.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`compute_vwap`] | Volume-weighted average of the typical price |
//! | [`price_channel`] | Highest high / lowest low over a trailing window |
//!
//! Structural problems (empty input, zero period) fail fast with
//! [`AggregateError::InvalidInput`](crate::AggregateError::InvalidInput).
//! Missing per-quote fields are not errors here: they propagate as NaN in
//! VWAP and simply never qualify as a channel extreme.

mod channel;
mod vwap;

pub use channel::{price_channel, PriceChannel};
pub use vwap::{compute_vwap, ensure_vwap_inputs, has_vwap_inputs, typical_price};
