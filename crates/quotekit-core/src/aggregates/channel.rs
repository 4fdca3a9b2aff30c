use tracing::debug;

use crate::{AggregateError, Quote};

/// Highest high and lowest low over a trailing window.
///
/// Both sides borrow the full quotes so callers can read the date and source
/// of each extreme. A side is `None` when no quote in the window qualified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChannel<'a> {
    pub high: Option<&'a Quote>,
    pub low: Option<&'a Quote>,
    /// Number of quotes actually scanned.
    pub window_len: usize,
}

impl PriceChannel<'_> {
    pub fn high_price(&self) -> Option<f64> {
        self.high?.high()
    }

    pub fn low_price(&self) -> Option<f64> {
        self.low?.low()
    }

    /// Distance between the channel's high and low.
    pub fn width(&self) -> Option<f64> {
        Some(self.high_price()? - self.low_price()?)
    }
}

/// Price channel over the last `period` quotes of `quotes` (oldest first).
///
/// A `period` longer than the sequence is clamped to the whole sequence.
/// Only strictly positive highs and lows qualify, so unreported values that a
/// source sent as zero never become an extreme. Ties keep the earliest quote.
///
/// # Errors
///
/// [`AggregateError::InvalidInput`] when `period` is zero or `quotes` is empty.
pub fn price_channel(quotes: &[Quote], period: usize) -> Result<PriceChannel<'_>, AggregateError> {
    if period == 0 {
        return Err(AggregateError::InvalidInput {
            reason: "period must be greater than zero",
        });
    }
    if quotes.is_empty() {
        return Err(AggregateError::InvalidInput {
            reason: "cannot compute a price channel of an empty sequence",
        });
    }

    let window = &quotes[quotes.len().saturating_sub(period)..];

    let mut high: Option<(&Quote, f64)> = None;
    let mut low: Option<(&Quote, f64)> = None;

    for quote in window {
        if let Some(value) = quote.high().filter(|value| *value > 0.0) {
            if high.is_none_or(|(_, best)| value > best) {
                high = Some((quote, value));
            }
        }
        if let Some(value) = quote.low().filter(|value| *value > 0.0) {
            if low.is_none_or(|(_, best)| value < best) {
                low = Some((quote, value));
            }
        }
    }

    let channel = PriceChannel {
        high: high.map(|(quote, _)| quote),
        low: low.map(|(quote, _)| quote),
        window_len: window.len(),
    };

    debug!(
        period,
        window_len = channel.window_len,
        high = ?channel.high_price(),
        low = ?channel.low_price(),
        "computed price channel"
    );

    Ok(channel)
}
