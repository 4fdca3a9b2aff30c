use tracing::{debug, warn};

use crate::{AggregateError, Quote};

/// `(high + low + close) / 3`, or `None` if any of the three is absent.
pub fn typical_price(quote: &Quote) -> Option<f64> {
    Some((quote.high()? + quote.low()? + quote.close()?) / 3.0)
}

/// Whether a quote carries every field VWAP needs.
pub fn has_vwap_inputs(quote: &Quote) -> bool {
    missing_vwap_field(quote).is_none()
}

/// Strict pre-check for [`compute_vwap`].
///
/// Reports the first quote (by position) missing high, low, close or volume.
/// An empty slice passes; emptiness is rejected by `compute_vwap` itself.
pub fn ensure_vwap_inputs(quotes: &[Quote]) -> Result<(), AggregateError> {
    for (index, quote) in quotes.iter().enumerate() {
        if let Some(field) = missing_vwap_field(quote) {
            return Err(AggregateError::IncompleteData { index, field });
        }
    }
    Ok(())
}

/// Volume-weighted average price over `quotes`.
///
/// `Σ(typical_i * volume_i) / Σ(volume_i)`, with the typical price from
/// [`typical_price`].
///
/// A quote missing any of high, low, close or volume turns its term into NaN,
/// which poisons the whole result: one incomplete quote invalidates the VWAP.
/// Filter with [`has_vwap_inputs`] or check with [`ensure_vwap_inputs`] first
/// when that is not wanted.
///
/// # Errors
///
/// [`AggregateError::InvalidInput`] for an empty slice, or when the reported
/// volumes sum to exactly zero.
pub fn compute_vwap(quotes: &[Quote]) -> Result<f64, AggregateError> {
    if quotes.is_empty() {
        return Err(AggregateError::InvalidInput {
            reason: "cannot compute VWAP of an empty sequence",
        });
    }

    let mut weighted_sum = 0.0;
    let mut total_volume = 0.0;

    for (index, quote) in quotes.iter().enumerate() {
        if let Some(field) = missing_vwap_field(quote) {
            warn!(
                index,
                field,
                symbol = %quote.symbol(),
                date = %quote.date(),
                "quote is missing a VWAP input, result will be NaN"
            );
        }

        let typical = typical_price(quote).unwrap_or(f64::NAN);
        let volume = quote.volume().unwrap_or(f64::NAN);

        weighted_sum += typical * volume;
        total_volume += volume;
    }

    // NaN never compares equal, so incomplete data falls through as NaN.
    if total_volume == 0.0 {
        return Err(AggregateError::InvalidInput {
            reason: "total volume is zero",
        });
    }

    let vwap = weighted_sum / total_volume;
    debug!(quotes = quotes.len(), total_volume, vwap, "computed VWAP");

    Ok(vwap)
}

fn missing_vwap_field(quote: &Quote) -> Option<&'static str> {
    if quote.high().is_none() {
        Some("high")
    } else if quote.low().is_none() {
        Some("low")
    } else if quote.close().is_none() {
        Some("close")
    } else if quote.volume().is_none() {
        Some("volume")
    } else {
        None
    }
}
