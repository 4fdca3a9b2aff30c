use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{CoreError, SourceId, Symbol, UtcDateTime};

/// Price fields reported by a source. `None` means "not reported", never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_close: Option<f64>,
}

/// One side of the book: best price and the size resting at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl BookLevel {
    pub fn new(price: Option<f64>, size: Option<f64>) -> Self {
        Self { price, size }
    }
}

/// Best bid and ask at the quote's timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DepthOfMarket {
    #[serde(default)]
    pub bid: BookLevel,
    #[serde(default)]
    pub ask: BookLevel,
}

impl DepthOfMarket {
    pub fn new(bid: BookLevel, ask: BookLevel) -> Self {
        Self { bid, ask }
    }
}

/// Normalized input for [`Quote::create`].
///
/// Produced by whatever layer talks to a specific provider. The three
/// identifying fields are required by type; everything else may be absent.
/// A missing `price` or `dom` block reads the same as a block with every
/// field absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub symbol: Symbol,
    pub date: UtcDateTime,
    pub source: SourceId,
    #[serde(default)]
    pub price: PriceFields,
    #[serde(default)]
    pub dom: DepthOfMarket,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

impl QuoteRecord {
    pub fn new(symbol: Symbol, date: UtcDateTime, source: SourceId) -> Self {
        Self {
            symbol,
            date,
            source,
            price: PriceFields::default(),
            dom: DepthOfMarket::default(),
            meta: None,
            original: None,
        }
    }

    pub fn with_price(mut self, price: PriceFields) -> Self {
        self.price = price;
        self
    }

    pub fn with_dom(mut self, dom: DepthOfMarket) -> Self {
        self.dom = dom;
        self
    }

    pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = Some(original.into());
        self
    }

    /// Parse an already-normalized JSON record.
    ///
    /// When the record carries no `original`, the input text itself is kept
    /// as the original so the raw form is never lost.
    pub fn from_json(input: &str) -> Result<Self, CoreError> {
        let mut record: Self = serde_json::from_str(input)?;
        if record.original.is_none() {
            record.original = Some(input.to_owned());
        }
        Ok(record)
    }
}

/// One normalized price observation for one symbol, at one time, from one source.
///
/// Immutable once created: fields are private and only read accessors exist.
/// No cross-field checks are made (`low <= high` is not enforced); the type is
/// a transparent container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuoteRecord", into = "QuoteRecord")]
pub struct Quote {
    symbol: Symbol,
    date: UtcDateTime,
    source: SourceId,
    price: PriceFields,
    dom: DepthOfMarket,
    meta: Option<Map<String, Value>>,
    original: Option<String>,
}

impl Quote {
    /// Bind a record to a new quote. Never fails and never inspects values.
    pub fn create(record: QuoteRecord) -> Self {
        tracing::trace!(
            symbol = %record.symbol,
            source = %record.source,
            date = %record.date,
            "quote created"
        );

        Self {
            symbol: record.symbol,
            date: record.date,
            source: record.source,
            price: record.price,
            dom: record.dom,
            meta: record.meta,
            original: record.original,
        }
    }

    pub fn into_record(self) -> QuoteRecord {
        QuoteRecord {
            symbol: self.symbol,
            date: self.date,
            source: self.source,
            price: self.price,
            dom: self.dom,
            meta: self.meta,
            original: self.original,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn date(&self) -> UtcDateTime {
        self.date
    }

    pub fn source(&self) -> &SourceId {
        &self.source
    }

    pub fn price(&self) -> &PriceFields {
        &self.price
    }

    pub fn dom(&self) -> &DepthOfMarket {
        &self.dom
    }

    pub fn last(&self) -> Option<f64> {
        self.price.last
    }

    pub fn open(&self) -> Option<f64> {
        self.price.open
    }

    pub fn high(&self) -> Option<f64> {
        self.price.high
    }

    pub fn low(&self) -> Option<f64> {
        self.price.low
    }

    pub fn close(&self) -> Option<f64> {
        self.price.close
    }

    pub fn volume(&self) -> Option<f64> {
        self.price.volume
    }

    pub fn adjusted_close(&self) -> Option<f64> {
        self.price.adjusted_close
    }

    pub fn bid_price(&self) -> Option<f64> {
        self.dom.bid.price
    }

    pub fn bid_size(&self) -> Option<f64> {
        self.dom.bid.size
    }

    pub fn ask_price(&self) -> Option<f64> {
        self.dom.ask.price
    }

    pub fn ask_size(&self) -> Option<f64> {
        self.dom.ask.size
    }

    /// Source-specific extras (price change, dividends, splits, market cap...).
    pub fn meta(&self) -> Option<&Map<String, Value>> {
        self.meta.as_ref()
    }

    /// Raw upstream record, verbatim.
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    /// Mean of open, high, low and close.
    ///
    /// `None` unless all four were reported; a partial bar never yields an
    /// average.
    pub fn ohlc4(&self) -> Option<f64> {
        let PriceFields {
            open,
            high,
            low,
            close,
            ..
        } = self.price;

        Some((open? + high? + low? + close?) / 4.0)
    }
}

impl From<QuoteRecord> for Quote {
    fn from(record: QuoteRecord) -> Self {
        Self::create(record)
    }
}

impl From<Quote> for QuoteRecord {
    fn from(quote: Quote) -> Self {
        quote.into_record()
    }
}
