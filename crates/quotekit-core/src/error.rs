use thiserror::Error;

/// Validation errors raised while parsing the typed building blocks of a quote.
///
/// `Quote::create` itself never fails; these only surface from
/// [`Symbol::parse`](crate::Symbol::parse), [`SourceId::parse`](crate::SourceId::parse)
/// and [`UtcDateTime::parse`](crate::UtcDateTime::parse).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("source cannot be empty")]
    EmptySource,

    #[error("timestamp is not valid RFC3339: '{value}'")]
    InvalidTimestamp { value: String },
    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("unix timestamp {seconds} is out of range")]
    TimestampOutOfRange { seconds: i64 },
}

/// Errors returned by the aggregate functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    #[error("quote at index {index} is missing '{field}'")]
    IncompleteData { index: usize, field: &'static str },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
