//! Behavior-driven tests for the quote model
//!
//! These tests verify HOW a quote holds what a source reported: every field
//! is returned unchanged, absence stays distinct from zero, and nothing is
//! validated or derived behind the caller's back.

use quotekit_tests::{record, BookLevel, DepthOfMarket, PriceFields, Quote, QuoteRecord};
use serde_json::{json, Map, Value};

// =============================================================================
// Quote: Construction
// =============================================================================

#[test]
fn when_full_record_is_created_every_accessor_returns_its_field() {
    // Given: A record with every field reported
    let mut meta = Map::new();
    meta.insert("marketCap".to_owned(), json!(2.9e12));
    meta.insert("dividend".to_owned(), json!({ "amount": 0.24 }));

    let source = record("AAPL", "2024-01-02T21:00:00Z", "yahoo")
        .with_price(PriceFields {
            last: Some(185.64),
            open: Some(187.15),
            high: Some(188.44),
            low: Some(183.89),
            close: Some(185.64),
            volume: Some(82_488_700.0),
            adjusted_close: Some(184.73),
        })
        .with_dom(DepthOfMarket::new(
            BookLevel::new(Some(185.60), Some(300.0)),
            BookLevel::new(Some(185.70), Some(200.0)),
        ))
        .with_meta(meta.clone())
        .with_original("{\"regularMarketPrice\":185.64}");

    // When: The quote is created
    let quote = Quote::create(source.clone());

    // Then: Each accessor mirrors the record
    assert_eq!(quote.symbol(), &source.symbol);
    assert_eq!(quote.date(), source.date);
    assert_eq!(quote.source(), &source.source);
    assert_eq!(quote.last(), Some(185.64));
    assert_eq!(quote.open(), Some(187.15));
    assert_eq!(quote.high(), Some(188.44));
    assert_eq!(quote.low(), Some(183.89));
    assert_eq!(quote.close(), Some(185.64));
    assert_eq!(quote.volume(), Some(82_488_700.0));
    assert_eq!(quote.adjusted_close(), Some(184.73));
    assert_eq!(quote.bid_price(), Some(185.60));
    assert_eq!(quote.bid_size(), Some(300.0));
    assert_eq!(quote.ask_price(), Some(185.70));
    assert_eq!(quote.ask_size(), Some(200.0));
    assert_eq!(quote.meta(), Some(&meta));
    assert_eq!(quote.original(), Some("{\"regularMarketPrice\":185.64}"));
}

#[test]
fn when_source_reports_nothing_numeric_accessors_return_none() {
    // Given: Only the identifying fields
    let quote = Quote::create(record("EURUSD", "2024-01-02T00:00:00Z", "oanda"));

    // Then: No value is defaulted to zero
    assert_eq!(quote.last(), None);
    assert_eq!(quote.open(), None);
    assert_eq!(quote.volume(), None);
    assert_eq!(quote.adjusted_close(), None);
    assert_eq!(quote.bid_price(), None);
    assert_eq!(quote.ask_size(), None);
    assert!(quote.meta().is_none());
    assert!(quote.original().is_none());
    assert_eq!(quote.ohlc4(), None);
}

#[test]
fn when_quote_is_shared_across_threads_readers_see_same_values() {
    // Given: An immutable quote behind an Arc
    let quote = std::sync::Arc::new(Quote::create(
        record("MSFT", "2024-01-02T21:00:00Z", "polygon").with_price(PriceFields {
            last: Some(370.87),
            ..PriceFields::default()
        }),
    ));

    // When: Several threads read it concurrently
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let quote = std::sync::Arc::clone(&quote);
            std::thread::spawn(move || quote.last())
        })
        .collect();

    // Then: All of them observe the same price
    for handle in handles {
        assert_eq!(handle.join().expect("reader thread"), Some(370.87));
    }
}

// =============================================================================
// Quote: OHLC4
// =============================================================================

#[test]
fn when_all_ohlc_fields_present_ohlc4_is_their_mean() {
    let quote = Quote::create(record("TSLA", "2024-01-02T21:00:00Z", "alpaca").with_price(
        PriceFields {
            open: Some(250.08),
            high: Some(251.25),
            low: Some(244.41),
            close: Some(248.42),
            ..PriceFields::default()
        },
    ));

    assert_eq!(quote.ohlc4(), Some((250.08 + 251.25 + 244.41 + 248.42) / 4.0));
}

#[test]
fn when_any_ohlc_field_is_missing_ohlc4_is_none() {
    let complete = PriceFields {
        open: Some(1.0),
        high: Some(2.0),
        low: Some(0.5),
        close: Some(1.5),
        ..PriceFields::default()
    };

    let variants = [
        PriceFields { open: None, ..complete },
        PriceFields { high: None, ..complete },
        PriceFields { low: None, ..complete },
        PriceFields { close: None, ..complete },
    ];

    for price in variants {
        let quote =
            Quote::create(record("TSLA", "2024-01-02T21:00:00Z", "alpaca").with_price(price));
        assert_eq!(quote.ohlc4(), None, "partial bar {price:?} must not average");
    }
}

// =============================================================================
// Quote: Normalized JSON input
// =============================================================================

#[test]
fn when_normalized_json_is_parsed_absent_blocks_stay_absent() {
    // Given: A normalized record without dom, meta or original
    let input = r#"{
        "symbol": "BTC/USD",
        "date": "2024-01-02T12:00:00Z",
        "source": "IEX Cloud",
        "price": { "last": 45120.5, "volume": 0 }
    }"#;

    // When: It is parsed and bound
    let quote = Quote::create(QuoteRecord::from_json(input).expect("valid record"));

    // Then: The source is kept as given, the raw text is kept, absence is preserved
    assert_eq!(quote.symbol().as_str(), "BTC/USD");
    assert_eq!(quote.source().as_str(), "IEX Cloud");
    assert_eq!(quote.last(), Some(45120.5));
    assert_eq!(quote.volume(), Some(0.0));
    assert_eq!(quote.high(), None);
    assert_eq!(quote.bid_price(), None);
    assert_eq!(quote.original(), Some(input));
}

#[test]
fn when_json_carries_its_own_original_it_is_kept_verbatim() {
    let input = r#"{
        "symbol": "IBM",
        "date": "2024-01-02T21:00:00Z",
        "source": "alphavantage",
        "dom": { "bid": { "price": 161.5 } },
        "meta": { "change": -0.4 },
        "original": "{\"05. price\":\"161.5\"}"
    }"#;

    let quote = Quote::create(QuoteRecord::from_json(input).expect("valid record"));

    assert_eq!(quote.original(), Some("{\"05. price\":\"161.5\"}"));
    assert_eq!(quote.bid_price(), Some(161.5));
    assert_eq!(quote.bid_size(), None);
    assert_eq!(
        quote.meta().and_then(|meta| meta.get("change")),
        Some(&Value::from(-0.4))
    );
}

#[test]
fn when_json_lacks_identifying_fields_parsing_fails() {
    let missing_symbol = r#"{ "date": "2024-01-02T21:00:00Z", "source": "yahoo" }"#;
    let blank_source = r#"{ "symbol": "IBM", "date": "2024-01-02T21:00:00Z", "source": " " }"#;
    let local_time = r#"{ "symbol": "IBM", "date": "2024-01-02T16:00:00-05:00", "source": "yahoo" }"#;

    assert!(QuoteRecord::from_json(missing_symbol).is_err());
    assert!(QuoteRecord::from_json(blank_source).is_err());
    assert!(QuoteRecord::from_json(local_time).is_err());
}
