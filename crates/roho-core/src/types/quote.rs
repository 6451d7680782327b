//! Latest quote for a symbol.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::market_hours::is_regular_trading_time;
use crate::quoted;

/// Current stock quote as returned by the quotes endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    #[serde(with = "quoted")]
    pub ask_price: f64,
    #[serde(default)]
    pub ask_size: u64,
    #[serde(with = "quoted")]
    pub bid_price: f64,
    #[serde(default)]
    pub bid_size: u64,
    #[serde(with = "quoted")]
    pub last_trade_price: f64,
    #[serde(default, with = "quoted::option")]
    pub last_extended_hours_trade_price: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub previous_close: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub adjusted_previous_close: Option<f64>,
    #[serde(default)]
    pub previous_close_date: Option<String>,
    #[serde(default)]
    pub trading_halted: bool,
    #[serde(default)]
    pub instrument: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quote {
    /// The relevant trade price right now, including after hours.
    pub fn price(&self) -> f64 {
        self.price_at(Utc::now())
    }

    /// Last trade price during the regular session, the extended-hours price
    /// outside it.
    pub fn price_at(&self, now: DateTime<Utc>) -> f64 {
        if is_regular_trading_time(now) {
            return self.last_trade_price;
        }
        self.last_extended_hours_trade_price
            .unwrap_or(self.last_trade_price)
    }

    /// Get the mid price.
    pub fn mid(&self) -> f64 {
        (self.bid_price + self.ask_price) / 2.0
    }

    /// Get the spread.
    pub fn spread(&self) -> f64 {
        self.ask_price - self.bid_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quoted::close_to;
    use proptest::prelude::*;

    const QUOTE: &str = r#"{
        "ask_price": "150.050000",
        "ask_size": 200,
        "bid_price": "149.950000",
        "bid_size": 100,
        "last_trade_price": "150.000000",
        "last_extended_hours_trade_price": "151.250000",
        "previous_close": "148.000000",
        "adjusted_previous_close": "148.000000",
        "previous_close_date": "2024-07-09",
        "symbol": "AAPL",
        "trading_halted": false,
        "instrument": "https://api.robinhood.com/instruments/aapl/",
        "updated_at": "2024-07-10T14:00:00Z"
    }"#;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_quote_calculations() {
        let quote: Quote = serde_json::from_str(QUOTE).unwrap();

        assert!((quote.mid() - 150.0).abs() < 0.001);
        assert!((quote.spread() - 0.10).abs() < 0.001);
    }

    #[test]
    fn test_price_follows_session() {
        let quote: Quote = serde_json::from_str(QUOTE).unwrap();

        assert_eq!(quote.price_at(utc("2024-07-10T15:00:00Z")), 150.0);
        assert_eq!(quote.price_at(utc("2024-07-10T22:00:00Z")), 151.25);
    }

    #[test]
    fn test_null_price_decodes_as_zero() {
        let json = r#"{"symbol": "X", "ask_price": null, "bid_price": "1.50", "last_trade_price": "1.55"}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.ask_price, 0.0);
        assert_eq!(quote.bid_price, 1.5);
        assert_eq!(quote.last_extended_hours_trade_price, None);
    }

    #[test]
    fn test_null_price_does_not_fail_list() {
        let json = r#"[
            {"symbol": "X", "ask_price": null, "bid_price": "1.50", "last_trade_price": "1.55"},
            {"symbol": "Y", "ask_price": "2.00", "bid_price": "1.90", "last_trade_price": "1.95"}
        ]"#;
        let quotes: Vec<Option<Quote>> = serde_json::from_str(json).unwrap();
        assert_eq!(quotes.len(), 2);
    }

    proptest! {
        #[test]
        fn quote_prices_round_trip(
            ask in 0.0f64..1.0e6,
            bid in 0.0f64..1.0e6,
            last in 0.0f64..1.0e6,
            extended in proptest::option::of(0.0f64..1.0e6),
        ) {
            let mut quote: Quote = serde_json::from_str(QUOTE).unwrap();
            quote.ask_price = ask;
            quote.bid_price = bid;
            quote.last_trade_price = last;
            quote.last_extended_hours_trade_price = extended;

            let encoded = serde_json::to_value(&quote).unwrap();
            prop_assert!(encoded["ask_price"].is_string());
            prop_assert!(encoded["bid_price"].is_string());
            prop_assert!(encoded["last_trade_price"].is_string());

            let decoded: Quote = serde_json::from_value(encoded).unwrap();
            prop_assert!(close_to(decoded.ask_price, ask));
            prop_assert!(close_to(decoded.bid_price, bid));
            prop_assert!(close_to(decoded.last_trade_price, last));
            match (decoded.last_extended_hours_trade_price, extended) {
                (Some(a), Some(b)) => prop_assert!(close_to(a, b)),
                (None, None) => {}
                other => prop_assert!(false, "extended price mismatch: {:?}", other),
            }
        }
    }

    #[test]
    fn test_missing_extended_price_falls_back() {
        let mut quote: Quote = serde_json::from_str(QUOTE).unwrap();
        quote.last_extended_hours_trade_price = None;

        assert_eq!(quote.price_at(utc("2024-07-10T22:00:00Z")), 150.0);
    }
}
