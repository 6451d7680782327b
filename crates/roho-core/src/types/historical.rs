//! Historical price buckets and their interval/span definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::quoted;

/// Width of one historical bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    #[serde(rename = "5minute")]
    FiveMinute,
    #[serde(rename = "10minute")]
    #[default]
    TenMinute,
    #[serde(rename = "hour")]
    Hour,
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "week")]
    Week,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::FiveMinute => "5minute",
            Interval::TenMinute => "10minute",
            Interval::Hour => "hour",
            Interval::Day => "day",
            Interval::Week => "week",
        }
    }

    /// Get the duration of the interval in seconds.
    pub fn as_secs(&self) -> u64 {
        match self {
            Interval::FiveMinute => 300,
            Interval::TenMinute => 600,
            Interval::Hour => 3600,
            Interval::Day => 86400,
            Interval::Week => 604800,
        }
    }

    pub fn all() -> &'static [Interval] {
        &[
            Interval::FiveMinute,
            Interval::TenMinute,
            Interval::Hour,
            Interval::Day,
            Interval::Week,
        ]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::all()
            .iter()
            .copied()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| format!("unknown interval: {s}"))
    }
}

/// How far back historicals reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Span {
    #[serde(rename = "day")]
    #[default]
    Day,
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "3month")]
    ThreeMonth,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "5year")]
    FiveYear,
    #[serde(rename = "all")]
    All,
}

impl Span {
    pub fn as_str(&self) -> &'static str {
        match self {
            Span::Day => "day",
            Span::Week => "week",
            Span::Month => "month",
            Span::ThreeMonth => "3month",
            Span::Year => "year",
            Span::FiveYear => "5year",
            Span::All => "all",
        }
    }

    pub fn all() -> &'static [Span] {
        &[
            Span::Day,
            Span::Week,
            Span::Month,
            Span::ThreeMonth,
            Span::Year,
            Span::FiveYear,
            Span::All,
        ]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Span {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Span::all()
            .iter()
            .copied()
            .find(|span| span.as_str() == s)
            .ok_or_else(|| format!("unknown span: {s}"))
    }
}

/// Which trading sessions to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bounds {
    Regular,
    Extended,
    Trading,
}

impl Bounds {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bounds::Regular => "regular",
            Bounds::Extended => "extended",
            Bounds::Trading => "trading",
        }
    }
}

/// One time bucket of price data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub begins_at: DateTime<Utc>,
    #[serde(with = "quoted")]
    pub open_price: f64,
    #[serde(with = "quoted")]
    pub close_price: f64,
    #[serde(with = "quoted")]
    pub high_price: f64,
    #[serde(with = "quoted")]
    pub low_price: f64,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub interpolated: bool,
}

/// Chronologically ordered buckets for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Historical {
    pub symbol: String,
    #[serde(default)]
    pub interval: Option<Interval>,
    #[serde(default)]
    pub span: Option<Span>,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub instrument: String,
    #[serde(rename = "historicals", default)]
    pub records: Vec<HistoricalRecord>,
}

impl Historical {
    pub fn first(&self) -> Option<&HistoricalRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&HistoricalRecord> {
        self.records.last()
    }

    /// Close prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.close_price).collect()
    }

    /// Fractional change from the first open to the last close.
    pub fn change(&self) -> Option<f64> {
        let open = self.first()?.open_price;
        let close = self.last()?.close_price;
        if open == 0.0 {
            return None;
        }
        Some((close - open) / open)
    }

    pub fn is_chronological(&self) -> bool {
        self.records
            .windows(2)
            .all(|w| w[0].begins_at <= w[1].begins_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quoted::close_to;
    use proptest::prelude::*;

    #[test]
    fn test_interval_parse_roundtrip() {
        for interval in Interval::all() {
            assert_eq!(interval.as_str().parse::<Interval>().unwrap(), *interval);
        }
        assert!("2minute".parse::<Interval>().is_err());
        assert_eq!("3month".parse::<Span>().unwrap(), Span::ThreeMonth);
    }

    #[test]
    fn test_historical_decodes() {
        let json = r#"{
            "quote": "https://api.robinhood.com/quotes/spy/",
            "symbol": "SPY",
            "interval": "10minute",
            "span": "day",
            "bounds": "regular",
            "instrument": "https://api.robinhood.com/instruments/spy/",
            "historicals": [
                {"begins_at": "2024-07-10T13:30:00Z", "open_price": "400.00", "close_price": "401.00",
                 "high_price": "401.50", "low_price": "399.80", "volume": 120000, "session": "reg", "interpolated": false},
                {"begins_at": "2024-07-10T13:40:00Z", "open_price": "401.00", "close_price": "404.00",
                 "high_price": "404.20", "low_price": "400.90", "volume": 98000, "session": "reg", "interpolated": false}
            ]
        }"#;

        let h: Historical = serde_json::from_str(json).unwrap();
        assert_eq!(h.interval, Some(Interval::TenMinute));
        assert_eq!(h.span, Some(Span::Day));
        assert_eq!(h.records.len(), 2);
        assert!(h.is_chronological());
        assert_eq!(h.closes(), vec![401.0, 404.0]);
        assert!((h.change().unwrap() - 0.01).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn historical_record_round_trip(
            open in 0.0f64..1.0e5,
            close in 0.0f64..1.0e5,
            high in 0.0f64..1.0e5,
            low in 0.0f64..1.0e5,
            volume in 0u64..1_000_000_000,
        ) {
            let record = HistoricalRecord {
                begins_at: "2024-07-10T13:30:00Z".parse().unwrap(),
                open_price: open,
                close_price: close,
                high_price: high,
                low_price: low,
                volume,
                session: "reg".into(),
                interpolated: false,
            };

            let encoded = serde_json::to_value(&record).unwrap();
            for field in ["open_price", "close_price", "high_price", "low_price"] {
                prop_assert!(encoded[field].is_string(), "{} not quoted", field);
            }

            let decoded: HistoricalRecord = serde_json::from_value(encoded).unwrap();
            prop_assert!(close_to(decoded.open_price, open));
            prop_assert!(close_to(decoded.close_price, close));
            prop_assert!(close_to(decoded.high_price, high));
            prop_assert!(close_to(decoded.low_price, low));
            prop_assert_eq!(decoded.volume, volume);
            prop_assert_eq!(decoded.begins_at, record.begins_at);
        }
    }
}
