//! Slow-changing reference data for a symbol.

use serde::{Deserialize, Serialize};

use crate::quoted;

/// Fundamentals as returned by the fundamentals endpoint. Most numeric fields
/// are nullable server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fundamental {
    /// Back-filled from the request when the server omits it.
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, with = "quoted::option")]
    pub open: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub high: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub low: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub volume: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub average_volume: Option<f64>,
    #[serde(default, rename = "high_52_weeks", with = "quoted::option")]
    pub high_52_weeks: Option<f64>,
    #[serde(default, rename = "low_52_weeks", with = "quoted::option")]
    pub low_52_weeks: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub market_cap: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub dividend_yield: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instrument: String,
}

impl Fundamental {
    /// Position of `price` within the 52-week range, 0.0 at the low and 1.0 at the high.
    pub fn range_position(&self, price: f64) -> Option<f64> {
        let (low, high) = (self.low_52_weeks?, self.high_52_weeks?);
        if high <= low {
            return None;
        }
        Some((price - low) / (high - low))
    }
}
