//! Tradeable instruments.

use serde::{Deserialize, Serialize};

use crate::quoted;

/// An instrument as returned by the instruments endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: String,
    pub url: String,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub simple_name: Option<String>,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub fundamentals: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub tradeable: bool,
    #[serde(default, with = "quoted::option")]
    pub min_tick_size: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub day_trade_ratio: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub maintenance_ratio: Option<f64>,
}

impl Instrument {
    pub fn is_active(&self) -> bool {
        self.tradeable && self.state == "active"
    }
}
