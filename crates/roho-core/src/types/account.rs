//! Brokerage account and portfolio summaries.

use serde::{Deserialize, Serialize};

use crate::quoted;

/// A brokerage account. Orders reference it by `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub url: String,
    pub account_number: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, with = "quoted::option")]
    pub cash: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub buying_power: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub cash_held_for_orders: Option<f64>,
    #[serde(default)]
    pub deactivated: bool,
}

/// Portfolio valuation for an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub url: String,
    pub account: String,
    #[serde(with = "quoted")]
    pub equity: f64,
    #[serde(default, with = "quoted::option")]
    pub extended_hours_equity: Option<f64>,
    #[serde(with = "quoted")]
    pub market_value: f64,
    #[serde(default, with = "quoted::option")]
    pub extended_hours_market_value: Option<f64>,
    #[serde(with = "quoted")]
    pub withdrawable_amount: f64,
    #[serde(default, with = "quoted::option")]
    pub equity_previous_close: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub excess_margin: Option<f64>,
}

impl Portfolio {
    /// Change in equity since the previous close.
    pub fn day_change(&self) -> Option<f64> {
        Some(self.equity - self.equity_previous_close?)
    }
}
