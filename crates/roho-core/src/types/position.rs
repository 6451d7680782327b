//! Account positions: equities, options and crypto.

use serde::{Deserialize, Serialize};

use super::Meta;
use crate::quoted;

/// An equity position held by the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(flatten)]
    pub meta: Meta,
    pub account: String,
    /// Not every API revision embeds the symbol; see `instrument`.
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(rename = "instrument")]
    pub instrument_url: String,
    #[serde(default)]
    pub instrument_id: String,
    #[serde(with = "quoted")]
    pub average_buy_price: f64,
    #[serde(default, with = "quoted::option")]
    pub intraday_average_buy_price: Option<f64>,
    #[serde(with = "quoted")]
    pub quantity: f64,
    #[serde(default, with = "quoted::option")]
    pub intraday_quantity: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub shares_held_for_buys: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub shares_held_for_sells: Option<f64>,
}

impl Position {
    /// Cost basis (quantity * average buy price).
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.average_buy_price
    }

    /// Check if the position is flat (no shares).
    pub fn is_flat(&self) -> bool {
        self.quantity == 0.0
    }

    /// Whole shares held, for order sizing.
    pub fn whole_shares(&self) -> u64 {
        // Saturating cast: negative or NaN quantities become 0.
        self.quantity.trunc() as u64
    }
}

/// An aggregate options position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionPosition {
    pub id: String,
    pub chain: String,
    pub symbol: String,
    pub account: String,
    pub strategy: String,
    pub direction: String,
    #[serde(default)]
    pub intraday_direction: String,
    #[serde(with = "quoted")]
    pub average_open_price: f64,
    #[serde(default, with = "quoted::option")]
    pub intraday_average_open_price: Option<f64>,
    #[serde(with = "quoted")]
    pub quantity: f64,
    #[serde(default, with = "quoted::option")]
    pub intraday_quantity: Option<f64>,
    #[serde(with = "quoted")]
    pub trade_value_multiplier: f64,
    #[serde(default)]
    pub legs: Vec<LegPosition>,
    pub created_at: String,
    pub updated_at: String,
}

/// One leg of an options position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegPosition {
    pub id: String,
    pub position: String,
    pub position_type: String,
    pub option: String,
    #[serde(with = "quoted")]
    pub ratio_quantity: f64,
    pub expiration_date: String,
    #[serde(with = "quoted")]
    pub strike_price: f64,
    pub option_type: String,
}

/// A crypto holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoPosition {
    #[serde(flatten)]
    pub meta: Meta,
    pub id: String,
    pub account_id: String,
    #[serde(with = "quoted")]
    pub quantity: f64,
    #[serde(default, with = "quoted::option")]
    pub quantity_available: Option<f64>,
    #[serde(default)]
    pub currency: Option<serde_json::Value>,
    #[serde(default, with = "quoted::option")]
    pub cost_basis: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub quantity_held_for_buy: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub quantity_held_for_sell: Option<f64>,
}
