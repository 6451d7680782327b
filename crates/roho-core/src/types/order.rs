//! Order types and structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quoted;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Execute immediately at best available price
    Market,
    /// Execute at specified price or better
    #[default]
    Limit,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Market => write!(f, "MARKET"),
            OrderType::Limit => write!(f, "LIMIT"),
        }
    }
}

/// Time in force for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Good for the trading day
    #[default]
    Gfd,
    /// Good til canceled
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// At market open
    Opg,
}

/// What activates the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    #[default]
    Immediate,
    Stop,
}

/// Parameters of an order to place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOpts {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub time_in_force: TimeInForce,
    pub trigger: Trigger,
    pub price: f64,
    pub stop_price: Option<f64>,
    pub quantity: u64,
    pub side: Side,
    pub extended_hours: bool,
}

impl Default for OrderOpts {
    fn default() -> Self {
        Self {
            order_type: OrderType::Limit,
            time_in_force: TimeInForce::Gfd,
            trigger: Trigger::Immediate,
            price: 0.0,
            stop_price: None,
            quantity: 0,
            side: Side::Buy,
            extended_hours: false,
        }
    }
}

impl OrderOpts {
    /// Create a good-for-day limit order.
    pub fn limit(side: Side, price: f64, quantity: u64) -> Self {
        Self {
            side,
            price,
            quantity,
            ..Default::default()
        }
    }

    /// Create a market order. `price` is the collar the broker requires.
    pub fn market(side: Side, price: f64, quantity: u64) -> Self {
        Self {
            order_type: OrderType::Market,
            side,
            price,
            quantity,
            ..Default::default()
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }

    /// Turn this into a stop order triggered at `stop_price`.
    pub fn with_stop(mut self, stop_price: f64) -> Self {
        self.trigger = Trigger::Stop;
        self.stop_price = Some(stop_price);
        self
    }

    pub fn with_extended_hours(mut self, extended_hours: bool) -> Self {
        self.extended_hours = extended_hours;
        self
    }

    /// Notional value of the order.
    pub fn value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// An order as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub ref_id: Option<String>,
    pub url: String,
    /// Present while the order can still be cancelled.
    #[serde(default)]
    pub cancel: Option<String>,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub instrument: String,
    #[serde(default)]
    pub symbol: Option<String>,
    pub state: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub time_in_force: TimeInForce,
    pub trigger: Trigger,
    #[serde(default, with = "quoted::option")]
    pub price: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub stop_price: Option<f64>,
    #[serde(with = "quoted")]
    pub quantity: f64,
    #[serde(default, with = "quoted::option")]
    pub cumulative_quantity: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub average_price: Option<f64>,
    #[serde(default, with = "quoted::option")]
    pub fees: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state.as_str(),
            "filled" | "cancelled" | "canceled" | "rejected" | "failed"
        )
    }

    pub fn is_cancelable(&self) -> bool {
        self.cancel.is_some()
    }
}
