//! Trade intents produced by strategies.

use serde::{Deserialize, Serialize};

use super::{OrderOpts, Side};

/// A proposed order. Producing one executes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: String,
    /// Instrument the order targets; empty when the strategy had none to hand.
    pub instrument_url: String,
    pub order: OrderOpts,
    /// Human-readable explanation.
    pub reason: String,
}

impl Trade {
    pub fn new(
        symbol: impl Into<String>,
        instrument_url: impl Into<String>,
        order: OrderOpts,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            instrument_url: instrument_url.into(),
            order,
            reason: reason.into(),
        }
    }

    pub fn side(&self) -> Side {
        self.order.side
    }

    pub fn is_buy(&self) -> bool {
        self.order.side == Side::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.order.side == Side::Sell
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} @ {:.2} ({})",
            self.order.side, self.order.quantity, self.symbol, self.order.price, self.reason
        )
    }
}
