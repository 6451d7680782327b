//! LuckySevens: take profits at +7%, buy within 7% of the 52-week low.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use roho_core::{MarketView, OrderOpts, Side, Strategy, StrategyConfig, StrategyError, Trade};

/// Configuration for the LuckySevens strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckySevensConfig {
    /// Shares bought per entry.
    pub quantity: u64,
    /// Profit target and entry band, in percent.
    pub threshold_pct: f64,
}

impl Default for LuckySevensConfig {
    fn default() -> Self {
        Self {
            quantity: 7,
            threshold_pct: 7.0,
        }
    }
}

impl StrategyConfig for LuckySevensConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.quantity == 0 {
            return Err(StrategyError::InvalidConfig(
                "Quantity must be greater than 0".into(),
            ));
        }
        if !self.threshold_pct.is_finite() || self.threshold_pct <= 0.0 {
            return Err(StrategyError::InvalidConfig(
                "Threshold must be a positive percentage".into(),
            ));
        }
        Ok(())
    }
}

/// Deterministic profit-taking and dip-buying heuristic.
///
/// Symbols listed in `holdings` are never sold.
pub struct LuckySevensStrategy {
    config: LuckySevensConfig,
    holdings: HashSet<String>,
}

impl LuckySevensStrategy {
    pub fn new(config: LuckySevensConfig, holdings: Vec<String>) -> Self {
        Self {
            config,
            holdings: holdings.into_iter().map(|s| s.to_uppercase()).collect(),
        }
    }

    pub fn config(&self) -> &LuckySevensConfig {
        &self.config
    }

    fn factor(&self) -> f64 {
        1.0 + self.config.threshold_pct / 100.0
    }
}

impl Strategy for LuckySevensStrategy {
    fn name(&self) -> &str {
        "LuckySevens"
    }

    fn description(&self) -> &str {
        "Sells positions up 7% and buys symbols trading near their 52-week low"
    }

    fn trades(&mut self, view: &MarketView) -> Result<Vec<Trade>, StrategyError> {
        let mut symbols: Vec<&String> = view.keys().collect();
        symbols.sort();
        let factor = self.factor();
        let mut trades = Vec::new();

        for symbol in &symbols {
            let stock = &view[*symbol];
            let (Some(position), Some(quote)) = (&stock.position, &stock.quote) else {
                continue;
            };
            if self.holdings.contains(symbol.as_str()) || position.average_buy_price <= 0.0 {
                continue;
            }
            let quantity = position.whole_shares();
            if quantity == 0 || quote.bid_price < position.average_buy_price * factor {
                continue;
            }
            trades.push(Trade::new(
                symbol.as_str(),
                stock.instrument_url().unwrap_or_default(),
                OrderOpts::limit(Side::Sell, quote.bid_price, quantity),
                format!(
                    "bid {:.2} is {:.1}% above cost {:.2}",
                    quote.bid_price,
                    (quote.bid_price / position.average_buy_price - 1.0) * 100.0,
                    position.average_buy_price
                ),
            ));
        }

        for symbol in &symbols {
            let stock = &view[*symbol];
            if stock.position.as_ref().is_some_and(|p| !p.is_flat()) {
                continue;
            }
            let (Some(quote), Some(fundamentals)) = (&stock.quote, &stock.fundamentals) else {
                continue;
            };
            let Some(low) = fundamentals.low_52_weeks.filter(|low| *low > 0.0) else {
                continue;
            };
            if quote.ask_price <= 0.0 || quote.ask_price > low * factor {
                continue;
            }
            trades.push(Trade::new(
                symbol.as_str(),
                stock.instrument_url().unwrap_or_default(),
                OrderOpts::limit(Side::Buy, quote.ask_price, self.config.quantity),
                format!("ask {:.2} is within {}% of 52-week low {low:.2}", quote.ask_price, self.config.threshold_pct),
            ));
        }

        Ok(trades)
    }
}
