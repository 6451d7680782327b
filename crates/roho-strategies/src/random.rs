//! Random demonstration strategy.
//!
//! Sells a held symbol, or buys any symbol, when a uniform draw from
//! `[0, N * K)` lands exactly on the lucky number `K`, where `N` is the number
//! of symbols in the view. Each held symbol is therefore sold with
//! probability `1 / (N * K)` per evaluation, or never when `N` is 1 and `K`
//! falls outside the range. Not investment advice.

use serde::{Deserialize, Serialize};
use tracing::debug;

use roho_core::{
    CombinedStock, MarketView, OrderOpts, Side, Strategy, StrategyConfig, StrategyError, Trade,
};

use crate::randomness::{OsRandom, RandomSource};

/// Configuration for the Random strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// The draw that triggers a trade, and the quantity bought.
    pub lucky_number: u64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self { lucky_number: 4 }
    }
}

impl StrategyConfig for RandomConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.lucky_number == 0 {
            return Err(StrategyError::InvalidConfig(
                "Lucky number must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Buys and sells at random.
pub struct RandomStrategy {
    config: RandomConfig,
    rng: Box<dyn RandomSource>,
}

impl RandomStrategy {
    /// Create a Random strategy drawing from the OS CSPRNG.
    pub fn new(config: RandomConfig) -> Self {
        Self::with_source(config, Box::new(OsRandom))
    }

    pub fn with_source(config: RandomConfig, rng: Box<dyn RandomSource>) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &RandomConfig {
        &self.config
    }

    fn draw(&mut self, upper: u64, trades: &mut Vec<Trade>) -> Result<u64, StrategyError> {
        self.rng
            .below(upper)
            .map_err(|e| StrategyError::Randomness {
                message: e.to_string(),
                partial: std::mem::take(trades),
            })
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "Random"
    }

    fn description(&self) -> &str {
        "Buys and sells symbols at random"
    }

    fn trades(&mut self, view: &MarketView) -> Result<Vec<Trade>, StrategyError> {
        let lucky = self.config.lucky_number;
        let upper = (view.len() as u64).saturating_mul(lucky);
        let mut trades = Vec::new();
        if upper == 0 {
            return Ok(trades);
        }

        let mut symbols: Vec<(&String, &CombinedStock)> = view.iter().collect();
        symbols.sort_by(|a, b| a.0.cmp(b.0));

        for (symbol, stock) in &symbols {
            let Some(position) = &stock.position else {
                continue;
            };
            if self.draw(upper, &mut trades)? != lucky {
                continue;
            }
            let quantity = position.whole_shares();
            if quantity == 0 {
                continue;
            }
            trades.push(Trade::new(
                symbol.as_str(),
                position.instrument_url.as_str(),
                OrderOpts::limit(Side::Sell, position.average_buy_price, quantity),
                "drew the lucky number",
            ));
        }

        for (symbol, stock) in &symbols {
            if self.draw(upper, &mut trades)? != lucky {
                continue;
            }
            let Some(quote) = &stock.quote else {
                debug!(symbol = %symbol, "Lucky draw without a quote, skipping buy");
                continue;
            };
            trades.push(Trade::new(
                symbol.as_str(),
                stock.instrument_url().unwrap_or_default(),
                OrderOpts::limit(Side::Buy, quote.ask_price, lucky),
                "drew the lucky number",
            ));
        }

        Ok(trades)
    }
}
