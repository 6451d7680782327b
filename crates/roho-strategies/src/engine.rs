//! Ties a market data source to a strategy.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use roho_core::{
    Context, Interval, MarketData, MarketView, RohoResult, Span, Strategy, StrategyError, Trade,
};

use crate::randomness::{OsRandom, RandomSource};
use crate::registry::StrategyRegistry;
use crate::view_builder::MarketViewBuilder;

/// What to build and what to look at.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Strategy kind, e.g. `random` or `lucky-sevens`.
    pub kind: String,
    /// Symbols the strategy must never sell.
    pub holdings: Vec<String>,
    /// Symbols to evaluate in addition to current positions.
    pub watchlist: Vec<String>,
    pub historicals: Option<(Interval, Span)>,
    /// Strategy-specific configuration; `null` for defaults.
    pub params: Value,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kind: "random".to_string(),
            holdings: Vec::new(),
            watchlist: Vec::new(),
            historicals: None,
            params: Value::Null,
        }
    }
}

impl EngineConfig {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }
}

/// Strategy engine.
pub struct Engine {
    source: Arc<dyn MarketData>,
    strategy: Box<dyn Strategy>,
    config: EngineConfig,
}

impl Engine {
    /// Build the configured strategy. Fails for unknown kinds.
    pub fn new(source: Arc<dyn MarketData>, config: EngineConfig) -> Result<Self, StrategyError> {
        Self::with_random_source(source, config, Box::new(OsRandom))
    }

    pub fn with_random_source(
        source: Arc<dyn MarketData>,
        config: EngineConfig,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, StrategyError> {
        let strategy = StrategyRegistry::new().create_with_source(
            &config.kind,
            config.params.clone(),
            config.holdings.clone(),
            rng,
        )?;
        Ok(Self {
            source,
            strategy,
            config,
        })
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Assemble the current market view.
    pub async fn market_view(&self, ctx: &Context) -> RohoResult<MarketView> {
        let mut builder =
            MarketViewBuilder::new(self.source.as_ref()).watchlist(&self.config.watchlist);
        if let Some((interval, span)) = self.config.historicals {
            builder = builder.historicals(interval, span);
        }
        Ok(builder.build(ctx).await?)
    }

    /// Assemble a fresh view and ask the strategy for trades. Nothing is
    /// executed.
    pub async fn evaluate(&mut self, ctx: &Context) -> RohoResult<Vec<Trade>> {
        let view = self.market_view(ctx).await?;
        Ok(self.evaluate_view(&view)?)
    }

    pub fn evaluate_view(&mut self, view: &MarketView) -> Result<Vec<Trade>, StrategyError> {
        match self.strategy.trades(view) {
            Ok(trades) => {
                info!(
                    strategy = self.strategy.name(),
                    symbols = view.len(),
                    trades = trades.len(),
                    "Strategy evaluated"
                );
                Ok(trades)
            }
            Err(e) => {
                warn!(
                    strategy = self.strategy.name(),
                    partial = e.partial_trades().len(),
                    "Strategy evaluation failed: {}",
                    e
                );
                Err(e)
            }
        }
    }
}
