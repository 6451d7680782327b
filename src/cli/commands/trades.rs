//! Evaluate the configured strategy without executing anything.

use anyhow::Result;
use roho_core::{Context, RohoError, Trade};
use roho_strategies::{Engine, EngineConfig};
use std::path::Path;
use std::sync::Arc;

pub async fn run(ctx: &Context, config_path: Option<&Path>) -> Result<()> {
    let config = super::load(config_path)?;
    let client = super::client(&config)?;

    let engine_config = EngineConfig {
        kind: config.strategy.kind.clone(),
        holdings: config.strategy.holdings.clone(),
        watchlist: config.strategy.watchlist.clone(),
        historicals: config.strategy.historicals(),
        params: config.strategy.params.clone(),
    };
    let mut engine = Engine::new(Arc::new(client), engine_config)?;

    println!("Strategy: {}", engine.strategy().name());
    match engine.evaluate(ctx).await {
        Ok(trades) => {
            print_trades(&trades);
            Ok(())
        }
        Err(RohoError::Strategy(e)) => {
            print_trades(e.partial_trades());
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_trades(trades: &[Trade]) {
    if trades.is_empty() {
        println!("No trades proposed.");
        return;
    }
    println!("Proposed trades:");
    for trade in trades {
        println!("  {trade}");
    }
}
