//! Validate configuration command.

use anyhow::Result;
use roho_strategies::StrategyRegistry;
use std::path::Path;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    match config_path {
        Some(path) => println!("Validating configuration: {:?}", path),
        None => println!("Validating defaults and environment overrides"),
    }

    let config = super::load(config_path)?;

    // Building the strategy checks its kind and parameters.
    StrategyRegistry::new().create(
        &config.strategy.kind,
        config.strategy.params.clone(),
        config.strategy.holdings.clone(),
    )?;

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("API: {}", config.api.base_url);
    println!("Token variable: {}", config.api.token_env);
    println!("Strategy: {}", config.strategy.kind);
    println!("Watchlist: {}", config.strategy.watchlist.join(", "));
    println!("Holdings: {}", config.strategy.holdings.join(", "));

    Ok(())
}
