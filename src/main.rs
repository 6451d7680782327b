//! roho command line client.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Action, Cli};
use logging::setup_logging;
use roho_core::Context;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file is reported by the command itself.
    let logging = roho_config::load_config_or_default(cli.config.as_deref())
        .map(|config| config.logging)
        .unwrap_or_default();
    let (level, json) = cli.logging(&logging);
    setup_logging(&level, json);

    let (ctx, cancel) = Context::background().with_cancel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling outstanding requests");
            cancel.cancel();
        }
    });

    let config = cli.config.as_deref();
    match cli.action {
        None => cli::commands::overview::run(&ctx, config, &cli.symbol).await,
        Some(Action::Buy) => cli::commands::overview::buy(&ctx, config, &cli.symbol).await,
        Some(Action::Sell) => cli::commands::overview::sell(&ctx, config, &cli.symbol).await,
        Some(Action::Trades) => cli::commands::trades::run(&ctx, config).await,
        Some(Action::Strategies) => cli::commands::strategies::run().await,
        Some(Action::ValidateConfig) => cli::commands::validate::run(config).await,
    }
}
