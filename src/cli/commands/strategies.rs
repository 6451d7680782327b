//! List strategies command.

use anyhow::Result;
use roho_strategies::StrategyRegistry;

pub async fn run() -> Result<()> {
    let registry = StrategyRegistry::new();

    println!("Available Strategies");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in registry.list() {
        println!("  {} ({})", info.name, info.kind);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!("  Defaults: {}", info.default_config);
        println!();
    }

    println!("Set [strategy] kind in the config file to select one.");

    Ok(())
}
