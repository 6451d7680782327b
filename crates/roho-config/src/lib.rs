//! Configuration management.

mod settings;

pub use settings::{ApiSettings, AppConfig, AppSettings, LoggingConfig, StrategySettings};

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    build(Config::builder().add_source(File::from(path).required(true)))
}

/// Load configuration from an optional file. Without one, defaults plus
/// environment overrides apply.
pub fn load_config_or_default(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => build(Config::builder()),
    }
}

fn build(
    builder: ConfigBuilder<config::builder::DefaultState>,
) -> Result<AppConfig, ConfigError> {
    let config = builder
        .add_source(
            Environment::with_prefix("ROHO")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("strategy.watchlist")
                .with_list_parse_key("strategy.holdings")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
