//! CLI command implementations.

pub mod overview;
pub mod strategies;
pub mod trades;
pub mod validate;

use anyhow::{Context as _, Result};
use roho_client::{Client, ClientConfig};
use roho_config::{load_config_or_default, AppConfig};
use std::path::Path;
use std::time::Duration;

pub(crate) fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    load_config_or_default(config_path)
        .with_context(|| format!("loading configuration {:?}", config_path))
}

/// Build an authenticated client. A missing token is fatal.
pub(crate) fn client(config: &AppConfig) -> Result<Client> {
    let client_config = ClientConfig::from_env_var(&config.api.token_env)?
        .with_base_url(config.api.base_url.as_str())
        .with_crypto_url(config.api.crypto_url.as_str())
        .with_timeout(Duration::from_secs(config.api.timeout_secs));
    Client::from_config(&client_config).context("creating API client")
}
