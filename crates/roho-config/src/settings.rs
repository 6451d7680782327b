//! Configuration structures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use roho_core::{Interval, Span};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub strategy: StrategySettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "roho".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Brokerage API settings. The token itself is never stored in config,
/// only the name of the environment variable that holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub crypto_url: String,
    pub token_env: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.robinhood.com/".to_string(),
            crypto_url: "https://nummus.robinhood.com/".to_string(),
            token_env: "RH_TOKEN".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Strategy selection and its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    pub kind: String,
    /// Symbols never to sell.
    pub holdings: Vec<String>,
    /// Symbols to evaluate besides current positions.
    pub watchlist: Vec<String>,
    pub interval: Option<Interval>,
    pub span: Option<Span>,
    /// Strategy-specific parameters, passed through as JSON.
    pub params: Value,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            kind: "random".to_string(),
            holdings: Vec::new(),
            watchlist: Vec::new(),
            interval: None,
            span: None,
            params: Value::Null,
        }
    }
}

impl StrategySettings {
    /// The historical window, when both halves are configured.
    pub fn historicals(&self) -> Option<(Interval, Span)> {
        Some((self.interval?, self.span?))
    }
}
