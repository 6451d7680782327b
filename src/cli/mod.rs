//! CLI definitions.

pub mod commands;

use clap::{Parser, ValueEnum};
use roho_config::LoggingConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roho")]
#[command(author, version, about = "Brokerage REST client with pluggable trading strategies")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "ROHO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level [default: `logging.level` from config, else info]
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format (also enabled by `logging.format = "json"`)
    #[arg(long)]
    pub json_logs: bool,

    /// Symbol to look up, buy or sell
    #[arg(short, long, default_value = "SPY")]
    pub symbol: String,

    /// What to do after the account overview. Omit to only print it.
    #[arg(value_enum)]
    pub action: Option<Action>,
}

impl Cli {
    /// Effective log level and format. Flags win over the `[logging]` section.
    pub fn logging(&self, config: &LoggingConfig) -> (String, bool) {
        let level = match self.log_level {
            Some(level) => level.as_str().to_string(),
            None => config.level.clone(),
        };
        (level, self.json_logs || config.is_json())
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Place a one-share limit buy at $1.00, then cancel it
    Buy,
    /// Place a one-share limit sell at $1.00
    Sell,
    /// Evaluate the configured strategy and print proposed trades
    Trades,
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbs_parse() {
        let cli = Cli::try_parse_from(["roho", "buy"]).unwrap();
        assert_eq!(cli.action, Some(Action::Buy));
        assert_eq!(cli.symbol, "SPY");

        let cli = Cli::try_parse_from(["roho", "--symbol", "AAPL", "validate-config"]).unwrap();
        assert_eq!(cli.action, Some(Action::ValidateConfig));
        assert_eq!(cli.symbol, "AAPL");

        let cli = Cli::try_parse_from(["roho"]).unwrap();
        assert_eq!(cli.action, None);
    }

    #[test]
    fn test_logging_falls_back_to_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };

        let cli = Cli::try_parse_from(["roho"]).unwrap();
        assert_eq!(cli.logging(&config), ("debug".to_string(), true));
        assert_eq!(cli.logging(&LoggingConfig::default()), ("info".to_string(), false));

        let cli = Cli::try_parse_from(["roho", "--log-level", "warn"]).unwrap();
        assert_eq!(cli.logging(&config), ("warn".to_string(), true));

        let cli = Cli::try_parse_from(["roho", "--json-logs"]).unwrap();
        assert!(cli.logging(&LoggingConfig::default()).1);
    }

    #[test]
    fn test_unknown_verb_is_rejected() {
        assert!(Cli::try_parse_from(["roho", "hodl"]).is_err());
    }
}
