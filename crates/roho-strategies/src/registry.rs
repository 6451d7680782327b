//! Strategy registry: build strategies from a kind name and JSON config.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use roho_core::{Strategy, StrategyConfig, StrategyError};

use crate::randomness::{OsRandom, RandomSource};
use crate::{LuckySevensConfig, LuckySevensStrategy, RandomConfig, RandomStrategy};

/// The closed set of built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    LuckySevens,
    Random,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::LuckySevens => "lucky-sevens",
            StrategyKind::Random => "random",
        }
    }

    pub fn all() -> &'static [StrategyKind] {
        &[StrategyKind::LuckySevens, StrategyKind::Random]
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| StrategyError::UnknownStrategy(s.to_string()))
    }
}

/// Information about a registered strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    pub kind: StrategyKind,
    pub name: String,
    pub description: String,
    /// Default configuration as JSON
    pub default_config: Value,
}

/// Registry of the built-in strategies.
pub struct StrategyRegistry {
    strategies: Vec<StrategyInfo>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        let strategies = vec![
            StrategyInfo {
                kind: StrategyKind::LuckySevens,
                name: "LuckySevens".to_string(),
                description: "Sells positions up 7% and buys symbols near their 52-week low"
                    .to_string(),
                default_config: json_config(&LuckySevensConfig::default()),
            },
            StrategyInfo {
                kind: StrategyKind::Random,
                name: "Random".to_string(),
                description: "Buys and sells symbols at random".to_string(),
                default_config: json_config(&RandomConfig::default()),
            },
        ];
        Self { strategies }
    }

    /// All built-in strategies, in a stable order.
    pub fn list(&self) -> &[StrategyInfo] {
        &self.strategies
    }

    pub fn get(&self, kind: &str) -> Option<&StrategyInfo> {
        let kind = kind.parse::<StrategyKind>().ok()?;
        self.strategies.iter().find(|info| info.kind == kind)
    }

    pub fn exists(&self, kind: &str) -> bool {
        self.get(kind).is_some()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|info| info.kind.as_str()).collect()
    }

    /// Create a strategy from `config`. A `null` config means defaults.
    /// Randomized strategies draw from the OS CSPRNG.
    pub fn create(
        &self,
        kind: &str,
        config: Value,
        holdings: Vec<String>,
    ) -> Result<Box<dyn Strategy>, StrategyError> {
        self.create_with_source(kind, config, holdings, Box::new(OsRandom))
    }

    /// Like [`create`](Self::create), with an explicit randomness source.
    pub fn create_with_source(
        &self,
        kind: &str,
        config: Value,
        holdings: Vec<String>,
        rng: Box<dyn RandomSource>,
    ) -> Result<Box<dyn Strategy>, StrategyError> {
        match kind.parse::<StrategyKind>()? {
            StrategyKind::LuckySevens => {
                let config: LuckySevensConfig = parse_config(config)?;
                Ok(Box::new(LuckySevensStrategy::new(config, holdings)))
            }
            StrategyKind::Random => {
                let config: RandomConfig = parse_config(config)?;
                Ok(Box::new(RandomStrategy::with_source(config, rng)))
            }
        }
    }

    /// Create a strategy with default configuration.
    pub fn create_default(
        &self,
        kind: &str,
        holdings: Vec<String>,
    ) -> Result<Box<dyn Strategy>, StrategyError> {
        self.create(kind, Value::Null, holdings)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn json_config<C: Serialize>(config: &C) -> Value {
    serde_json::to_value(config).unwrap_or(Value::Null)
}

fn parse_config<C>(config: Value) -> Result<C, StrategyError>
where
    C: StrategyConfig + Default + serde::de::DeserializeOwned,
{
    let config: C = if config.is_null() {
        C::default()
    } else {
        serde_json::from_value(config).map_err(|e| StrategyError::InvalidConfig(e.to_string()))?
    };
    config.validate()?;
    Ok(config)
}
