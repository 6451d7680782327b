//! Trading strategies over a combined market view.
//!
//! This crate provides:
//! - The Random demonstration strategy and the LuckySevens heuristic
//! - A registry that builds strategies from a kind and JSON configuration
//! - Market view assembly from any [`roho_core::MarketData`] source
//! - The [`Engine`] that ties a data source to a strategy

mod engine;
mod lucky_sevens;
mod random;
mod randomness;
mod registry;
mod view_builder;

#[cfg(test)]
mod test_support;

pub use engine::{Engine, EngineConfig};
pub use lucky_sevens::{LuckySevensConfig, LuckySevensStrategy};
pub use random::{RandomConfig, RandomStrategy};
pub use randomness::{OsRandom, RandomSource, RandomnessError, SequenceRandom};
pub use registry::{StrategyInfo, StrategyKind, StrategyRegistry};
pub use view_builder::MarketViewBuilder;
