//! Core traits for the brokerage client.

mod market_data;
mod strategy;

pub use market_data::MarketData;
pub use strategy::{Strategy, StrategyConfig};
