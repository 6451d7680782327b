//! Core types and traits for the roho brokerage client.
//!
//! This crate provides the foundational building blocks including:
//! - Wire types for quotes, fundamentals, positions, historicals, instruments and orders
//! - The combined per-symbol market view and trade intents
//! - Error types shared by the client and the strategy engine
//! - Cancellation/deadline contexts threaded through every API call
//! - Core traits for market data sources and strategies

pub mod context;
pub mod error;
pub mod market_hours;
pub mod quoted;
pub mod traits;
pub mod types;

pub use context::{CancelHandle, Context};
pub use error::{
    ApiError, ClientError, ContextError, RohoError, RohoResult, StrategyError, TransportError,
};
pub use traits::*;
pub use types::*;
