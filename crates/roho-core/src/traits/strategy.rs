//! Strategy trait definition.

use crate::error::StrategyError;
use crate::types::{MarketView, Trade};

/// Strategy configuration that can be checked before a strategy is built.
pub trait StrategyConfig: Send + Sync + Clone + 'static {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), StrategyError>;
}

/// Core strategy trait.
///
/// A strategy maps a combined market view to an ordered list of trade
/// intents. It keeps no state between calls beyond its configuration and any
/// injected randomness source, so each call depends only on the view it is
/// given.
///
/// Evaluation is synchronous and takes no [`Context`](crate::Context): all I/O
/// happens while the view is assembled.
pub trait Strategy: Send {
    /// Get the unique name of this strategy.
    fn name(&self) -> &str;

    /// Decide which trades to place.
    ///
    /// # Errors
    /// Implementations that fail mid-evaluation may carry the trades produced
    /// so far in the error (see [`StrategyError::partial_trades`]).
    fn trades(&mut self, view: &MarketView) -> Result<Vec<Trade>, StrategyError>;

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}
