//! Per-symbol aggregate of market and account data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Fundamental, Historical, Position, Quote};

/// Everything known about one symbol in an evaluation cycle. `None` means
/// "not fetched", or for `position`, "not held".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedStock {
    pub quote: Option<Quote>,
    pub fundamentals: Option<Fundamental>,
    pub position: Option<Position>,
    pub historical: Option<Historical>,
}

impl CombinedStock {
    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = Some(quote);
        self
    }

    pub fn with_fundamentals(mut self, fundamentals: Fundamental) -> Self {
        self.fundamentals = Some(fundamentals);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_historical(mut self, historical: Historical) -> Self {
        self.historical = Some(historical);
        self
    }

    pub fn is_held(&self) -> bool {
        self.position.is_some()
    }

    /// Instrument URL from whichever component carries one.
    pub fn instrument_url(&self) -> Option<&str> {
        [
            self.position.as_ref().map(|p| p.instrument_url.as_str()),
            self.quote.as_ref().map(|q| q.instrument.as_str()),
            self.fundamentals.as_ref().map(|f| f.instrument.as_str()),
        ]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
    }
}

/// Combined stocks keyed by symbol. Iteration order carries no meaning.
pub type MarketView = HashMap<String, CombinedStock>;
