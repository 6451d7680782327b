//! Market data source trait definition.

use async_trait::async_trait;

use crate::context::Context;
use crate::error::ClientError;
use crate::types::{Fundamental, Historical, Instrument, Interval, Position, Quote, Span};

/// The endpoints a combined market view is assembled from.
///
/// Implemented by the API client; tests substitute an in-memory source.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Latest quotes for the given symbols. Unknown symbols are omitted.
    async fn quotes(&self, ctx: &Context, symbols: &[String]) -> Result<Vec<Quote>, ClientError>;

    /// Fundamentals for the given symbols, each tagged with its symbol.
    async fn fundamentals(
        &self,
        ctx: &Context,
        symbols: &[String],
    ) -> Result<Vec<Fundamental>, ClientError>;

    /// Non-zero positions held by the account.
    async fn positions(&self, ctx: &Context) -> Result<Vec<Position>, ClientError>;

    /// Historical buckets for the given symbols.
    ///
    /// # Returns
    /// One entry per symbol, records ordered from oldest to newest
    async fn historicals(
        &self,
        ctx: &Context,
        interval: Interval,
        span: Span,
        symbols: &[String],
    ) -> Result<Vec<Historical>, ClientError>;

    /// Resolve an instrument from its canonical URL.
    async fn instrument_by_url(&self, ctx: &Context, url: &str) -> Result<Instrument, ClientError>;
}
