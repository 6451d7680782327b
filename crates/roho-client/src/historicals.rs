use roho_core::{ClientError, Context, Historical, Interval, Span};

use crate::client::Client;
use crate::params::HistoricalParams;

impl Client {
    /// Historical buckets for `symbols` over `span`, one bucket per `interval`.
    pub async fn historicals<S>(
        &self,
        ctx: &Context,
        interval: Interval,
        span: Span,
        symbols: &[S],
    ) -> Result<Vec<Historical>, ClientError>
    where
        S: AsRef<str> + Sync,
    {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        self.historicals_with(ctx, &HistoricalParams::new(symbols, interval, span))
            .await
    }

    pub async fn historicals_with(
        &self,
        ctx: &Context,
        params: &HistoricalParams,
    ) -> Result<Vec<Historical>, ClientError> {
        let url = self.api_url("quotes/historicals")?;
        let results: Vec<Option<Historical>> = self.list(ctx, url, params).await?;
        Ok(results.into_iter().flatten().collect())
    }

    /// Historicals for one symbol.
    pub async fn historical(
        &self,
        ctx: &Context,
        symbol: &str,
        interval: Interval,
        span: Span,
    ) -> Result<Historical, ClientError> {
        self.historicals(ctx, interval, span, &[symbol])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("historicals for {symbol}")))
    }
}
