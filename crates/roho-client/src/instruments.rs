use roho_core::{ClientError, Context, Instrument};

use crate::client::Client;
use crate::params::InstrumentParams;
use crate::transport::Request;

impl Client {
    /// Look up the instrument for `symbol`.
    pub async fn instrument(&self, ctx: &Context, symbol: &str) -> Result<Instrument, ClientError> {
        self.instruments_with(ctx, &InstrumentParams::symbol(symbol))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("instrument for symbol {symbol}")))
    }

    /// Fetch an instrument from its canonical URL, as referenced by
    /// positions, quotes and orders.
    pub async fn instrument_by_url(&self, ctx: &Context, url: &str) -> Result<Instrument, ClientError> {
        self.call(ctx, Request::parse(crate::Method::GET, url)?).await
    }

    /// Search instruments.
    pub async fn instruments_with(
        &self,
        ctx: &Context,
        params: &InstrumentParams,
    ) -> Result<Vec<Instrument>, ClientError> {
        let url = self.api_url("instruments")?;
        self.list(ctx, url, params).await
    }
}
