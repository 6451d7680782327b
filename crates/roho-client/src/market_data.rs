use async_trait::async_trait;
use roho_core::{
    ClientError, Context, Fundamental, Historical, Instrument, Interval, MarketData, Position,
    Quote, Span,
};

use crate::client::Client;

#[async_trait]
impl MarketData for Client {
    async fn quotes(&self, ctx: &Context, symbols: &[String]) -> Result<Vec<Quote>, ClientError> {
        Client::quotes(self, ctx, symbols).await
    }

    async fn fundamentals(
        &self,
        ctx: &Context,
        symbols: &[String],
    ) -> Result<Vec<Fundamental>, ClientError> {
        Client::fundamentals(self, ctx, symbols).await
    }

    async fn positions(&self, ctx: &Context) -> Result<Vec<Position>, ClientError> {
        Client::positions(self, ctx).await
    }

    async fn historicals(
        &self,
        ctx: &Context,
        interval: Interval,
        span: Span,
        symbols: &[String],
    ) -> Result<Vec<Historical>, ClientError> {
        Client::historicals(self, ctx, interval, span, symbols).await
    }

    async fn instrument_by_url(&self, ctx: &Context, url: &str) -> Result<Instrument, ClientError> {
        Client::instrument_by_url(self, ctx, url).await
    }
}
