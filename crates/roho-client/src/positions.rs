use roho_core::{ClientError, Context, CryptoPosition, OptionPosition, Position};

use crate::client::Client;
use crate::params::PositionParams;

impl Client {
    /// Equity positions with a non-zero quantity.
    pub async fn positions(&self, ctx: &Context) -> Result<Vec<Position>, ClientError> {
        self.positions_with(ctx, PositionParams::nonzero()).await
    }

    pub async fn positions_with(
        &self,
        ctx: &Context,
        params: PositionParams,
    ) -> Result<Vec<Position>, ClientError> {
        let url = self.api_url("positions")?;
        self.list(ctx, url, &params).await
    }

    /// Aggregate options positions with a non-zero quantity.
    pub async fn option_positions(&self, ctx: &Context) -> Result<Vec<OptionPosition>, ClientError> {
        self.option_positions_with(ctx, PositionParams::nonzero()).await
    }

    pub async fn option_positions_with(
        &self,
        ctx: &Context,
        params: PositionParams,
    ) -> Result<Vec<OptionPosition>, ClientError> {
        let url = self.api_url("options/aggregate_positions")?;
        self.list(ctx, url, &params).await
    }

    /// Crypto holdings with a non-zero quantity.
    pub async fn crypto_positions(&self, ctx: &Context) -> Result<Vec<CryptoPosition>, ClientError> {
        self.crypto_positions_with(ctx, PositionParams::nonzero()).await
    }

    pub async fn crypto_positions_with(
        &self,
        ctx: &Context,
        params: PositionParams,
    ) -> Result<Vec<CryptoPosition>, ClientError> {
        let url = self.crypto_url("holdings")?;
        self.list(ctx, url, &params).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use roho_core::Context;

    use crate::mock::MockTransport;
    use crate::{Client, PositionParams};

    const POSITIONS: &str = r#"{"results": [{
        "url": "https://api.robinhood.com/positions/1/spy/",
        "created_at": "2024-01-02T15:00:00Z",
        "updated_at": "2024-07-10T15:00:00Z",
        "account": "https://api.robinhood.com/accounts/1/",
        "instrument": "https://api.robinhood.com/instruments/spy/",
        "average_buy_price": "400.0000",
        "quantity": "2.00000000"
    }], "next": null}"#;

    #[tokio::test]
    async fn test_positions_request_nonzero() {
        let mock = Arc::new(MockTransport::new().respond(200, POSITIONS));
        let client = Client::new(mock.clone());

        let positions = client.positions(&Context::background()).await.unwrap();

        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].quantity, 2.0);
        assert_eq!(
            mock.requests()[0].url().as_str(),
            "https://api.robinhood.com/positions/?nonzero=true"
        );
    }

    #[tokio::test]
    async fn test_all_positions_omit_filter() {
        let mock = Arc::new(MockTransport::new().respond(200, r#"{"results": []}"#));
        let client = Client::new(mock.clone());

        let positions = client
            .positions_with(&Context::background(), PositionParams::default())
            .await
            .unwrap();

        assert!(positions.is_empty());
        assert_eq!(
            mock.requests()[0].url().as_str(),
            "https://api.robinhood.com/positions/"
        );
    }

    #[tokio::test]
    async fn test_crypto_positions_use_crypto_host() {
        let body = r#"{"results": [{
            "created_at": "2024-01-02T15:00:00Z",
            "updated_at": "2024-07-10T15:00:00Z",
            "id": "h1",
            "account_id": "a1",
            "quantity": "0.50000000",
            "currency": {"code": "BTC"}
        }]}"#;
        let mock = Arc::new(MockTransport::new().respond(200, body));
        let client = Client::new(mock.clone());

        let holdings = client.crypto_positions(&Context::background()).await.unwrap();

        assert_eq!(holdings[0].quantity, 0.5);
        assert_eq!(
            mock.requests()[0].url().as_str(),
            "https://nummus.robinhood.com/holdings/?nonzero=true"
        );
    }

    #[tokio::test]
    async fn test_option_positions_path() {
        let mock = Arc::new(MockTransport::new().respond(200, r#"{"results": []}"#));
        let client = Client::new(mock.clone());

        client.option_positions(&Context::background()).await.unwrap();
        assert_eq!(
            mock.requests()[0].url().path(),
            "/options/aggregate_positions/"
        );
    }
}
