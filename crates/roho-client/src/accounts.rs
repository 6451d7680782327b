use roho_core::{Account, ClientError, Context, Portfolio};

use crate::client::Client;

impl Client {
    pub async fn accounts(&self, ctx: &Context) -> Result<Vec<Account>, ClientError> {
        let url = self.api_url("accounts")?;
        self.list(ctx, url, &()).await
    }

    /// The first account, which orders are placed against.
    pub async fn account(&self, ctx: &Context) -> Result<Account, ClientError> {
        self.accounts(ctx)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound("brokerage account".to_string()))
    }

    pub async fn portfolios(&self, ctx: &Context) -> Result<Vec<Portfolio>, ClientError> {
        let url = self.api_url("portfolios")?;
        self.list(ctx, url, &()).await
    }
}
