use roho_core::{ClientError, Context, Quote};

use crate::client::Client;
use crate::params::SymbolParams;

impl Client {
    /// Latest quotes for `symbols`. Symbols the server does not know are
    /// returned as `null` entries and dropped here.
    pub async fn quotes<S>(&self, ctx: &Context, symbols: &[S]) -> Result<Vec<Quote>, ClientError>
    where
        S: AsRef<str> + Sync,
    {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.api_url("quotes")?;
        let quotes: Vec<Option<Quote>> = self.list(ctx, url, &SymbolParams::new(symbols)).await?;
        Ok(quotes.into_iter().flatten().collect())
    }

    /// Quote for a single symbol.
    pub async fn quote(&self, ctx: &Context, symbol: &str) -> Result<Quote, ClientError> {
        self.quotes(ctx, &[symbol])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("quote for {symbol}")))
    }
}
