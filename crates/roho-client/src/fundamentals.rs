use roho_core::{ClientError, Context, Fundamental};

use crate::client::Client;
use crate::params::SymbolParams;

impl Client {
    /// Fundamentals for `symbols`.
    ///
    /// Results come back in request order without a symbol field, so each
    /// entry is tagged with the symbol it was requested for. `null` entries
    /// (unknown symbols) are dropped after tagging.
    pub async fn fundamentals<S>(
        &self,
        ctx: &Context,
        symbols: &[S],
    ) -> Result<Vec<Fundamental>, ClientError>
    where
        S: AsRef<str> + Sync,
    {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        let params = SymbolParams::new(symbols);
        let url = self.api_url("fundamentals")?;
        let results: Vec<Option<Fundamental>> = self.list(ctx, url, &params).await?;

        Ok(results
            .into_iter()
            .zip(params.symbols)
            .filter_map(|(fundamental, symbol)| {
                let mut fundamental = fundamental?;
                if fundamental.symbol.as_deref().map_or(true, str::is_empty) {
                    fundamental.symbol = Some(symbol);
                }
                Some(fundamental)
            })
            .collect())
    }
}
