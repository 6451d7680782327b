//! Assemble a combined market view from a market data source.

use std::collections::BTreeSet;

use futures::future::{try_join_all, OptionFuture};
use tracing::debug;

use roho_core::{ClientError, CombinedStock, Context, Interval, MarketData, MarketView, Position, Span};

/// Builds a [`MarketView`] for a watchlist plus everything currently held.
pub struct MarketViewBuilder<'a> {
    source: &'a dyn MarketData,
    watchlist: Vec<String>,
    include_positions: bool,
    historicals: Option<(Interval, Span)>,
}

impl<'a> MarketViewBuilder<'a> {
    pub fn new(source: &'a dyn MarketData) -> Self {
        Self {
            source,
            watchlist: Vec::new(),
            include_positions: true,
            historicals: None,
        }
    }

    pub fn watchlist<S: AsRef<str>>(mut self, symbols: &[S]) -> Self {
        self.watchlist = symbols.iter().map(|s| s.as_ref().to_uppercase()).collect();
        self
    }

    pub fn include_positions(mut self, include: bool) -> Self {
        self.include_positions = include;
        self
    }

    /// Also attach historicals for the given window.
    pub fn historicals(mut self, interval: Interval, span: Span) -> Self {
        self.historicals = Some((interval, span));
        self
    }

    /// Fetch everything and join it by symbol. Any endpoint failure fails the
    /// whole assembly.
    pub async fn build(&self, ctx: &Context) -> Result<MarketView, ClientError> {
        let positions = if self.include_positions {
            self.resolve_positions(ctx).await?
        } else {
            Vec::new()
        };

        let symbols: Vec<String> = self
            .watchlist
            .iter()
            .cloned()
            .chain(positions.iter().map(|(symbol, _)| symbol.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut view = MarketView::new();
        if symbols.is_empty() {
            return Ok(view);
        }

        let historicals: OptionFuture<_> = self
            .historicals
            .map(|(interval, span)| self.source.historicals(ctx, interval, span, &symbols))
            .into();

        let (quotes, fundamentals, historicals) = futures::try_join!(
            self.source.quotes(ctx, &symbols),
            self.source.fundamentals(ctx, &symbols),
            async move { historicals.await.transpose() },
        )?;

        for symbol in &symbols {
            view.insert(symbol.clone(), CombinedStock::default());
        }
        for (symbol, position) in positions {
            if let Some(stock) = view.get_mut(&symbol) {
                stock.position = Some(position);
            }
        }
        for quote in quotes {
            if let Some(stock) = view.get_mut(&quote.symbol) {
                stock.quote = Some(quote);
            }
        }
        for fundamental in fundamentals {
            let Some(symbol) = fundamental.symbol.clone() else {
                continue;
            };
            if let Some(stock) = view.get_mut(&symbol) {
                stock.fundamentals = Some(fundamental);
            }
        }
        for historical in historicals.unwrap_or_default() {
            if let Some(stock) = view.get_mut(&historical.symbol) {
                stock.historical = Some(historical);
            }
        }

        debug!(symbols = view.len(), "Assembled market view");
        Ok(view)
    }

    /// Pair each position with its symbol, looking up instruments for
    /// positions that do not embed one.
    async fn resolve_positions(
        &self,
        ctx: &Context,
    ) -> Result<Vec<(String, Position)>, ClientError> {
        let positions = self.source.positions(ctx).await?;
        try_join_all(positions.into_iter().map(|position| async move {
            if let Some(symbol) = position.symbol.clone().filter(|s| !s.is_empty()) {
                return Ok((symbol.to_uppercase(), position));
            }
            let instrument = self
                .source
                .instrument_by_url(ctx, &position.instrument_url)
                .await?;
            Ok::<_, ClientError>((instrument.symbol.to_uppercase(), position))
        }))
        .await
    }
}
