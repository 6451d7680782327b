//! Query parameter encoding for list endpoints.

use roho_core::{Bounds, Interval, Span};

use crate::transport::Url;

/// Something that renders itself as URL query pairs.
pub trait QueryParams {
    fn pairs(&self) -> Vec<(&'static str, String)>;
}

impl QueryParams for () {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Append `params` to `url`. An empty set leaves the URL untouched.
pub(crate) fn with_query<P: QueryParams + ?Sized>(mut url: Url, params: &P) -> Url {
    let pairs = params.pairs();
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
    }
    url
}

/// Filters for position listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionParams {
    /// Only return positions with a non-zero quantity.
    pub nonzero: bool,
}

impl PositionParams {
    pub fn nonzero() -> Self {
        Self { nonzero: true }
    }
}

impl QueryParams for PositionParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        if self.nonzero {
            vec![("nonzero", "true".to_string())]
        } else {
            Vec::new()
        }
    }
}

/// A comma-joined `symbols` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolParams {
    pub symbols: Vec<String>,
}

impl SymbolParams {
    pub fn new<S: AsRef<str>>(symbols: &[S]) -> Self {
        Self {
            symbols: symbols.iter().map(|s| s.as_ref().to_uppercase()).collect(),
        }
    }
}

impl QueryParams for SymbolParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![("symbols", self.symbols.join(","))]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalParams {
    pub symbols: Vec<String>,
    pub interval: Interval,
    pub span: Span,
    pub bounds: Option<Bounds>,
}

impl HistoricalParams {
    pub fn new<S: AsRef<str>>(symbols: &[S], interval: Interval, span: Span) -> Self {
        Self {
            symbols: SymbolParams::new(symbols).symbols,
            interval,
            span,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

impl QueryParams for HistoricalParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("symbols", self.symbols.join(",")),
            ("interval", self.interval.to_string()),
            ("span", self.span.to_string()),
        ];
        if let Some(bounds) = self.bounds {
            pairs.push(("bounds", bounds.as_str().to_string()));
        }
        pairs
    }
}

/// Instrument search filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstrumentParams {
    pub symbol: Option<String>,
    pub query: Option<String>,
}

impl InstrumentParams {
    pub fn symbol(symbol: &str) -> Self {
        Self {
            symbol: Some(symbol.to_uppercase()),
            query: None,
        }
    }

    pub fn query(query: &str) -> Self {
        Self {
            symbol: None,
            query: Some(query.to_string()),
        }
    }
}

impl QueryParams for InstrumentParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(symbol) = &self.symbol {
            pairs.push(("symbol", symbol.clone()));
        }
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs
    }
}
