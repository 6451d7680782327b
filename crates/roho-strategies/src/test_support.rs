//! Fixtures shared by the strategy and engine tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use roho_core::{
    ClientError, Context, Fundamental, Historical, Instrument, Interval, MarketData, Position,
    Quote, Span,
};

pub fn instrument_url(symbol: &str) -> String {
    format!("https://api.robinhood.com/instruments/{}/", symbol.to_lowercase())
}

pub fn position(symbol: &str, average_buy_price: f64, quantity: f64) -> Position {
    serde_json::from_value(json!({
        "url": format!("https://api.robinhood.com/positions/1/{symbol}/"),
        "created_at": "2024-01-02T15:00:00Z",
        "updated_at": "2024-07-10T15:00:00Z",
        "account": "https://api.robinhood.com/accounts/1/",
        "instrument": instrument_url(symbol),
        "average_buy_price": average_buy_price.to_string(),
        "quantity": quantity.to_string(),
    }))
    .unwrap()
}

pub fn quote(symbol: &str, bid: f64, ask: f64) -> Quote {
    serde_json::from_value(json!({
        "symbol": symbol,
        "bid_price": bid.to_string(),
        "ask_price": ask.to_string(),
        "last_trade_price": ((bid + ask) / 2.0).to_string(),
        "instrument": instrument_url(symbol),
    }))
    .unwrap()
}

pub fn fundamentals(symbol: &str, low_52_weeks: f64, high_52_weeks: f64) -> Fundamental {
    serde_json::from_value(json!({
        "symbol": symbol,
        "low_52_weeks": low_52_weeks.to_string(),
        "high_52_weeks": high_52_weeks.to_string(),
    }))
    .unwrap()
}

/// In-memory market data keyed by symbol.
#[derive(Default)]
pub struct FakeMarketData {
    pub quotes: Vec<Quote>,
    pub fundamentals: Vec<Fundamental>,
    pub positions: Vec<Position>,
    pub historicals: Vec<Historical>,
    pub instruments: HashMap<String, Instrument>,
    pub fail_quotes: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeMarketData {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketData for FakeMarketData {
    async fn quotes(&self, _ctx: &Context, symbols: &[String]) -> Result<Vec<Quote>, ClientError> {
        self.record(format!("quotes {}", symbols.join(",")));
        if self.fail_quotes {
            return Err(ClientError::MalformedErrorBody {
                status: 502,
                body: "bad gateway".into(),
            });
        }
        Ok(self
            .quotes
            .iter()
            .filter(|q| symbols.contains(&q.symbol))
            .cloned()
            .collect())
    }

    async fn fundamentals(
        &self,
        _ctx: &Context,
        symbols: &[String],
    ) -> Result<Vec<Fundamental>, ClientError> {
        self.record(format!("fundamentals {}", symbols.join(",")));
        Ok(self
            .fundamentals
            .iter()
            .filter(|f| f.symbol.as_ref().is_some_and(|s| symbols.contains(s)))
            .cloned()
            .collect())
    }

    async fn positions(&self, _ctx: &Context) -> Result<Vec<Position>, ClientError> {
        self.record("positions");
        Ok(self.positions.clone())
    }

    async fn historicals(
        &self,
        _ctx: &Context,
        interval: Interval,
        span: Span,
        symbols: &[String],
    ) -> Result<Vec<Historical>, ClientError> {
        self.record(format!("historicals {interval} {span} {}", symbols.join(",")));
        Ok(self
            .historicals
            .iter()
            .filter(|h| symbols.contains(&h.symbol))
            .cloned()
            .collect())
    }

    async fn instrument_by_url(&self, _ctx: &Context, url: &str) -> Result<Instrument, ClientError> {
        self.record(format!("instrument {url}"));
        self.instruments
            .get(url)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(url.to_string()))
    }
}
