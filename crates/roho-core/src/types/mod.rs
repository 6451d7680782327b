//! Core data types for the brokerage client.

mod account;
mod fundamental;
mod historical;
mod instrument;
mod market_view;
mod meta;
mod order;
mod position;
mod quote;
mod trade;

pub use account::{Account, Portfolio};
pub use fundamental::Fundamental;
pub use historical::{Bounds, Historical, HistoricalRecord, Interval, Span};
pub use instrument::Instrument;
pub use market_view::{CombinedStock, MarketView};
pub use meta::{Meta, Results};
pub use order::{Order, OrderOpts, OrderType, Side, TimeInForce, Trigger};
pub use position::{CryptoPosition, LegPosition, OptionPosition, Position};
pub use quote::Quote;
pub use trade::Trade;
