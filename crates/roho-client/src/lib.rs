//! Typed REST client for the brokerage API.
//!
//! Every endpoint goes through [`Client::call`], which executes a [`Request`]
//! on a shared [`Transport`], turns error statuses into
//! [`roho_core::ApiError`] and decodes successful bodies into the caller's
//! type.

mod accounts;
mod client;
mod config;
mod fundamentals;
mod historicals;
mod instruments;
mod market_data;
mod orders;
mod params;
mod positions;
mod quotes;
mod transport;

#[cfg(test)]
mod mock;

pub use client::{decode_response, Client};
pub use config::ClientConfig;
pub use params::{HistoricalParams, InstrumentParams, PositionParams, QueryParams, SymbolParams};
pub use transport::{Method, RawResponse, Request, ReqwestTransport, Transport, Url};
