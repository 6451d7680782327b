//! Error types for the brokerage client and strategy engine.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::types::Trade;

/// Top-level error.
#[derive(Error, Debug)]
pub enum RohoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures raised by the transport before a response was obtained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Why a [`crate::Context`] stopped a future early.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("context cancelled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Errors returned by the typed call pipeline and the endpoints built on it.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("request cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("got response {status} and could not decode error body {body:?}")]
    MalformedErrorBody { status: u16, body: String },

    #[error("decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("order {0} cannot be cancelled")]
    NotCancelable(String),
}

impl ClientError {
    /// The structured server rejection, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for ClientError {
    fn from(e: ContextError) -> Self {
        match e {
            ContextError::Cancelled => ClientError::Cancelled,
            ContextError::DeadlineExceeded => ClientError::DeadlineExceeded,
        }
    }
}

/// Strategy construction and evaluation errors.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("no strategy named {0:?} exists")]
    UnknownStrategy(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The randomness source failed mid-evaluation. `partial` holds the
    /// trades produced before the failure.
    #[error("randomness source failed after {} trade(s): {message}", partial.len())]
    Randomness { message: String, partial: Vec<Trade> },
}

impl StrategyError {
    /// Trades produced before evaluation was aborted.
    pub fn partial_trades(&self) -> &[Trade] {
        match self {
            StrategyError::Randomness { partial, .. } => partial,
            _ => &[],
        }
    }

    pub fn into_partial_trades(self) -> Vec<Trade> {
        match self {
            StrategyError::Randomness { partial, .. } => partial,
            _ => Vec::new(),
        }
    }
}

/// The error messages returned by the API server, keyed by field name.
///
/// Callers that need structured access should use the accessors rather than
/// parse the `Display` output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiError(BTreeMap<String, Value>);

impl ApiError {
    pub fn new(fields: BTreeMap<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.0
    }

    /// The `detail` message most endpoints use for single-cause failures.
    pub fn detail(&self) -> Option<&str> {
        self.0.get("detail").and_then(Value::as_str)
    }

    /// Messages under `non_field_errors`, e.g. insufficient buying power.
    pub fn non_field_errors(&self) -> Vec<&str> {
        match self.0.get("non_field_errors") {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(s)) => vec![s.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Error returned from API: ")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::String(s) => write!(f, "{key}: {s:?}")?,
                other => write!(f, "{key}: {other}")?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Result type alias for roho operations.
pub type RohoResult<T> = Result<T, RohoError>;
