//! HTTP transport boundary.
//!
//! The pipeline only needs one primitive: execute a prepared request and hand
//! back the status and the full body. [`ReqwestTransport`] is the production
//! implementation; it is cheap to clone and shares one connection pool.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use roho_core::{ClientError, TransportError};
use serde_json::Value;

use crate::config::ClientConfig;

pub use reqwest::Method;
pub use reqwest::Url;

/// An immutable request descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    url: Url,
    body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: Url, body: Value) -> Self {
        Self {
            method: Method::POST,
            url,
            body: Some(body),
        }
    }

    /// Build a request from an absolute URL string.
    pub fn parse(method: Method, url: &str) -> Result<Self, ClientError> {
        let url = Url::parse(url)
            .map_err(|e| ClientError::InvalidRequest(format!("{url:?}: {e}")))?;
        Ok(Self::new(method, url))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Status, headers and the complete body of a response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Authenticated HTTP transport. Must be safe for concurrent use.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request and read the whole response body.
    async fn execute(&self, request: &Request) -> Result<RawResponse, TransportError>;
}

/// Production transport using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport that sends the configured bearer token on every request.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ClientError::Configuration(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &Request) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method().clone(), request.url().clone());

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else if e.is_connect() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Request(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else {
                TransportError::Body(e.to_string())
            }
        })?;

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
