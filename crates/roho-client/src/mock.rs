//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use roho_core::TransportError;

use crate::transport::{RawResponse, Request, Transport};

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<Request>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(self, response: Result<RawResponse, TransportError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.push(Ok(RawResponse::new(status, body)))
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.push(Err(error))
    }

    /// Sleep before answering, to simulate a slow server.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &Request) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no response queued".into())))
    }
}
