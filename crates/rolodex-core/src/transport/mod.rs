//! Transport abstraction over the HTTP layer.
//!
//! `Transport` issues GET requests and returns status plus body. Non-2xx
//! statuses are responses, not errors; `TransportError` covers failures
//! below the status layer. Implementations wrap one another: the
//! intercepted transport consults its rule set before delegating to the
//! wrapped real transport.

mod http;
mod intercepted;

pub use http::HttpTransport;
pub use intercepted::InterceptedTransport;

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised before any HTTP status is available.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Status and body of a completed request.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// A source of HTTP responses, wrappable for interception.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}
