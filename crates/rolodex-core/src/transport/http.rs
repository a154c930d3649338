//! Real network transport backed by reqwest.

use super::{Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP transport with a 30 second request timeout. No retry or backoff is
/// layered on top; a timed-out request surfaces as a network error.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        debug!("GET {}", url);
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                return Err(TransportError::Connection(format!("Cannot connect: {e}")));
            }
            Err(e) => return Err(TransportError::Network(e)),
        };
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(TransportResponse { status, body })
    }
}
