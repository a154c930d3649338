//! Transport decorator that consults an interceptor before the network.

use super::{Transport, TransportError, TransportResponse};
use crate::intercept::Interceptor;
use async_trait::async_trait;
use std::sync::Arc;

/// Wraps any transport with an interception layer. Matched requests are
/// answered from the rule set (after the configured mock delay, if any);
/// everything else passes through to the inner transport unmodified.
pub struct InterceptedTransport {
    interceptor: Arc<Interceptor>,
    inner: Arc<dyn Transport>,
}

impl InterceptedTransport {
    pub fn new(interceptor: Arc<Interceptor>, inner: Arc<dyn Transport>) -> Self {
        Self { interceptor, inner }
    }

    pub fn interceptor(&self) -> &Interceptor {
        &self.interceptor
    }
}

#[async_trait]
impl Transport for InterceptedTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        // URL parsing is only needed for rule matching, so an inactive
        // interceptor forwards the raw URL untouched.
        if self.interceptor.is_active() {
            let path = reqwest::Url::parse(url)
                .map_err(|e| TransportError::InvalidUrl(format!("{url}: {e}")))?
                .path()
                .to_string();
            if let Some(mock) = self.interceptor.match_request(url, &path) {
                if let Some(delay) = self.interceptor.delay() {
                    tokio::time::sleep(delay).await;
                }
                return Ok(TransportResponse::new(mock.status, mock.body_bytes()));
            }
        }
        self.inner.get(url).await
    }
}
