//! Rule types for the interception layer: URL patterns, mock requests,
//! and the pure responders that synthesize mock responses.

use regex::Regex;
use serde_json::json;
use std::fmt;
use std::sync::Arc;

/// Pattern tested against the path component of an outbound request URL.
#[derive(Debug, Clone)]
pub enum UrlPattern {
    /// Path equals the given string.
    Exact(String),
    /// Path ends with the given string.
    Suffix(String),
    /// Path matches the regex; capture groups become path parameters.
    Regex(Regex),
}

impl UrlPattern {
    /// Compile a regex pattern.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(UrlPattern::Regex(Regex::new(pattern)?))
    }

    /// Test a request path. Returns the captured path parameters on a match,
    /// in capture order (empty for exact and suffix patterns).
    pub fn matches(&self, path: &str) -> Option<Vec<String>> {
        match self {
            UrlPattern::Exact(exact) => {
                if path == exact {
                    Some(Vec::new())
                } else {
                    None
                }
            }
            UrlPattern::Suffix(suffix) => {
                if path.ends_with(suffix.as_str()) {
                    Some(Vec::new())
                } else {
                    None
                }
            }
            UrlPattern::Regex(regex) => regex.captures(path).map(|captures| {
                captures
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|group| group.as_str().to_string())
                    .collect()
            }),
        }
    }
}

/// The outbound request as seen by a responder.
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// Full URL as issued by the caller.
    pub url: String,
    /// Path component the pattern was tested against (no query string).
    pub path: String,
    /// Path parameters captured by the pattern.
    pub params: Vec<String>,
}

/// Status and JSON body synthesized by a responder.
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl MockResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Structured `{"message": ...}` body used for lookup errors.
    pub fn message(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "message": message }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Encode the body for the transport layer.
    pub fn body_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(&self.body).unwrap_or_default()
    }
}

/// Pure response synthesizer invoked when a rule matches. Must not perform
/// real I/O; responders run synchronously in tests.
pub type Responder = Arc<dyn Fn(&MockRequest) -> MockResponse + Send + Sync>;

/// One interception rule: a pattern and the responder it routes to.
/// Rules are evaluated in registration order; the first match wins.
#[derive(Clone)]
pub struct MockRule {
    pattern: UrlPattern,
    responder: Responder,
}

impl MockRule {
    pub fn new(
        pattern: UrlPattern,
        responder: impl Fn(&MockRequest) -> MockResponse + Send + Sync + 'static,
    ) -> Self {
        Self {
            pattern,
            responder: Arc::new(responder),
        }
    }

    pub fn pattern(&self) -> &UrlPattern {
        &self.pattern
    }

    /// Test the rule against a request; on a match, run the responder with
    /// the captured path parameters.
    pub fn apply(&self, url: &str, path: &str) -> Option<MockResponse> {
        let params = self.pattern.matches(path)?;
        let request = MockRequest {
            url: url.to_string(),
            path: path.to_string(),
            params,
        };
        Some((self.responder)(&request))
    }
}

impl fmt::Debug for MockRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockRule")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}
