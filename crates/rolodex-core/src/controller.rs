//! Fetch lifecycle: one GET per activation, published as observable state.
//!
//! The controller owns no persistent state beyond the in-flight request of
//! its single activation. Transitions are published over a watch channel so
//! a renderer can observe `Loading` mid-flight; completions that arrive
//! after every subscriber is gone are published into the void and never
//! panic.

use crate::config::Config;
use crate::record::{ApiMessage, User, UsersPayload};
use crate::transport::{Transport, TransportError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Observable state of the user list fetch.
///
/// The enum makes the loading/error exclusivity structural: no value can
/// have a loader and an error banner visible at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    /// No request issued yet.
    #[default]
    Idle,
    /// Request in flight. Records from a prior completion are not retained.
    Loading,
    /// Fetch completed; records preserve the response payload order.
    Loaded { records: Vec<User> },
    /// Fetch failed. No partial records, no status detail.
    Failed,
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed)
    }

    /// Loading and Idle are in-flight or pre-flight; Loaded and Failed are
    /// final for the activation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Loaded { .. } | FetchState::Failed)
    }

    /// Records held by this state; empty outside `Loaded`.
    pub fn records(&self) -> &[User] {
        match self {
            FetchState::Loaded { records } => records,
            _ => &[],
        }
    }
}

/// Why a fetch ended in `Failed`. The distinction is logged but not
/// surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("Server returned status {status}")]
    Server { status: u16 },
    #[error("Malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Drives the list fetch lifecycle: idle, then loading, then exactly one
/// terminal state per activation.
pub struct ListController {
    transport: Arc<dyn Transport>,
    users_url: String,
    state: watch::Sender<FetchState>,
    activated: bool,
}

impl ListController {
    pub fn new(transport: Arc<dyn Transport>, config: &Config) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            transport,
            users_url: config.users_url(),
            state,
            activated: false,
        }
    }

    /// Subscribe to state transitions. A subscriber attached before
    /// `activate` sees `Loading` land before the request is dispatched.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Run one fetch. Only the first call per controller does any work;
    /// later calls are logged no-ops. There is no retry and no cancellation:
    /// a request that never resolves leaves the state at `Loading`.
    pub async fn activate(&mut self) {
        if self.activated {
            debug!("Controller already activated, ignoring");
            return;
        }
        self.activated = true;

        self.state.send_replace(FetchState::Loading);

        let next = match self.fetch_users().await {
            Ok(records) => {
                debug!("Fetched {} user records", records.len());
                FetchState::Loaded { records }
            }
            Err(e) => {
                warn!("User list fetch failed: {}", e);
                FetchState::Failed
            }
        };
        // Both arms land here, so Loading cannot survive completion.
        self.state.send_replace(next);
    }

    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let response = self.transport.get(&self.users_url).await?;
        if !response.is_success() {
            return Err(FetchError::Server {
                status: response.status,
            });
        }
        let payload: UsersPayload = response.json()?;
        Ok(payload.users)
    }
}

/// One-shot lookup of a single record by id.
///
/// Shares the transport stack and error taxonomy with the list fetch but
/// not its state machine. Structured 404/400 lookup bodies are ordinary
/// server responses: the message is logged and the status is returned as
/// `FetchError::Server`.
pub async fn fetch_user(
    transport: &dyn Transport,
    config: &Config,
    id: &str,
) -> Result<User, FetchError> {
    let url = config.user_url(id);
    let response = transport.get(&url).await?;
    if !response.is_success() {
        if let Ok(body) = response.json::<ApiMessage>() {
            warn!(
                "User lookup '{}' failed with status {}: {}",
                id, response.status, body.message
            );
        }
        return Err(FetchError::Server {
            status: response.status,
        });
    }
    Ok(response.json()?)
}
