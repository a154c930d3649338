//! Rolodex core: fetch a remote user directory and drive the
//! idle/loading/loaded/failed lifecycle around it.
//!
//! The transport stack can be wrapped with an [`intercept::Interceptor`]
//! that answers matched requests from embedded fixtures instead of the
//! network, with mandatory pass-through for everything else. The
//! interceptor is an explicitly constructed instance, injected where the
//! requests are issued; there is no process-global mock state.

// ===== Core fetch pipeline =====
pub mod config;
pub mod controller;
pub mod record;
pub mod transport;
pub mod view;

// ===== Interception layer and its fixture data =====
pub mod fixture;
pub mod intercept;

pub use config::Config;
pub use controller::{fetch_user, FetchError, FetchState, ListController};
pub use fixture::{FixtureError, FixtureStore};
pub use intercept::{Interceptor, MockRequest, MockResponse, MockRule, UrlPattern};
pub use record::{ApiMessage, User, UsersPayload};
pub use transport::{
    HttpTransport, InterceptedTransport, Transport, TransportError, TransportResponse,
};
pub use view::{ListViewModel, Row, ERROR_BANNER};
