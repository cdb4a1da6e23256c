//! Client infrastructure for the Marquee movie-catalog application.
//!
//! The crate is split along the same seams as the app it serves:
//!
//! - [`api_client`] — the remote data gateway; typed HTTP calls against the
//!   catalog service with bearer auth and an optional session identifier.
//! - [`aggregator`] — incremental paginated list aggregation with
//!   de-duplication and a single-flight fetch guard.
//! - [`session`] — request-token/browser-approval/session-exchange flow and
//!   the persisted session identifier.
//! - [`services`] — constructor-injected service traits the view layer
//!   consumes; failures collapse to `Option`/empty defaults there.
//! - [`state`] — explicit application state with load-on-start /
//!   save-on-change persistence.

pub mod aggregator;
pub mod api_client;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;

pub use aggregator::{FailurePolicy, ListAggregator};
pub use api_client::CatalogClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{AuthFlow, Authorizer, SessionStorage};
pub use state::{AppState, AppStateStore, Theme};
