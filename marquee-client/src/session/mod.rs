//! Session establishment and persistence.
//!
//! The catalog authenticates through a three-legged flow: request a token,
//! have the user approve it in an external browser, then exchange it for a
//! session identifier that rides along on personal-list requests.

mod flow;
mod storage;

pub use flow::{AuthFlow, Authorizer, SessionEndpoints};
pub use storage::SessionStorage;
