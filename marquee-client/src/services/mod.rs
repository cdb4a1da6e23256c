//! Service traits consumed by the view layer.
//!
//! Each trait is implemented by a thin adapter over [`CatalogClient`]
//! (constructor injection, no implicit context lookup). Adapters collapse
//! gateway failures to `Option`/empty defaults after logging; callers
//! decide whether to leave state unchanged, reset, or notify.
//!
//! [`CatalogClient`]: crate::api_client::CatalogClient

mod account;
mod catalog;
mod people;

pub use account::{AccountApiAdapter, AccountService};
pub use catalog::{CatalogApiAdapter, CatalogService};
pub use people::{PeopleApiAdapter, PeopleService};

use log::warn;

use crate::error::ClientResult;

/// Collapse a gateway result to `Option`, logging the failure.
pub(crate) fn swallow<T>(operation: &str, result: ClientResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("[services] {operation} failed: {e}");
            None
        }
    }
}
