//! Personal lists (favourites, watchlist) and profile service.

use std::sync::Arc;

use async_trait::async_trait;

use marquee_model::{Account, MediaStateRequest, Movie, Page, SessionStatus};

use crate::api_client::CatalogClient;
use crate::error::ClientResult;
use crate::services::swallow;

/// Operations that require an established session.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Profile of the session owner.
    async fn profile(&self) -> Option<Account>;

    /// One page of favourite movies.
    async fn favourite_movies(&self, account_id: u64, page: u32) -> Option<Page<Movie>>;

    /// One page of watchlist movies.
    async fn watchlist_movies(&self, account_id: u64, page: u32) -> Option<Page<Movie>>;

    /// Mark or unmark a favourite; false when the mutation failed.
    async fn set_favourite(&self, account_id: u64, movie_id: u64, favourite: bool) -> bool;

    /// Add to or remove from the watchlist; false when the mutation failed.
    async fn set_watchlist(&self, account_id: u64, movie_id: u64, watchlist: bool) -> bool;
}

/// [`AccountService`] backed by the HTTP gateway.
#[derive(Debug, Clone)]
pub struct AccountApiAdapter {
    client: Arc<CatalogClient>,
}

impl AccountApiAdapter {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountService for AccountApiAdapter {
    async fn profile(&self) -> Option<Account> {
        swallow("account profile", self.client.account().await)
    }

    async fn favourite_movies(&self, account_id: u64, page: u32) -> Option<Page<Movie>> {
        swallow(
            "favourite movies",
            self.client.favourite_movies(account_id, page).await,
        )
    }

    async fn watchlist_movies(&self, account_id: u64, page: u32) -> Option<Page<Movie>> {
        swallow(
            "watchlist movies",
            self.client.watchlist_movies(account_id, page).await,
        )
    }

    async fn set_favourite(&self, account_id: u64, movie_id: u64, favourite: bool) -> bool {
        let request = MediaStateRequest::favourite(movie_id, favourite);
        mutation_succeeded(
            "favourite mutation",
            self.client.set_favourite(account_id, &request).await,
        )
    }

    async fn set_watchlist(&self, account_id: u64, movie_id: u64, watchlist: bool) -> bool {
        let request = MediaStateRequest::watchlist(movie_id, watchlist);
        mutation_succeeded(
            "watchlist mutation",
            self.client.set_watchlist(account_id, &request).await,
        )
    }
}

/// Collapse a mutation response to its success flag; transport and decode
/// failures read as an unsuccessful mutation.
fn mutation_succeeded(operation: &str, result: ClientResult<SessionStatus>) -> bool {
    swallow(operation, result)
        .map(|status| status.success)
        .unwrap_or(false)
}
