//! Catalog browsing service: sections, search, discovery, details.

use std::sync::Arc;

use async_trait::async_trait;

use marquee_model::{
    Credits, DiscoverRequest, Genre, ListRequest, Movie, MovieDetails, Page, SearchRequest,
    Section, VideoList,
};

use crate::api_client::CatalogClient;
use crate::services::swallow;

/// Movie catalog operations the list and detail screens depend on.
///
/// All operations return `None`/empty on failure; the gateway has already
/// logged the cause.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// One page of a curated section.
    async fn movie_list(&self, section: Section, page: u32) -> Option<Page<Movie>>;

    /// One page of free-text search results.
    async fn search_movies(&self, request: SearchRequest) -> Option<Page<Movie>>;

    /// One page of genre-filtered discovery results.
    async fn discover_movies(&self, request: DiscoverRequest) -> Option<Page<Movie>>;

    /// All movie genres; empty on failure.
    async fn genres(&self) -> Vec<Genre>;

    async fn movie_details(&self, movie_id: u64) -> Option<MovieDetails>;

    async fn movie_credits(&self, movie_id: u64) -> Option<Credits>;

    async fn movie_videos(&self, movie_id: u64) -> Option<VideoList>;

    async fn similar_movies(&self, movie_id: u64, page: u32) -> Option<Page<Movie>>;
}

/// [`CatalogService`] backed by the HTTP gateway.
#[derive(Debug, Clone)]
pub struct CatalogApiAdapter {
    client: Arc<CatalogClient>,
}

impl CatalogApiAdapter {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogService for CatalogApiAdapter {
    async fn movie_list(&self, section: Section, page: u32) -> Option<Page<Movie>> {
        let request = ListRequest::page(page);
        swallow(
            "movie list",
            self.client.movie_list(section, &request).await,
        )
    }

    async fn search_movies(&self, request: SearchRequest) -> Option<Page<Movie>> {
        swallow("movie search", self.client.search_movies(&request).await)
    }

    async fn discover_movies(&self, request: DiscoverRequest) -> Option<Page<Movie>> {
        swallow("discover", self.client.discover_movies(&request).await)
    }

    async fn genres(&self) -> Vec<Genre> {
        swallow("genre list", self.client.genres().await)
            .map(|list| list.genres)
            .unwrap_or_default()
    }

    async fn movie_details(&self, movie_id: u64) -> Option<MovieDetails> {
        swallow("movie details", self.client.movie_details(movie_id).await)
    }

    async fn movie_credits(&self, movie_id: u64) -> Option<Credits> {
        swallow("movie credits", self.client.movie_credits(movie_id).await)
    }

    async fn movie_videos(&self, movie_id: u64) -> Option<VideoList> {
        swallow("movie videos", self.client.movie_videos(movie_id).await)
    }

    async fn similar_movies(&self, movie_id: u64, page: u32) -> Option<Page<Movie>> {
        swallow(
            "similar movies",
            self.client.similar_movies(movie_id, page).await,
        )
    }
}
