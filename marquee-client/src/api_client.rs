//! Remote data gateway for the catalog service.
//!
//! Translates typed request parameters into HTTP calls and deserializes
//! responses against explicit schemas, failing closed on shape mismatch.
//! One attempt per call; no retries, no backoff. Callers own all state
//! updates.

use std::sync::Arc;

use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::RwLock;

use marquee_model::{
    Account, Credits, DiscoverRequest, GenreList, GuestSessionCreated, ImageUrls, ListRequest,
    MediaStateRequest, Movie, MovieDetails, Page, Person, PersonCredits, RequestToken,
    SearchRequest, Section, SessionCreated, SessionStatus, VideoList,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::routes;

/// Query parameter carrying the session identifier on authenticated calls.
const SESSION_PARAM: &str = "session_id";

/// HTTP client for the catalog API with bearer auth and an optional
/// session identifier.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    api_url: String,
    site_url: String,
    bearer_token: String,
    images: ImageUrls,
    session: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("api_url", &self.api_url)
            .field(
                "has_session",
                &self.session.try_read().map(|s| s.is_some()).unwrap_or(false),
            )
            .finish()
    }
}

impl CatalogClient {
    /// Create a new client from resolved configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.api_token.is_empty() {
            return Err(ClientError::MissingToken);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            site_url: config.site_url.clone(),
            bearer_token: config.api_token.clone(),
            images: ImageUrls::new(config.image_url.clone()),
            session: Arc::new(RwLock::new(None)),
        })
    }

    /// Build an absolute URL from an API-relative path.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.api_url, p.trim_start_matches('/'))
    }

    /// Image URL builder bound to the configured CDN base.
    pub fn images(&self) -> &ImageUrls {
        &self.images
    }

    /// Browser approval URL for a request token.
    pub fn authorize_url(&self, request_token: &str) -> String {
        routes::auth::authenticate_url(&self.site_url, request_token)
    }

    /// Replace the session identifier attached to subsequent requests.
    pub async fn set_session(&self, session_id: Option<String>) {
        *self.session.write().await = session_id;
    }

    /// Current session identifier, if any.
    pub async fn session(&self) -> Option<String> {
        self.session.read().await.clone()
    }

    /// Attach bearer credential, JSON accept header, and the session
    /// identifier (when present) to an outgoing request.
    pub(crate) async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .header("Accept", "application/json");
        if let Some(session_id) = self.session.read().await.as_ref() {
            builder.query(&[(SESSION_PARAM, session_id.as_str())])
        } else {
            builder
        }
    }

    /// Execute a request and deserialize the body against `T`.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            // TMDB reports mutation results as 201; anything non-2xx is failure
            if status == StatusCode::UNAUTHORIZED {
                debug!("[CatalogClient] request rejected as unauthorized");
            }
            return Err(ClientError::Status(status));
        }
        response.json::<T>().await.map_err(ClientError::Decode)
    }

    /// GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.build_url(path);
        debug!("GET {url}");
        let request = self.authorize(self.client.get(&url)).await;
        self.execute(request).await
    }

    /// GET request with typed query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let url = self.build_url(path);
        debug!("GET {url}");
        let request = self.authorize(self.client.get(&url).query(query)).await;
        self.execute(request).await
    }

    /// POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.build_url(path);
        debug!("POST {url}");
        let request = self.authorize(self.client.post(&url).json(body)).await;
        self.execute(request).await
    }

    /// DELETE request with a JSON body.
    pub async fn delete<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.build_url(path);
        debug!("DELETE {url}");
        let request = self.authorize(self.client.delete(&url).json(body)).await;
        self.execute(request).await
    }
}

/// Typed endpoint operations.
impl CatalogClient {
    /// One page of a curated movie section.
    pub async fn movie_list(
        &self,
        section: Section,
        request: &ListRequest,
    ) -> ClientResult<Page<Movie>> {
        self.get_with_query(&routes::movie::section(section), request)
            .await
    }

    /// One page of free-text search results.
    pub async fn search_movies(&self, request: &SearchRequest) -> ClientResult<Page<Movie>> {
        self.get_with_query(routes::search::MOVIE, request).await
    }

    /// One page of filtered discovery results.
    pub async fn discover_movies(&self, request: &DiscoverRequest) -> ClientResult<Page<Movie>> {
        self.get_with_query(routes::search::DISCOVER, request).await
    }

    /// The full movie genre list.
    pub async fn genres(&self) -> ClientResult<GenreList> {
        self.get(routes::genre::MOVIE_LIST).await
    }

    /// Full details for one movie.
    pub async fn movie_details(&self, movie_id: u64) -> ClientResult<MovieDetails> {
        self.get(&routes::movie::details(movie_id)).await
    }

    /// Cast credits for one movie.
    pub async fn movie_credits(&self, movie_id: u64) -> ClientResult<Credits> {
        self.get(&routes::movie::credits(movie_id)).await
    }

    /// Trailers and teasers for one movie.
    pub async fn movie_videos(&self, movie_id: u64) -> ClientResult<VideoList> {
        self.get(&routes::movie::videos(movie_id)).await
    }

    /// One page of movies similar to the given one.
    pub async fn similar_movies(&self, movie_id: u64, page: u32) -> ClientResult<Page<Movie>> {
        self.get_with_query(&routes::movie::similar(movie_id), &[("page", page)])
            .await
    }

    /// Full person details.
    pub async fn person_details(&self, person_id: u64) -> ClientResult<Person> {
        self.get(&routes::person::details(person_id)).await
    }

    /// Movies a person appeared in.
    pub async fn person_movie_credits(&self, person_id: u64) -> ClientResult<PersonCredits> {
        self.get(&routes::person::movie_credits(person_id)).await
    }

    /// Profile of the session owner.
    pub async fn account(&self) -> ClientResult<Account> {
        self.get(routes::account::DETAILS).await
    }

    /// One page of the account's favourite movies.
    pub async fn favourite_movies(
        &self,
        account_id: u64,
        page: u32,
    ) -> ClientResult<Page<Movie>> {
        self.get_with_query(&routes::account::favourite_movies(account_id), &[("page", page)])
            .await
    }

    /// One page of the account's watchlist movies.
    pub async fn watchlist_movies(
        &self,
        account_id: u64,
        page: u32,
    ) -> ClientResult<Page<Movie>> {
        self.get_with_query(&routes::account::watchlist_movies(account_id), &[("page", page)])
            .await
    }

    /// Mark or unmark a favourite.
    pub async fn set_favourite(
        &self,
        account_id: u64,
        request: &MediaStateRequest,
    ) -> ClientResult<SessionStatus> {
        self.post(&routes::account::favourite(account_id), request)
            .await
    }

    /// Add to or remove from the watchlist.
    pub async fn set_watchlist(
        &self,
        account_id: u64,
        request: &MediaStateRequest,
    ) -> ClientResult<SessionStatus> {
        self.post(&routes::account::watchlist(account_id), request)
            .await
    }

    /// Request a fresh token for the browser approval step.
    pub async fn create_request_token(&self) -> ClientResult<RequestToken> {
        self.get(routes::auth::TOKEN_NEW).await
    }

    /// Exchange an approved request token for a session identifier.
    pub async fn create_session(&self, request_token: &str) -> ClientResult<SessionCreated> {
        self.post(
            routes::auth::SESSION_NEW,
            &serde_json::json!({ "request_token": request_token }),
        )
        .await
    }

    /// Delete a session server-side.
    pub async fn delete_session(&self, session_id: &str) -> ClientResult<SessionStatus> {
        self.delete(
            routes::auth::SESSION,
            &serde_json::json!({ "session_id": session_id }),
        )
        .await
    }

    /// Create an unauthenticated guest session.
    pub async fn create_guest_session(&self) -> ClientResult<GuestSessionCreated> {
        self.get(routes::auth::GUEST_SESSION_NEW).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_IMAGE_URL, DEFAULT_SITE_URL};

    fn test_client() -> CatalogClient {
        CatalogClient::new(&ClientConfig {
            api_url: "https://catalog.example/3/".into(),
            site_url: DEFAULT_SITE_URL.into(),
            image_url: DEFAULT_IMAGE_URL.into(),
            api_token: "test-token".into(),
        })
        .unwrap()
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = CatalogClient::new(&ClientConfig {
            api_url: "https://catalog.example/3".into(),
            site_url: DEFAULT_SITE_URL.into(),
            image_url: DEFAULT_IMAGE_URL.into(),
            api_token: String::new(),
        });
        assert!(matches!(result, Err(ClientError::MissingToken)));
    }

    #[test]
    fn build_url_normalizes_slashes() {
        let client = test_client();
        assert_eq!(
            client.build_url("/movie/popular"),
            "https://catalog.example/3/movie/popular"
        );
        assert_eq!(
            client.build_url("movie/popular"),
            "https://catalog.example/3/movie/popular"
        );
    }

    #[test]
    fn build_url_passes_absolute_urls_through() {
        let client = test_client();
        assert_eq!(
            client.build_url("https://elsewhere.example/x"),
            "https://elsewhere.example/x"
        );
    }

    #[tokio::test]
    async fn authorize_attaches_bearer_and_accept_headers() {
        let client = test_client();
        let request = client
            .authorize(client.client.get(client.build_url("/account")))
            .await
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Bearer test-token"
        );
        assert_eq!(request.headers().get("Accept").unwrap(), "application/json");
        assert!(request.url().query().is_none());
    }

    #[tokio::test]
    async fn authorize_appends_session_query_once_established() {
        let client = test_client();
        client.set_session(Some("abc123".into())).await;
        let request = client
            .authorize(client.client.get(client.build_url("/account")))
            .await
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("session_id=abc123"));

        client.set_session(None).await;
        let request = client
            .authorize(client.client.get(client.build_url("/account")))
            .await
            .build()
            .unwrap();
        assert!(request.url().query().is_none());
    }

    #[tokio::test]
    async fn typed_query_structs_land_in_the_url() {
        let client = test_client();
        let request = client
            .authorize(
                client
                    .client
                    .get(client.build_url(routes::search::MOVIE))
                    .query(&SearchRequest::new("blade runner", 2)),
            )
            .await
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("query=blade+runner&page=2"));
    }

    #[test]
    fn authorize_url_embeds_the_token() {
        let client = test_client();
        assert_eq!(
            client.authorize_url("tok"),
            format!("{DEFAULT_SITE_URL}/authenticate/tok")
        );
    }
}
