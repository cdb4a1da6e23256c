//! Typed request parameter structs, serialized into query strings by the
//! HTTP layer. `None` fields are omitted from the query entirely.

use serde::Serialize;

/// Parameters of the section list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListRequest {
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl ListRequest {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

/// Parameters of the free-text search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            ..Self::default()
        }
    }
}

/// Parameters of the discover (genre filter) endpoint. `with_genres`
/// follows the catalog's filter expression syntax: comma for AND, pipe
/// for OR.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscoverRequest {
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl DiscoverRequest {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn with_genres(mut self, genres: impl Into<String>) -> Self {
        self.with_genres = Some(genres.into());
        self
    }

    pub fn sort_by(mut self, sort: impl Into<String>) -> Self {
        self.sort_by = Some(sort.into());
        self
    }
}

/// Body of the favourite/watchlist mutation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaStateRequest {
    pub media_type: &'static str,
    pub media_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<bool>,
}

impl MediaStateRequest {
    /// Mark or unmark a movie as favourite.
    pub fn favourite(media_id: u64, favourite: bool) -> Self {
        Self {
            media_type: "movie",
            media_id,
            favorite: Some(favourite),
            watchlist: None,
        }
    }

    /// Add a movie to or remove it from the watchlist.
    pub fn watchlist(media_id: u64, watchlist: bool) -> Self {
        Self {
            media_type: "movie",
            media_id,
            favorite: None,
            watchlist: Some(watchlist),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_omits_unset_fields() {
        let query = serde_urlencoded::to_string(ListRequest::page(2)).unwrap();
        assert_eq!(query, "page=2");
    }

    #[test]
    fn search_request_encodes_query_text() {
        let query =
            serde_urlencoded::to_string(SearchRequest::new("blade runner", 1)).unwrap();
        assert_eq!(query, "query=blade+runner&page=1");
    }

    #[test]
    fn discover_request_serializes_filter_expression() {
        let request = DiscoverRequest::page(1)
            .with_genres("28,12")
            .sort_by("popularity.desc");
        let query = serde_urlencoded::to_string(request).unwrap();
        assert_eq!(query, "page=1&with_genres=28%2C12&sort_by=popularity.desc");
    }

    #[test]
    fn favourite_body_carries_only_favorite_flag() {
        let body =
            serde_json::to_value(MediaStateRequest::favourite(550, true)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"media_type": "movie", "media_id": 550, "favorite": true})
        );
    }

    #[test]
    fn watchlist_body_carries_only_watchlist_flag() {
        let body =
            serde_json::to_value(MediaStateRequest::watchlist(550, false)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"media_type": "movie", "media_id": 550, "watchlist": false})
        );
    }
}
