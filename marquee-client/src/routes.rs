//! Catalog API route constants and builders.
//!
//! Paths are relative to the configured API base URL. Routes that embed an
//! entity id are functions; fixed routes are constants.

use marquee_model::Section;

/// Movie listing, details, and sub-resource endpoints
pub mod movie {
    use super::Section;

    /// Section listing (now_playing, popular, top_rated, upcoming)
    pub fn section(section: Section) -> String {
        format!("/movie/{}", section.as_str())
    }

    /// Movie details
    pub fn details(movie_id: u64) -> String {
        format!("/movie/{movie_id}")
    }

    /// Cast credits
    pub fn credits(movie_id: u64) -> String {
        format!("/movie/{movie_id}/credits")
    }

    /// Trailers and teasers
    pub fn videos(movie_id: u64) -> String {
        format!("/movie/{movie_id}/videos")
    }

    /// Similar movies (paginated)
    pub fn similar(movie_id: u64) -> String {
        format!("/movie/{movie_id}/similar")
    }
}

/// Search and discovery endpoints
pub mod search {
    /// Free-text movie search
    pub const MOVIE: &str = "/search/movie";
    /// Filtered discovery
    pub const DISCOVER: &str = "/discover/movie";
}

/// Genre catalog endpoints
pub mod genre {
    /// Movie genre list
    pub const MOVIE_LIST: &str = "/genre/movie/list";
}

/// Person endpoints
pub mod person {
    /// Person details
    pub fn details(person_id: u64) -> String {
        format!("/person/{person_id}")
    }

    /// Person movie credits
    pub fn movie_credits(person_id: u64) -> String {
        format!("/person/{person_id}/movie_credits")
    }
}

/// Account profile and personal list endpoints
pub mod account {
    /// Account profile of the session owner
    pub const DETAILS: &str = "/account";

    /// Favourite movies (paginated)
    pub fn favourite_movies(account_id: u64) -> String {
        format!("/account/{account_id}/favorite/movies")
    }

    /// Watchlist movies (paginated)
    pub fn watchlist_movies(account_id: u64) -> String {
        format!("/account/{account_id}/watchlist/movies")
    }

    /// Favourite mutation
    pub fn favourite(account_id: u64) -> String {
        format!("/account/{account_id}/favorite")
    }

    /// Watchlist mutation
    pub fn watchlist(account_id: u64) -> String {
        format!("/account/{account_id}/watchlist")
    }
}

/// Authentication endpoints
pub mod auth {
    /// New request token
    pub const TOKEN_NEW: &str = "/authentication/token/new";
    /// Exchange an approved token for a session
    pub const SESSION_NEW: &str = "/authentication/session/new";
    /// Session deletion
    pub const SESSION: &str = "/authentication/session";
    /// Guest session creation
    pub const GUEST_SESSION_NEW: &str = "/authentication/guest_session/new";

    /// Browser approval URL on the public site (absolute)
    pub fn authenticate_url(site_base: &str, request_token: &str) -> String {
        format!(
            "{}/authenticate/{request_token}",
            site_base.trim_end_matches('/')
        )
    }
}
