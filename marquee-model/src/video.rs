//! Trailer/teaser video metadata attached to a movie.

use serde::{Deserialize, Serialize};

/// One published video (trailer, teaser, clip) for a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Video identifier (opaque string, unlike the integer catalog ids).
    pub id: String,
    pub name: String,
    /// Hosting site key, e.g. `YouTube`.
    pub site: String,
    /// Site-specific video key used to build a playback URL.
    pub key: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub official: bool,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub iso_639_1: String,
    #[serde(default)]
    pub iso_3166_1: String,
}

impl Video {
    /// Whether this entry is an official trailer hosted on YouTube.
    pub fn is_youtube_trailer(&self) -> bool {
        self.site.eq_ignore_ascii_case("youtube") && self.kind.eq_ignore_ascii_case("trailer")
    }
}

/// Videos response for a single movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoList {
    pub id: u64,
    #[serde(default)]
    pub results: Vec<Video>,
}

impl VideoList {
    /// First official YouTube trailer, the one the detail screen plays.
    pub fn trailer(&self) -> Option<&Video> {
        self.results.iter().find(|v| v.is_youtube_trailer())
    }
}
