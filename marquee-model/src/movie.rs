//! Movie entities and the category sections the catalog lists them under.

use serde::{Deserialize, Serialize};

use crate::list::Identified;

/// A movie as it appears in list results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
}

impl Identified for Movie {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A single genre tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Response envelope of the genre list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

/// Full movie details, a superset of the list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub runtime: u32,
    #[serde(default)]
    pub adult: bool,
}

/// Curated movie list sections exposed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
}

impl Section {
    /// All sections in the order the home screen renders them.
    pub const ALL: [Section; 4] = [
        Section::NowPlaying,
        Section::Popular,
        Section::TopRated,
        Section::Upcoming,
    ];

    /// Wire key used in the list endpoint path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::NowPlaying => "now_playing",
            Section::Popular => "popular",
            Section::TopRated => "top_rated",
            Section::Upcoming => "upcoming",
        }
    }

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::NowPlaying => "Now Playing",
            Section::Popular => "Popular",
            Section::TopRated => "Top Rated",
            Section::Upcoming => "Upcoming",
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "now_playing" | "now-playing" => Ok(Section::NowPlaying),
            "popular" => Ok(Section::Popular),
            "top_rated" | "top-rated" => Ok(Section::TopRated),
            "upcoming" => Ok(Section::Upcoming),
            other => Err(format!("unknown section: {other}")),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
