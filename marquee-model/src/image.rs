//! Image URL construction for the catalog's CDN.
//!
//! Paths arrive from the API with a leading slash; URLs are assembled as
//! `<base>/<size><path>`.

use serde::{Deserialize, Serialize};

/// Poster size variants supported by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosterSize {
    W92,
    W154,
    W185,
    W342,
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Backdrop size variants supported by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackdropSize {
    W300,
    W780,
    W1280,
    Original,
}

impl BackdropSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

/// Profile (person portrait) size variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileSize {
    W45,
    W185,
    H632,
    Original,
}

impl ProfileSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileSize::W45 => "w45",
            ProfileSize::W185 => "w185",
            ProfileSize::H632 => "h632",
            ProfileSize::Original => "original",
        }
    }
}

/// URL builder bound to a configured image CDN base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls {
    base: String,
}

impl ImageUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base: String = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Poster URL for a path from a list or details payload.
    pub fn poster(&self, path: &str, size: PosterSize) -> String {
        format!("{}/{}{}", self.base, size.as_str(), path)
    }

    /// Backdrop URL for a path from a list or details payload.
    pub fn backdrop(&self, path: &str, size: BackdropSize) -> String {
        format!("{}/{}{}", self.base, size.as_str(), path)
    }

    /// Profile URL for a cast or person payload path.
    pub fn profile(&self, path: &str, size: ProfileSize) -> String {
        format!("{}/{}{}", self.base, size.as_str(), path)
    }
}
