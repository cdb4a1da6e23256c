//! Client configuration: catalog endpoints and the API bearer token.
//!
//! Values are layered lowest-to-highest: built-in defaults, an optional
//! `marquee.toml`, then `MARQUEE_*` environment variables. The bearer token
//! has no default and must come from the file or the environment.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Default public catalog endpoints.
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_SITE_URL: &str = "https://www.themoviedb.org";
pub const DEFAULT_IMAGE_URL: &str = "https://image.tmdb.org/t/p";

/// Name of the config file looked up in the platform config directory.
pub const CONFIG_FILE: &str = "marquee.toml";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Catalog REST API base, e.g. `https://api.themoviedb.org/3`.
    pub api_url: String,
    /// Public site base used for the browser approval step.
    pub site_url: String,
    /// Image CDN base.
    pub image_url: String,
    /// Bearer token attached to every request.
    pub api_token: String,
}

/// On-disk shape of `marquee.toml`; every field optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    site_url: Option<String>,
    image_url: Option<String>,
    api_token: Option<String>,
}

impl ClientConfig {
    /// Load configuration from the default platform location plus the
    /// environment.
    pub fn load() -> ClientResult<Self> {
        Self::load_from(Self::default_config_path().as_deref())
    }

    /// Load configuration from an explicit file (or defaults when `None`),
    /// then apply environment overrides.
    pub fn load_from(path: Option<&Path>) -> ClientResult<Self> {
        let file = match path {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(path)?;
                toml::from_str::<ConfigFile>(&raw)
                    .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))?
            }
            _ => ConfigFile::default(),
        };

        let pick = |env_key: &str, file_value: Option<String>, default: &str| {
            std::env::var(env_key)
                .ok()
                .filter(|v| !v.is_empty())
                .or(file_value)
                .unwrap_or_else(|| default.to_string())
        };

        let config = Self {
            api_url: pick("MARQUEE_API_URL", file.api_url, DEFAULT_API_URL),
            site_url: pick("MARQUEE_SITE_URL", file.site_url, DEFAULT_SITE_URL),
            image_url: pick("MARQUEE_IMAGE_URL", file.image_url, DEFAULT_IMAGE_URL),
            api_token: std::env::var("MARQUEE_API_TOKEN")
                .ok()
                .filter(|v| !v.is_empty())
                .or(file.api_token)
                .ok_or(ClientError::MissingToken)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Platform config file path, e.g. `~/.config/marquee/marquee.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "marquee", "marquee")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    fn validate(&self) -> ClientResult<()> {
        for base in [&self.api_url, &self.site_url, &self.image_url] {
            Url::parse(base).map_err(|_| ClientError::InvalidBaseUrl(base.clone()))?;
        }
        Ok(())
    }
}
