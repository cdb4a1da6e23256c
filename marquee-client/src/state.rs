//! Persisted application state.
//!
//! An explicit struct with an explicit load-on-start/save-on-change
//! lifecycle, handed to consumers by value. Rehydrated before the view
//! layer renders; malformed or missing files fall back to defaults.

use std::path::PathBuf;

use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};

use marquee_model::Account;

use crate::error::{ClientError, ClientResult};

pub(crate) const STATE_FILE: &str = "state.json";

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Application state that survives restarts: the theme preference and the
/// last-known authenticated account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub account: Option<Account>,
}

/// Loads and saves [`AppState`] as JSON in the platform config directory.
#[derive(Debug, Clone)]
pub struct AppStateStore {
    path: PathBuf,
}

impl AppStateStore {
    pub fn new() -> ClientResult<Self> {
        let dirs = ProjectDirs::from("", "marquee", "marquee").ok_or_else(|| {
            ClientError::Config("unable to determine config directory".to_string())
        })?;
        Ok(Self {
            path: dirs.config_dir().join(STATE_FILE),
        })
    }

    /// Store at an explicit path. Used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Rehydrate state, defaulting on absence or a malformed file.
    pub fn load(&self) -> AppState {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return AppState::default();
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("[AppStateStore] discarding malformed state file: {e}");
                AppState::default()
            }
        }
    }

    /// Persist state. Called after each state-changing operation.
    pub fn save(&self, state: &AppState) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(state)
            .map_err(|e| ClientError::Config(format!("state serialization failed: {e}")))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
