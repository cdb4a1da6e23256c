//! Persistent storage for the session identifier.
//!
//! One key, one file under the platform data directory. Absence means
//! logged out. File permissions are restricted on unix; OS keychain
//! integration is deliberately not used for a catalog session id.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

pub(crate) const SESSION_FILE: &str = "session.json";

/// On-disk shape: the identifier plus a timestamp for diagnostics.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    session_id: String,
    stored_at: DateTime<Utc>,
}

/// File-backed store for the session identifier.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// Store under the platform data directory.
    pub fn new() -> ClientResult<Self> {
        let dirs = ProjectDirs::from("", "marquee", "marquee").ok_or_else(|| {
            ClientError::Config("unable to determine data directory".to_string())
        })?;
        Ok(Self {
            path: dirs.data_dir().join(SESSION_FILE),
        })
    }

    /// Store at an explicit path. Used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persist a session identifier, replacing any previous one.
    pub fn save(&self, session_id: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StoredSession {
            session_id: session_id.to_string(),
            stored_at: Utc::now(),
        };
        let raw = serde_json::to_string(&stored)
            .map_err(|e| ClientError::Config(format!("session serialization failed: {e}")))?;
        std::fs::write(&self.path, raw)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Load the persisted session identifier. Absence or a malformed file
    /// both read as logged out.
    pub fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(stored) => Some(stored.session_id),
            Err(e) => {
                warn!("[SessionStorage] discarding malformed session file: {e}");
                None
            }
        }
    }

    /// Remove the persisted identifier. Idempotent.
    pub fn clear(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> SessionStorage {
        SessionStorage::with_path(dir.path().join("nested").join(SESSION_FILE))
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        assert!(storage.load().is_none());
        storage.save("abc123").unwrap();
        assert_eq!(storage.load().as_deref(), Some("abc123"));

        storage.save("def456").unwrap();
        assert_eq!(storage.load().as_deref(), Some("def456"));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.clear().unwrap();
        storage.save("abc123").unwrap();
        storage.clear().unwrap();
        assert!(storage.load().is_none());
        storage.clear().unwrap();
    }

    #[test]
    fn malformed_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        std::fs::write(&path, "not json").unwrap();
        let storage = SessionStorage::with_path(path);
        assert!(storage.load().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.save("abc123").unwrap();
        let mode = std::fs::metadata(dir.path().join("nested").join(SESSION_FILE))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
