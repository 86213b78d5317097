// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot persistence: every account serialized as one JSON document.
//!
//! There is no partial or delta persistence; each successful mutation
//! rewrites the whole multi-user snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::AllUsers;

/// File-backed snapshot store.
#[derive(Debug, Clone)]
pub struct SnapshotStorage {
    path: PathBuf,
}

impl SnapshotStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot.
    ///
    /// A missing file or unparsable content falls back to an empty map;
    /// startup must never fail on a bad snapshot.
    pub fn load(&self) -> AllUsers {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No snapshot yet, starting empty");
                return AllUsers::new();
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Failed to read snapshot, starting empty"
                );
                return AllUsers::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Snapshot is unparsable, starting empty"
                );
                AllUsers::new()
            }
        }
    }

    /// Persist the full snapshot.
    ///
    /// Writes to a sibling temp file and renames it into place so a crash
    /// mid-write never leaves a truncated snapshot behind.
    pub fn save(&self, users: &AllUsers) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::Storage(format!("Failed to create {}: {}", parent.display(), e)))?;
            }
        }

        let json = serde_json::to_string_pretty(users)
            .map_err(|e| AppError::Storage(format!("Failed to serialize snapshot: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::Storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserData, UserProfile};

    fn profile(username: &str) -> UserProfile {
        UserProfile {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            name: username.to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SnapshotStorage::new(dir.path().join("missing.json"));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "{not json at all").unwrap();

        let storage = SnapshotStorage::new(&path);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SnapshotStorage::new(dir.path().join("nested").join("users.json"));

        let mut users = AllUsers::new();
        users.insert("alice".to_string(), UserData::new(profile("alice")));
        storage.save(&users).unwrap();

        let reloaded = storage.load();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded["alice"].profile.email, "alice@example.com");
    }
}
