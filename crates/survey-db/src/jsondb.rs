//! Flat-file snapshot persistence.
//!
//! The whole [`Snapshot`] is one JSON document. It is read once at startup
//! and rewritten in full at shutdown; nothing is written in between.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use survey_core::entities::Snapshot;

use crate::error::PersistenceError;

/// JSON file holding the persisted snapshot.
#[derive(Debug, Clone)]
pub struct JsonDb {
    path: PathBuf,
}

impl JsonDb {
    /// Open the snapshot file at `path`, creating it (and its parent
    /// directories) if it does not exist. Existing contents are left alone.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Io` if the file cannot be created or opened
    /// for writing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| PersistenceError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. An empty or whitespace-only file is an empty snapshot.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Json` if it is not a valid snapshot.
    pub fn load(&self) -> Result<Snapshot, PersistenceError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        if raw.trim().is_empty() {
            tracing::debug!(path = %self.path.display(), "snapshot file empty");
            return Ok(Snapshot::default());
        }
        serde_json::from_str(&raw).map_err(|source| PersistenceError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with `snapshot`.
    ///
    /// # Errors
    ///
    /// `Json` if encoding fails, `Io` if the write fails.
    pub fn dump(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let json =
            serde_json::to_vec_pretty(snapshot).map_err(|source| PersistenceError::Json {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, json).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(
            path = %self.path.display(),
            surveys = snapshot.surveys.len(),
            responses = snapshot.response_count(),
            "snapshot written"
        );
        Ok(())
    }
}
