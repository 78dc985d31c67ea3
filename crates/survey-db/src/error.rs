//! Persistence error types for survey-db.
//!
//! Store and service operations use `survey_core::SurveyError`; only the
//! snapshot file adapter has its own error type.

use std::path::PathBuf;

use survey_core::SurveyError;
use thiserror::Error;

/// Errors from reading or writing the snapshot file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file could not be opened, read, or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a valid snapshot, or the snapshot could not be encoded.
    #[error("malformed snapshot in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<PersistenceError> for SurveyError {
    fn from(error: PersistenceError) -> Self {
        Self::Unexpected(error.into())
    }
}
