//! Snapshot file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_file() -> PathBuf {
    PathBuf::from("survey_app.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// JSON file loaded at startup and overwritten at shutdown.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}
