use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Response, Survey};
use crate::ids::Id;

/// Full contents of both stores; the unit of persistence.
///
/// Rebuilt on every dump and read once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub surveys: BTreeMap<Id, Survey>,
    #[serde(default)]
    pub responses: BTreeMap<Id, Vec<Response>>,
}

impl Snapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty() && self.responses.is_empty()
    }

    /// Total number of responses across all surveys.
    #[must_use]
    pub fn response_count(&self) -> usize {
        self.responses.values().map(Vec::len).sum()
    }
}
