use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::Id;

/// A named, ordered set of questions managed as one unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Survey {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Survey {
    /// A survey with the given name and question texts; ids and timestamps unset.
    #[must_use]
    pub fn draft<I, S>(name: impl Into<String>, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            questions: questions.into_iter().map(Question::new).collect(),
            ..Self::default()
        }
    }
}

/// A single question. Owned by its survey; no lifecycle of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub question: String,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Id::nil(),
            question: text.into(),
        }
    }
}
