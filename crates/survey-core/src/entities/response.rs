use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::Id;

/// One respondent's answers to a survey. Immutable once stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Response {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub survey_id: Id,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl Response {
    /// A response to `survey_id`; id and timestamp unset.
    #[must_use]
    pub fn draft(survey_id: Id, answers: Vec<Answer>) -> Self {
        Self {
            survey_id,
            answers,
            ..Self::default()
        }
    }
}

/// A boolean answer to one question.
///
/// `question_id` is not checked against the survey's questions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    #[serde(default)]
    pub question_id: Id,
    #[serde(default)]
    pub answer: bool,
}

impl Answer {
    #[must_use]
    pub const fn new(question_id: Id, answer: bool) -> Self {
        Self {
            question_id,
            answer,
        }
    }
}
