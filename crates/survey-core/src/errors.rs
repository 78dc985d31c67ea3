//! Cross-cutting error types for the survey platform.
//!
//! Stores and the service return [`SurveyError`] unchanged through every
//! layer, so the HTTP boundary can tell a missing resource from a rejected
//! input from everything else.

use thiserror::Error;

use crate::enums::EntityKind;
use crate::ids::Id;

/// Errors raised by the stores and the survey service.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// The requested key is absent from a store.
    #[error("resource not found: {entity}{}", id_suffix(.id))]
    NotFound { entity: EntityKind, id: Id },

    /// A business rule rejected the input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl SurveyError {
    #[must_use]
    pub const fn not_found(entity: EntityKind, id: Id) -> Self {
        Self::NotFound { entity, id }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// `" <id>"`, or nothing for the nil id used by whole-collection lookups.
fn id_suffix(id: &Id) -> String {
    if id.is_nil() {
        String::new()
    } else {
        format!(" {id}")
    }
}

/// Business-rule violations detected by the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("survey cannot have more than {max} questions")]
    TooManyQuestions { max: usize },

    #[error("survey cannot be empty")]
    NoQuestions,

    #[error("survey needs a name")]
    MissingName,

    #[error("max number of questions allowed is {max}")]
    TooManyAnswers { max: usize },
}
