//! Survey store: keyed CRUD over surveys.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use survey_core::SurveyError;
use survey_core::entities::Survey;
use survey_core::enums::EntityKind;
use survey_core::ids::Id;

/// Surveys keyed by id behind a single reader/writer lock.
///
/// Writes take the exclusive lock, reads the shared one. Keys are ULIDs, so
/// iteration order is creation order.
#[derive(Debug, Default)]
pub struct SurveyStore {
    surveys: RwLock<BTreeMap<Id, Survey>>,
}

impl SurveyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with previously persisted surveys.
    #[must_use]
    pub const fn from_entries(surveys: BTreeMap<Id, Survey>) -> Self {
        Self {
            surveys: RwLock::new(surveys),
        }
    }

    /// Insert `survey` at `survey.id`, overwriting any existing entry.
    ///
    /// The caller guarantees a fresh id; uniqueness is not checked.
    pub fn create(&self, survey: Survey) -> Result<Survey, SurveyError> {
        self.surveys.write().insert(survey.id, survey.clone());
        tracing::debug!(id = %survey.id, "survey stored");
        Ok(survey)
    }

    pub fn get(&self, id: Id) -> Result<Survey, SurveyError> {
        self.surveys
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| SurveyError::not_found(EntityKind::Survey, id))
    }

    /// Replace the survey at `id` wholesale. No field merging.
    pub fn update(&self, id: Id, survey: Survey) -> Result<Survey, SurveyError> {
        let mut surveys = self.surveys.write();
        let slot = surveys
            .get_mut(&id)
            .ok_or_else(|| SurveyError::not_found(EntityKind::Survey, id))?;
        *slot = survey.clone();
        tracing::debug!(%id, "survey replaced");
        Ok(survey)
    }

    pub fn delete(&self, id: Id) -> Result<(), SurveyError> {
        if self.surveys.write().remove(&id).is_none() {
            return Err(SurveyError::not_found(EntityKind::Survey, id));
        }
        tracing::debug!(%id, "survey deleted");
        Ok(())
    }

    /// Every stored survey.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the store is empty rather than an empty list.
    pub fn get_all(&self) -> Result<Vec<Survey>, SurveyError> {
        let surveys = self.surveys.read();
        if surveys.is_empty() {
            return Err(SurveyError::not_found(EntityKind::Survey, Id::nil()));
        }
        Ok(surveys.values().cloned().collect())
    }

    /// Copy of the whole mapping, for snapshots only.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<Id, Survey> {
        self.surveys.read().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surveys.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surveys.read().is_empty()
    }
}
