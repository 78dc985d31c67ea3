//! Service layer: validation, id/timestamp assignment, store delegation.
//!
//! `SurveyService` owns the two stores plus the injected [`IdGenerator`] and
//! [`Clock`]. It keeps no state of its own. Every store error is returned
//! unchanged.

use std::sync::Arc;

use survey_core::entities::{Response, Snapshot, Survey};
use survey_core::ids::Id;
use survey_core::{
    Clock, IdGenerator, SurveyError, SystemClock, UlidGenerator, ValidationError,
};

use crate::store::{ResponseStore, SurveyStore};

/// The single place survey business rules live.
///
/// Shared across request handlers behind an `Arc`. The stores lock
/// independently, so the survey existence check in
/// [`save_response`](Self::save_response) and the following append are two
/// separate critical sections, and deleting a survey leaves its responses in
/// place.
pub struct SurveyService {
    max_questions: usize,
    surveys: SurveyStore,
    responses: ResponseStore,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl SurveyService {
    #[must_use]
    pub fn new(
        max_questions: usize,
        surveys: SurveyStore,
        responses: ResponseStore,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            max_questions,
            surveys,
            responses,
            ids,
            clock,
        }
    }

    /// Build a service whose stores are seeded from a loaded snapshot.
    #[must_use]
    pub fn from_snapshot(
        max_questions: usize,
        snapshot: Snapshot,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let Snapshot { surveys, responses } = snapshot;
        Self::new(
            max_questions,
            SurveyStore::from_entries(surveys),
            ResponseStore::from_entries(responses),
            ids,
            clock,
        )
    }

    /// [`Self::from_snapshot`] with ULID ids and the system clock.
    #[must_use]
    pub fn with_system_providers(max_questions: usize, snapshot: Snapshot) -> Self {
        Self::from_snapshot(
            max_questions,
            snapshot,
            Arc::new(UlidGenerator::new()),
            Arc::new(SystemClock::new()),
        )
    }

    #[must_use]
    pub const fn surveys(&self) -> &SurveyStore {
        &self.surveys
    }

    #[must_use]
    pub const fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    /// Validate and store a new survey.
    ///
    /// Any ids or timestamps in the input are replaced: the survey and each
    /// question (in order) get fresh ids, and `created_at == updated_at`.
    ///
    /// # Errors
    ///
    /// `Validation` for more than `max_questions` questions, no questions,
    /// or an empty name, checked in that order. Nothing is stored on error.
    pub fn create_survey(&self, mut survey: Survey) -> Result<Survey, SurveyError> {
        if survey.questions.len() > self.max_questions {
            return Err(ValidationError::TooManyQuestions {
                max: self.max_questions,
            }
            .into());
        }
        if survey.questions.is_empty() {
            return Err(ValidationError::NoQuestions.into());
        }
        if survey.name.is_empty() {
            return Err(ValidationError::MissingName.into());
        }

        survey.id = self.ids.generate();
        for question in &mut survey.questions {
            question.id = self.ids.generate();
        }
        let now = self.clock.now();
        survey.created_at = now;
        survey.updated_at = now;

        tracing::debug!(id = %survey.id, questions = survey.questions.len(), "creating survey");
        self.surveys.create(survey)
    }

    /// # Errors
    ///
    /// `NotFound` if no survey exists at `id`.
    pub fn get_survey(&self, id: Id) -> Result<Survey, SurveyError> {
        self.surveys.get(id)
    }

    /// Replace the survey at `id` with `survey`.
    ///
    /// The body's own id is ignored in favor of `id`. Questions with a nil id
    /// get a fresh one; existing question ids are kept. `updated_at` is set to
    /// now while `created_at` is stored exactly as supplied. No validation is
    /// applied.
    ///
    /// # Errors
    ///
    /// `NotFound` if no survey exists at `id`.
    pub fn update_survey(&self, id: Id, mut survey: Survey) -> Result<Survey, SurveyError> {
        survey.id = id;
        for question in survey.questions.iter_mut().filter(|q| q.id.is_nil()) {
            question.id = self.ids.generate();
        }
        survey.updated_at = self.clock.now();
        self.surveys.update(id, survey)
    }

    /// Remove the survey at `id`. Its responses stay in the response store.
    ///
    /// # Errors
    ///
    /// `NotFound` if no survey exists at `id`.
    pub fn delete_survey(&self, id: Id) -> Result<(), SurveyError> {
        self.surveys.delete(id)
    }

    /// # Errors
    ///
    /// `NotFound` when there are no surveys at all.
    pub fn get_all_surveys(&self) -> Result<Vec<Survey>, SurveyError> {
        self.surveys.get_all()
    }

    /// Store a response to an existing survey.
    ///
    /// # Errors
    ///
    /// `NotFound` if `response.survey_id` names no survey (checked first),
    /// then `Validation` if there are more than `max_questions` answers.
    pub fn save_response(&self, mut response: Response) -> Result<Response, SurveyError> {
        if let Err(err) = self.surveys.get(response.survey_id) {
            tracing::warn!(survey_id = %response.survey_id, %err, "rejecting response for unknown survey");
            return Err(err);
        }
        if response.answers.len() > self.max_questions {
            return Err(ValidationError::TooManyAnswers {
                max: self.max_questions,
            }
            .into());
        }

        response.id = self.ids.generate();
        response.created_at = self.clock.now();
        self.responses.create(response)
    }

    /// Responses for `survey_id` in the order they were saved.
    ///
    /// # Errors
    ///
    /// `NotFound` if no response was ever saved for `survey_id`.
    pub fn get_responses(&self, survey_id: Id) -> Result<Vec<Response>, SurveyError> {
        self.responses.get_by_survey_id(survey_id)
    }

    /// Copy of both stores for persistence.
    ///
    /// Each store is read under its own lock; the pair is not one atomic view.
    #[must_use]
    pub fn entries(&self) -> Snapshot {
        Snapshot {
            surveys: self.surveys.entries(),
            responses: self.responses.entries(),
        }
    }
}

impl std::fmt::Debug for SurveyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurveyService")
            .field("max_questions", &self.max_questions)
            .field("surveys", &self.surveys.len())
            .field("responses", &self.responses.len())
            .finish_non_exhaustive()
    }
}
