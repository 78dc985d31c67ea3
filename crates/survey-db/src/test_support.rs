//! Shared test utilities for survey-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::sync::Arc;

    use survey_core::entities::Survey;
    use survey_core::{SequentialIdGenerator, StepClock};

    use crate::service::SurveyService;

    /// Empty service with predictable ids and a clock stepping one second per call.
    pub fn test_service(max_questions: usize) -> SurveyService {
        SurveyService::new(
            max_questions,
            crate::store::SurveyStore::new(),
            crate::store::ResponseStore::new(),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(StepClock::seconds()),
        )
    }

    /// Create and return a valid survey with two questions.
    pub fn seeded_survey(svc: &SurveyService) -> Survey {
        svc.create_survey(Survey::draft("Seeded", ["First?", "Second?"]))
            .unwrap()
    }
}
