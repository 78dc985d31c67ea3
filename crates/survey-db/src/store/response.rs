//! Response store: append-only responses grouped by survey.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use survey_core::SurveyError;
use survey_core::entities::Response;
use survey_core::enums::EntityKind;
use survey_core::ids::Id;

/// Responses keyed by owning survey id, each list in insertion order.
#[derive(Debug, Default)]
pub struct ResponseStore {
    responses: RwLock<BTreeMap<Id, Vec<Response>>>,
}

impl ResponseStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_entries(responses: BTreeMap<Id, Vec<Response>>) -> Self {
        Self {
            responses: RwLock::new(responses),
        }
    }

    /// Append `response` to its survey's list, creating the list if needed.
    pub fn create(&self, response: Response) -> Result<Response, SurveyError> {
        self.responses
            .write()
            .entry(response.survey_id)
            .or_default()
            .push(response.clone());
        tracing::debug!(id = %response.id, survey_id = %response.survey_id, "response stored");
        Ok(response)
    }

    /// All responses for `survey_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no response was ever stored for the survey,
    /// regardless of whether the survey itself exists.
    pub fn get_by_survey_id(&self, survey_id: Id) -> Result<Vec<Response>, SurveyError> {
        self.responses
            .read()
            .get(&survey_id)
            .cloned()
            .ok_or_else(|| SurveyError::not_found(EntityKind::Response, survey_id))
    }

    /// Copy of the whole mapping, for snapshots only.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<Id, Vec<Response>> {
        self.responses.read().clone()
    }

    /// Total responses across all surveys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.read().values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::thread;
    use survey_core::ids::{IdGenerator, SequentialIdGenerator};

    fn response(ids: &SequentialIdGenerator, survey_id: Id) -> Response {
        let mut response = Response::draft(survey_id, Vec::new());
        response.id = ids.generate();
        response
    }

    #[test]
    fn appends_in_call_order() {
        let ids = SequentialIdGenerator::new();
        let store = ResponseStore::new();
        let survey_id = ids.generate();
        let first = store.create(response(&ids, survey_id)).unwrap();
        let second = store.create(response(&ids, survey_id)).unwrap();

        assert_eq!(store.get_by_survey_id(survey_id).unwrap(), vec![first, second]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_survey_is_not_found() {
        let store = ResponseStore::new();
        let id = SequentialIdGenerator::new().generate();
        let err = store.get_by_survey_id(id).unwrap_err();
        assert!(matches!(
            err,
            SurveyError::NotFound { entity: EntityKind::Response, .. }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn keys_are_independent() {
        let ids = SequentialIdGenerator::new();
        let store = ResponseStore::new();
        let a = ids.generate();
        let b = ids.generate();
        store.create(response(&ids, a)).unwrap();
        store.create(response(&ids, b)).unwrap();
        store.create(response(&ids, b)).unwrap();

        assert_eq!(store.get_by_survey_id(a).unwrap().len(), 1);
        assert_eq!(store.get_by_survey_id(b).unwrap().len(), 2);
        assert_eq!(store.entries().len(), 2);
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let ids = Arc::new(SequentialIdGenerator::new());
        let store = Arc::new(ResponseStore::new());
        let survey_id = ids.generate();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..25 {
                        store.create(response(&ids, survey_id)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get_by_survey_id(survey_id).unwrap().len(), 200);
    }
}
