//! Mapping from request and service failures to HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use survey_core::SurveyError;
use survey_core::ids::Id;

use crate::envelope::ApiResponse;

/// A failed request: status plus the message placed in the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The request body was not the expected JSON.
    pub fn malformed_body(rejection: &JsonRejection) -> Self {
        tracing::warn!(%rejection, "malformed request body");
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "malformed body".into(),
        }
    }

    pub fn invalid_query(rejection: &QueryRejection) -> Self {
        tracing::warn!(%rejection, "malformed query string");
        Self::invalid_survey_id()
    }

    pub fn invalid_survey_id() -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "invalid survey id".into(),
        }
    }

    /// Map a service error: `NotFound` → 404, `Validation` → 400, anything else → 500.
    ///
    /// `action` completes "error while ..." in the message, e.g. `"reading survey"`.
    pub fn from_service(action: &str, error: &SurveyError) -> Self {
        let status = match error {
            SurveyError::NotFound { .. } => StatusCode::NOT_FOUND,
            SurveyError::Validation(_) => StatusCode::BAD_REQUEST,
            SurveyError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(%error, action, "request failed");
        } else {
            tracing::warn!(%error, action, "request rejected");
        }
        Self {
            status,
            message: format!("error while {action} {error}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::message(self.message))).into_response()
    }
}

/// Parse a survey id taken from a path segment or query parameter.
///
/// The nil id is never a valid key, so an empty string is rejected too.
pub fn parse_survey_id(raw: &str) -> Result<Id, ApiError> {
    match raw.parse::<Id>() {
        Ok(id) if !id.is_nil() => Ok(id),
        Ok(_) => Err(ApiError::invalid_survey_id()),
        Err(error) => {
            tracing::warn!(%error, "unparsable survey id");
            Err(ApiError::invalid_survey_id())
        }
    }
}
