//! # survey-api
//!
//! HTTP surface of the survey platform, built on axum.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /` | health |
//! | `GET /survey`, `POST /survey` | list, create |
//! | `GET/PUT/DELETE /survey/{id}` | get, update, delete |
//! | `GET /response?survey_id=..`, `POST /response` | list, save |
//!
//! Status codes: 201 on create, 204 on delete, 404 for missing resources,
//! 400 for rule violations, 422 for unparsable bodies or ids, 500 otherwise.

pub mod envelope;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use survey_db::SurveyService;

pub use envelope::{API_VERSION, ApiResponse};
pub use error::ApiError;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<SurveyService>,
}

impl AppState {
    #[must_use]
    pub const fn new(service: Arc<SurveyService>) -> Self {
        Self { service }
    }
}

/// Build the router with every route registered (with and without a trailing slash).
pub fn router(state: AppState) -> Router {
    use handlers::{response, survey};

    Router::new()
        .route("/", get(handlers::health))
        .route("/survey", get(survey::list).post(survey::create))
        .route("/survey/", get(survey::list).post(survey::create))
        .route(
            "/survey/{id}",
            get(survey::get).put(survey::update).delete(survey::delete),
        )
        .route("/response", get(response::list).post(response::save))
        .route("/response/", get(response::list).post(response::save))
        .with_state(state)
}
