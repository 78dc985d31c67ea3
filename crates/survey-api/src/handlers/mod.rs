//! Request handlers. Each one parses its input, calls the service once, and
//! maps the outcome to a status code and envelope.

pub mod response;
pub mod survey;

use axum::Json;
use axum::http::StatusCode;

use crate::envelope::ApiResponse;

pub async fn health() -> (StatusCode, Json<ApiResponse<()>>) {
    (StatusCode::OK, Json(ApiResponse::message("service is up")))
}
