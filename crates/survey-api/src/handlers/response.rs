//! `/response` routes.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use survey_core::entities::Response;

use crate::AppState;
use crate::envelope::ApiResponse;
use crate::error::{ApiError, parse_survey_id};

#[derive(Debug, Deserialize)]
pub struct ResponsesQuery {
    #[serde(default)]
    survey_id: String,
}

pub async fn save(
    State(state): State<AppState>,
    payload: Result<Json<Response>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Response>>), ApiError> {
    let Json(response) = payload.map_err(|rejection| ApiError::malformed_body(&rejection))?;
    let saved = state
        .service
        .save_response(response)
        .map_err(|e| ApiError::from_service("saving survey response", &e))?;
    tracing::info!(id = %saved.id, survey_id = %saved.survey_id, "response saved");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("saved response", saved)),
    ))
}

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ResponsesQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Response>>>), ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::invalid_query(&rejection))?;
    let survey_id = parse_survey_id(&query.survey_id)?;
    let responses = state
        .service
        .get_responses(survey_id)
        .map_err(|e| ApiError::from_service("reading responses", &e))?;
    Ok((StatusCode::OK, Json(ApiResponse::with_data("success", responses))))
}
