//! `/survey` routes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use survey_core::entities::Survey;

use crate::AppState;
use crate::envelope::ApiResponse;
use crate::error::{ApiError, parse_survey_id};

type Reply<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Survey>, JsonRejection>,
) -> Reply<Survey> {
    let Json(survey) = payload.map_err(|rejection| ApiError::malformed_body(&rejection))?;
    let created = state
        .service
        .create_survey(survey)
        .map_err(|e| ApiError::from_service("creating survey", &e))?;
    tracing::info!(id = %created.id, "survey created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("survey created", created)),
    ))
}

pub async fn get(State(state): State<AppState>, Path(raw_id): Path<String>) -> Reply<Survey> {
    let id = parse_survey_id(&raw_id)?;
    let survey = state
        .service
        .get_survey(id)
        .map_err(|e| ApiError::from_service("reading survey", &e))?;
    Ok((StatusCode::OK, Json(ApiResponse::with_data("success", survey))))
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Survey>, JsonRejection>,
) -> Reply<Survey> {
    let id = parse_survey_id(&raw_id)?;
    let Json(survey) = payload.map_err(|rejection| ApiError::malformed_body(&rejection))?;
    let updated = state
        .service
        .update_survey(id, survey)
        .map_err(|e| ApiError::from_service("updating survey", &e))?;
    tracing::info!(%id, "survey updated");
    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_data("survey updated", updated)),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_survey_id(&raw_id)?;
    state
        .service
        .delete_survey(id)
        .map_err(|e| ApiError::from_service("deleting survey", &e))?;
    tracing::info!(%id, "survey deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list(State(state): State<AppState>) -> Reply<Vec<Survey>> {
    let surveys = state
        .service
        .get_all_surveys()
        .map_err(|e| ApiError::from_service("reading surveys", &e))?;
    Ok((StatusCode::OK, Json(ApiResponse::with_data("success", surveys))))
}
