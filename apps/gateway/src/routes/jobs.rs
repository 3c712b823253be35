use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, RawQuery, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{JobCreate, JobUpdate};
use crate::normalize::{JobDetailFailure, ProxyFailure};
use crate::state::AppState;

const LIST_ERROR: &str = "Failed to fetch jobs";
const CREATE_ERROR: &str = "Failed to create job";
const GET_ERROR: &str = "Failed to fetch job";
const UPDATE_ERROR: &str = "Failed to update job";
const DELETE_ERROR: &str = "Failed to delete job";
const SAVE_ERROR: &str = "Failed to save job";
const UNSAVE_ERROR: &str = "Failed to unsave job";

#[derive(Debug, Deserialize)]
pub struct SaveJobRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UnsaveJobQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

fn require_user_id(user_id: Option<&str>) -> Result<&str, AppError> {
    user_id
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Validation("user_id is required".to_string()))
}

/// GET /api/job/:url
/// `url` is the percent-encoded posting URL; axum hands it over decoded
/// and the client re-encodes it as an upstream query parameter. With a
/// stable upstream this is idempotent byte for byte.
pub async fn handle_job_detail(
    State(state): State<AppState>,
    Path(job_url): Path<String>,
) -> Response {
    let job_url = job_url.trim();
    if job_url.is_empty() {
        return AppError::Validation("Job URL is required".to_string()).into_response();
    }

    match state.assistant.job_detail(job_url).await {
        Ok(detail) => Json(detail).into_response(),
        Err(err) => JobDetailFailure(err).into_response(),
    }
}

/// GET /api/jobs
/// Forwards the query string verbatim; filter names are owned upstream.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    match state.jobs.list_jobs(query.as_deref()).await {
        Ok(jobs) => Json(jobs).into_response(),
        Err(err) => ProxyFailure::new(err, LIST_ERROR).into_response(),
    }
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    body: Result<Json<JobCreate>, JsonRejection>,
) -> Response {
    let Ok(Json(job)) = body else {
        return AppError::invalid_body().into_response();
    };

    if let Err(message) = job.validate() {
        return AppError::Validation(message).into_response();
    }

    match state.jobs.create_job(&job).await {
        Ok(created) => Json(created).into_response(),
        Err(err) => ProxyFailure::new(err, CREATE_ERROR).into_response(),
    }
}

/// GET /api/jobs/:id
pub async fn handle_get_job(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.jobs.get_job(&id).await {
        Ok(job) => Json(job).into_response(),
        Err(err) => ProxyFailure::new(err, GET_ERROR).into_response(),
    }
}

/// PUT /api/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<JobUpdate>, JsonRejection>,
) -> Response {
    let Ok(Json(patch)) = body else {
        return AppError::invalid_body().into_response();
    };

    match state.jobs.update_job(&id, &patch).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => ProxyFailure::new(err, UPDATE_ERROR).into_response(),
    }
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.jobs.delete_job(&id).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => ProxyFailure::new(err, DELETE_ERROR).into_response(),
    }
}

/// POST /api/jobs/:id/save
pub async fn handle_save_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<SaveJobRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return AppError::invalid_body().into_response();
    };

    let user_id = match require_user_id(request.user_id.as_deref()) {
        Ok(user_id) => user_id,
        Err(err) => return err.into_response(),
    };

    match state.jobs.save_job(&id, user_id).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => ProxyFailure::new(err, SAVE_ERROR).into_response(),
    }
}

/// DELETE /api/jobs/:id/save?user_id=...
pub async fn handle_unsave_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<UnsaveJobQuery>,
) -> Response {
    let user_id = match require_user_id(query.user_id.as_deref()) {
        Ok(user_id) => user_id,
        Err(err) => return err.into_response(),
    };

    match state.jobs.unsave_job(&id, user_id).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => ProxyFailure::new(err, UNSAVE_ERROR).into_response(),
    }
}
