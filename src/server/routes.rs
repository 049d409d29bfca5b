use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::ApiError;
use crate::core::catalog::CatalogService;

pub async fn list_courses(State(service): State<CatalogService>) -> Response {
    Json(service.list()).into_response()
}

pub async fn get_course(
    State(service): State<CatalogService>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let raw_id = match path {
        Ok(Path(raw_id)) => raw_id,
        Err(rejection) => {
            tracing::debug!("Unreadable course id in path: {}", rejection);
            return Err(ApiError::CourseNotFound);
        }
    };

    service
        .get_by_id(&raw_id)
        .map(|course| Json(course).into_response())
        .ok_or(ApiError::CourseNotFound)
}

/// `/api/courses/` carries no id, which never matches a course.
pub async fn missing_course_id() -> ApiError {
    ApiError::CourseNotFound
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub courses: usize,
    pub loaded_at: DateTime<Utc>,
}

/// GET /health — load balancer target health check.
pub async fn health(State(service): State<CatalogService>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        courses: service.len(),
        loaded_at: service.loaded_at(),
    })
}

pub async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}
