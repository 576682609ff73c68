use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::StudentId;
use super::repository::{ProgramCatalogRepository, RepositoryError, StudentRepository};
use super::service::{RecommendationService, RecommendationServiceError};
use crate::orientation::catalog::ProgramId;

/// Router builder exposing the recommendation endpoints.
pub fn recommendation_router<S, P>(service: Arc<RecommendationService<S, P>>) -> Router
where
    S: StudentRepository + 'static,
    P: ProgramCatalogRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/students/:student_id/recommendations",
            post(generate_handler::<S, P>).get(latest_handler::<S, P>),
        )
        .route(
            "/api/v1/students/:student_id/compatibility/:program_id",
            get(compatibility_handler::<S, P>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateRequest {
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn generate_handler<S, P>(
    State(service): State<Arc<RecommendationService<S, P>>>,
    Path(student_id): Path<String>,
    payload: Option<axum::Json<GenerateRequest>>,
) -> Response
where
    S: StudentRepository + 'static,
    P: ProgramCatalogRepository + 'static,
{
    let id = StudentId(student_id);
    let limit = payload.map(|axum::Json(body)| body.limit).unwrap_or(None);
    let today = Local::now().date_naive();

    match service.generate(&id, limit, today) {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn latest_handler<S, P>(
    State(service): State<Arc<RecommendationService<S, P>>>,
    Path(student_id): Path<String>,
) -> Response
where
    S: StudentRepository + 'static,
    P: ProgramCatalogRepository + 'static,
{
    let id = StudentId(student_id);
    match service.latest(&id) {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compatibility_handler<S, P>(
    State(service): State<Arc<RecommendationService<S, P>>>,
    Path((student_id, program_id)): Path<(String, String)>,
) -> Response
where
    S: StudentRepository + 'static,
    P: ProgramCatalogRepository + 'static,
{
    let student = StudentId(student_id);
    let program = ProgramId(program_id);
    let today = Local::now().date_naive();

    match service.compatibility(&student, &program, today) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: RecommendationServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    let status = match error {
        RecommendationServiceError::Profile(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RecommendationServiceError::Repository(RepositoryError::NotFound)
        | RecommendationServiceError::EmptyCatalog => StatusCode::NOT_FOUND,
        RecommendationServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        RecommendationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, axum::Json(payload)).into_response()
}
