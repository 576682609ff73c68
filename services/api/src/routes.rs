use crate::infra::{AppState, InMemoryProgramCatalog, InMemoryStudentDirectory};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Extension, Json};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

use orientcam::orientation::catalog::{
    CatalogStatistics, ProgramCatalogImporter, ProgramDescriptor,
};
use orientcam::orientation::matching::{
    recommendation_router, ProgramCatalogRepository, RecommendationService, RepositoryError,
    RiasecResult, StudentId, StudentProfile, StudentRecord, StudentRepository,
};
use orientcam::orientation::riasec::quiz::{score_answers, QuizAnswer, QuizKey};
use orientcam::orientation::riasec::{HollandCode, RiasecScores};

pub(crate) type ApiRecommendationService =
    RecommendationService<InMemoryStudentDirectory, InMemoryProgramCatalog>;

/// Mounts the library's recommendation router plus the profile, quiz, and
/// catalog endpoints backed by the in-memory adapters.
pub(crate) fn with_orientation_routes(
    service: Arc<ApiRecommendationService>,
    students: Arc<InMemoryStudentDirectory>,
    catalog: Arc<InMemoryProgramCatalog>,
) -> axum::Router {
    recommendation_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(
            "/api/v1/students/:student_id/profile",
            put(upsert_profile_handler),
        )
        .route(
            "/api/v1/students/:student_id/riasec",
            post(riasec_submit_handler),
        )
        .route("/api/v1/programs", get(list_programs_handler))
        .route("/api/v1/programs/statistics", get(statistics_handler))
        .route("/api/v1/programs/import", post(import_catalog_handler))
        .layer(Extension(students))
        .layer(Extension(catalog))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn upsert_profile_handler(
    Extension(students): Extension<Arc<InMemoryStudentDirectory>>,
    axum::extract::Path(student_id): axum::extract::Path<String>,
    Json(mut profile): Json<StudentProfile>,
) -> Response {
    let id = StudentId(student_id);

    let existing = match students.fetch(&id) {
        Ok(record) => record,
        Err(error) => return repository_error_response(error),
    };

    // A profile update must not silently discard stored test results.
    let riasec_result = existing.and_then(|record| record.riasec_result);
    if profile.riasec.is_none() {
        profile.riasec = riasec_result.as_ref().map(|result| result.scores);
    }

    let record = StudentRecord {
        student_id: id,
        profile,
        riasec_result,
    };

    match students.upsert(record.clone()) {
        Ok(()) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => repository_error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RiasecSubmitRequest {
    pub(crate) answers: Vec<QuizAnswer>,
    #[serde(default)]
    pub(crate) duration_seconds: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RiasecInterpretation {
    pub(crate) dimension_code: char,
    pub(crate) dimension_name: &'static str,
    pub(crate) score: u8,
    pub(crate) description: &'static str,
    pub(crate) typical_careers: &'static [&'static str],
    pub(crate) color: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RiasecResultResponse {
    pub(crate) scores: RiasecScores,
    pub(crate) holland_code: String,
    pub(crate) interpretations: Vec<RiasecInterpretation>,
    pub(crate) recorded_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) duration_seconds: Option<u32>,
}

pub(crate) async fn riasec_submit_handler(
    Extension(students): Extension<Arc<InMemoryStudentDirectory>>,
    axum::extract::Path(student_id): axum::extract::Path<String>,
    Json(payload): Json<RiasecSubmitRequest>,
) -> Response {
    let id = StudentId(student_id);

    let scores = match score_answers(&payload.answers, &QuizKey::standard()) {
        Ok(scores) => scores,
        Err(error) => {
            let body = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let holland_code = HollandCode::from_scores(&scores);
    let recorded_on = Local::now().date_naive();
    let result = RiasecResult {
        scores,
        holland_code,
        recorded_on,
        test_version: "1.0".to_string(),
    };

    match students.record_riasec(&id, result) {
        Ok(_) => {
            let interpretations = interpretations_for(&holland_code, &scores);
            let body = RiasecResultResponse {
                scores,
                holland_code: holland_code.to_string(),
                interpretations,
                recorded_on,
                duration_seconds: payload.duration_seconds,
            };
            (StatusCode::CREATED, Json(body)).into_response()
        }
        Err(error) => repository_error_response(error),
    }
}

fn interpretations_for(code: &HollandCode, scores: &RiasecScores) -> Vec<RiasecInterpretation> {
    code.0
        .iter()
        .map(|dimension| {
            let profile = dimension.profile();
            RiasecInterpretation {
                dimension_code: dimension.code(),
                dimension_name: dimension.label(),
                score: scores.get(*dimension),
                description: profile.description,
                typical_careers: profile.typical_careers,
                color: dimension.color(),
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub(crate) struct ProgramListResponse {
    pub(crate) programs: Vec<ProgramDescriptor>,
    pub(crate) total: usize,
}

pub(crate) async fn list_programs_handler(
    Extension(catalog): Extension<Arc<InMemoryProgramCatalog>>,
) -> Response {
    match catalog.list_active() {
        Ok(programs) => {
            let total = programs.len();
            (StatusCode::OK, Json(ProgramListResponse { programs, total })).into_response()
        }
        Err(error) => repository_error_response(error),
    }
}

pub(crate) async fn statistics_handler(
    Extension(catalog): Extension<Arc<InMemoryProgramCatalog>>,
) -> Response {
    match catalog.list_active() {
        Ok(programs) => {
            (StatusCode::OK, Json(CatalogStatistics::collect(&programs))).into_response()
        }
        Err(error) => repository_error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogImportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogImportResponse {
    pub(crate) imported: usize,
    pub(crate) statistics: CatalogStatistics,
}

pub(crate) async fn import_catalog_handler(
    Extension(catalog): Extension<Arc<InMemoryProgramCatalog>>,
    Json(payload): Json<CatalogImportRequest>,
) -> Response {
    let reader = Cursor::new(payload.csv.into_bytes());
    let programs = match ProgramCatalogImporter::from_reader(reader) {
        Ok(programs) => programs,
        Err(error) => {
            let body = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let statistics = CatalogStatistics::collect(&programs);
    match catalog.replace_all(programs) {
        Ok(imported) => (
            StatusCode::OK,
            Json(CatalogImportResponse {
                imported,
                statistics,
            }),
        )
            .into_response(),
        Err(error) => repository_error_response(error),
    }
}

fn repository_error_response(error: RepositoryError) -> Response {
    let status = match error {
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::Conflict => StatusCode::CONFLICT,
        RepositoryError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = json!({ "error": error.to_string() });
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::default_scoring_config;
    use orientcam::orientation::matching::FinancialSituation;
    use serde_json::Value;
    use tower::ServiceExt;

    fn quiz_answers() -> Vec<QuizAnswer> {
        (1..=30u16)
            .map(|question_number| QuizAnswer {
                question_number,
                answer: if question_number % 6 == 2 { 5 } else { 2 },
            })
            .collect()
    }

    fn student_profile() -> StudentProfile {
        StudentProfile {
            riasec: None,
            bac_grade: Some(15),
            values: None,
            financial_situation: FinancialSituation::High,
            completion_percentage: 60,
        }
    }

    fn build_router() -> (
        axum::Router,
        Arc<InMemoryStudentDirectory>,
        Arc<InMemoryProgramCatalog>,
    ) {
        let students = Arc::new(InMemoryStudentDirectory::default());
        let catalog = Arc::new(InMemoryProgramCatalog::seeded());
        let service = Arc::new(RecommendationService::new(
            students.clone(),
            catalog.clone(),
            default_scoring_config(),
        ));
        let router = with_orientation_routes(service, students.clone(), catalog.clone());
        (router, students, catalog)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn quiz_submission_unblocks_recommendations() {
        let (router, students, _) = build_router();
        students
            .upsert(StudentRecord {
                student_id: StudentId("stu-001".to_string()),
                profile: student_profile(),
                riasec_result: None,
            })
            .expect("seed student");

        let submit = serde_json::to_vec(&json!({ "answers": quiz_answers() })).unwrap();
        let response = router
            .clone()
            .oneshot(
                axum::http::Request::post("/api/v1/students/stu-001/riasec")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(submit))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::CREATED);
        let payload = body_json(response).await;
        assert_eq!(
            payload.get("holland_code").and_then(Value::as_str),
            Some("IRA")
        );
        assert_eq!(
            payload
                .get("interpretations")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(3)
        );

        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/students/stu-001/recommendations")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from("{}"))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert!(!payload.as_array().expect("array payload").is_empty());
    }

    #[tokio::test]
    async fn malformed_quiz_submissions_are_rejected() {
        let (router, students, _) = build_router();
        students
            .upsert(StudentRecord {
                student_id: StudentId("stu-001".to_string()),
                profile: student_profile(),
                riasec_result: None,
            })
            .expect("seed student");

        let submit = serde_json::to_vec(&json!({ "answers": &quiz_answers()[..5] })).unwrap();
        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/students/stu-001/riasec")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(submit))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn quiz_submission_requires_a_registered_student() {
        let (router, _, _) = build_router();

        let submit = serde_json::to_vec(&json!({ "answers": quiz_answers() })).unwrap();
        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/students/ghost/riasec")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(submit))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn profile_upsert_preserves_stored_test_results() {
        let (router, students, _) = build_router();
        students
            .upsert(StudentRecord {
                student_id: StudentId("stu-001".to_string()),
                profile: student_profile(),
                riasec_result: None,
            })
            .expect("seed student");

        let submit = serde_json::to_vec(&json!({ "answers": quiz_answers() })).unwrap();
        let response = router
            .clone()
            .oneshot(
                axum::http::Request::post("/api/v1/students/stu-001/riasec")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(submit))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::CREATED);

        let update = serde_json::to_vec(&student_profile()).unwrap();
        let response = router
            .oneshot(
                axum::http::Request::put("/api/v1/students/stu-001/profile")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(update))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert!(payload
            .get("profile")
            .and_then(|profile| profile.get("riasec"))
            .map(|riasec| !riasec.is_null())
            .unwrap_or(false));
    }

    #[tokio::test]
    async fn catalog_import_replaces_the_seeded_programs() {
        let (router, _, catalog) = build_router();

        let csv = "Code,Name,University,Level,Domain,Department,RIASEC Match,Min Bac Grade,Employment Rate,Registration Fee,Annual Tuition,Scholarship Available,Capacity\nNEW-L,Licence Nouvelle,Univ,Licence,,Informatique,IRC,12,80,50000,200000,oui,50\n";
        let body = serde_json::to_vec(&json!({ "csv": csv })).unwrap();

        let response = router
            .clone()
            .oneshot(
                axum::http::Request::post("/api/v1/programs/import")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(body))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload.get("imported"), Some(&Value::from(1)));
        assert_eq!(catalog.list_active().expect("catalog lists").len(), 1);

        let response = router
            .oneshot(
                axum::http::Request::get("/api/v1/programs")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        let payload = body_json(response).await;
        assert_eq!(payload.get("total"), Some(&Value::from(1)));
    }

    #[tokio::test]
    async fn malformed_catalog_imports_are_rejected() {
        let (router, _, catalog) = build_router();
        let before = catalog.list_active().expect("catalog lists").len();

        let csv = "Code,Name,University,Level,Domain,Department,RIASEC Match,Min Bac Grade,Employment Rate,Registration Fee,Annual Tuition,Scholarship Available,Capacity\nBAD,Programme,Univ,Licence,,Droit,QQQ,,,0,100000,,0\n";
        let body = serde_json::to_vec(&json!({ "csv": csv })).unwrap();

        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/programs/import")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(body))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(catalog.list_active().expect("catalog lists").len(), before);
    }

    #[tokio::test]
    async fn statistics_route_reflects_the_seeded_catalog() {
        let (router, _, _) = build_router();

        let response = router
            .oneshot(
                axum::http::Request::get("/api/v1/programs/statistics")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload.get("total_programs"), Some(&Value::from(7)));
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body.get("status"), Some(&json!("ok")));
    }
}
