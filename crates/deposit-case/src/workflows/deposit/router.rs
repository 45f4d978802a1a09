use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::{AnalysisId, IntakeRecord};
use super::repository::{ReportRepository, RepositoryError};
use super::service::{AnalysisServiceError, CaseAnalysisService};
use super::timeline::Clock;

/// Request body for a new analysis; `today` overrides the server clock.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub intake: IntakeRecord,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing the case analysis endpoints.
pub fn analysis_router<R, C>(service: Arc<CaseAnalysisService<R, C>>) -> Router
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/api/v1/deposit/analyses", post(create_handler::<R, C>))
        .route(
            "/api/v1/deposit/analyses/:analysis_id",
            get(fetch_handler::<R, C>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R, C>(
    State(service): State<Arc<CaseAnalysisService<R, C>>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    match service.analyze(request.intake, request.today) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.snapshot())).into_response(),
        Err(AnalysisServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "analysis already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<R, C>(
    State(service): State<Arc<CaseAnalysisService<R, C>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.snapshot())).into_response(),
        Err(AnalysisServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "analysis_id": id.0,
                "error": "analysis not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
