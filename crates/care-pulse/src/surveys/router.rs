use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::SurveyForm;
use super::intake::{CourtesySurveyService, SurveyIntakeError};
use super::store::SubmissionStore;

/// Router builder exposing the survey intake and dashboard endpoints.
pub fn survey_router<S>(service: Arc<CourtesySurveyService<S>>) -> Router
where
    S: SubmissionStore + 'static,
{
    Router::new()
        .route("/api/v1/surveys/ratings", post(submit_handler::<S>))
        .route("/api/v1/surveys/dashboard", get(dashboard_handler::<S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<CourtesySurveyService<S>>>,
    axum::Json(form): axum::Json<SurveyForm>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.submit(form) {
        Ok(submission) => {
            let payload = json!({
                "status": "recorded",
                "submission": submission,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(SurveyIntakeError::Rejected(rejection)) => {
            (StatusCode::BAD_REQUEST, axum::Json(rejection)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn dashboard_handler<S>(
    State(service): State<Arc<CourtesySurveyService<S>>>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.dashboard() {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
