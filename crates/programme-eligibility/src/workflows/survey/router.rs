use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::calendar::Clock;
use super::domain::SurveyAnswers;
use super::service::{StepRequest, SurveyService};

/// Router builder exposing the next-step and submit endpoints.
pub fn survey_router<C>(service: Arc<SurveyService<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/api/survey/step", post(step_handler::<C>))
        .route("/api/survey/submit", post(submit_handler::<C>))
        .route("/api/survey", post(submit_handler::<C>))
        .with_state(service)
}

pub(crate) async fn step_handler<C>(
    State(service): State<Arc<SurveyService<C>>>,
    payload: Result<axum::Json<StepRequest>, JsonRejection>,
) -> Response
where
    C: Clock + 'static,
{
    let axum::Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return malformed_body(rejection),
    };
    let current_step = request.current_step;
    match service.next_step(request) {
        Ok(reply) => (StatusCode::OK, axum::Json(reply)).into_response(),
        Err(error) => {
            let payload = json!({
                "next_step": current_step,
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_handler<C>(
    State(service): State<Arc<SurveyService<C>>>,
    payload: Result<axum::Json<SurveyAnswers>, JsonRejection>,
) -> Response
where
    C: Clock + 'static,
{
    let axum::Json(answers) = match payload {
        Ok(json) => json,
        Err(rejection) => return malformed_body(rejection),
    };
    match service.submit(&answers) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

/// Bodies that never reach the service still answer with a json error.
fn malformed_body(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (rejection.status(), axum::Json(payload)).into_response()
}
