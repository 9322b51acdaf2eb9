use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::survey::SurveyServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Survey(SurveyServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Survey(SurveyServiceError::Step(err)) => {
                write!(f, "questionnaire step {} rejected: {}", err.step(), err)
            }
            AppError::Survey(SurveyServiceError::Classify(err)) => {
                write!(f, "eligibility classification failed: {}", err)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Survey(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // The respondent stays on the rejected step and is asked again.
            AppError::Survey(SurveyServiceError::Step(err)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "next_step": err.step(), "error": err.to_string() }),
            ),
            AppError::Survey(SurveyServiceError::Classify(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": self.to_string() }),
            ),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<SurveyServiceError> for AppError {
    fn from(value: SurveyServiceError) -> Self {
        Self::Survey(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::survey::{ClassifyError, StepError, StepId, TimelineError};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn step_errors_keep_the_respondent_on_the_rejected_step() {
        let error = AppError::from(SurveyServiceError::from(StepError::Timeline {
            step: StepId::UniversityTimeline,
            source: TimelineError::MissingYears,
        }));
        assert!(error
            .to_string()
            .starts_with("questionnaire step university_timeline rejected:"));
        assert!(std::error::Error::source(&error).is_some());

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["next_step"], "university_timeline");
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .starts_with("Error processing step:"));
    }

    #[tokio::test]
    async fn classification_errors_carry_no_step() {
        let error = AppError::from(SurveyServiceError::from(ClassifyError::from(
            TimelineError::MissingYears,
        )));
        assert!(error
            .to_string()
            .starts_with("eligibility classification failed:"));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body.get("next_step").is_none());
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .starts_with("eligibility classification failed:"));
    }

    #[test]
    fn config_errors_map_to_internal_error() {
        let response = AppError::from(ConfigError::InvalidPort).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
