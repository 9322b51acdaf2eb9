use crate::cli::ServeArgs;
use crate::infra::{AppState, SystemClock};
use crate::routes::with_survey_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use programme_eligibility::config::AppConfig;
use programme_eligibility::error::AppError;
use programme_eligibility::telemetry;
use programme_eligibility::workflows::survey::SurveyService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let calendar = config.survey.calendar()?;
    let survey_service = Arc::new(SurveyService::new(calendar, Arc::new(SystemClock)));

    let app = with_survey_routes(survey_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        cutoff_month = calendar.cutoff_month(),
        "programme eligibility service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
