use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_survey_routes;
use care_pulse::config::AppConfig;
use care_pulse::error::AppError;
use care_pulse::surveys::{CourtesySurveyService, InMemorySubmissionStore, SurveyBackfill};
use care_pulse::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(seed_csv) = args.seed_csv.take() {
        config.seed_csv = Some(seed_csv);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemorySubmissionStore::default());
    let survey_service = Arc::new(CourtesySurveyService::new(store));

    if let Some(path) = config.seed_csv.as_ref() {
        let submissions = SurveyBackfill::from_path(path)?;
        let seeded = survey_service.seed(submissions)?;
        info!(seeded, path = %path.display(), "seeded submission store from archive");
    }

    let app = with_survey_routes(survey_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "courtesy survey service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
