use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use wound_care::config::AppConfig;
use wound_care::error::AppError;
use wound_care::telemetry::{self, LogSink};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One-shot commands keep stdout for the report and log to stderr.
pub(crate) fn init_cli_telemetry() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    Ok(())
}
