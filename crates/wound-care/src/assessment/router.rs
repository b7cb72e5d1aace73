use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::intake::AssessmentIntake;
use super::report::{ClinicalReport, ReportSummary};
use crate::config::IntakeConfig;
use crate::error::AppError;

pub const ASSESSMENT_PATH: &str = "/api/v1/wound-assessments";

/// Response envelope; the timestamp lives here so reports stay reproducible.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub generated_at: DateTime<Utc>,
    pub report: ClinicalReport,
    pub summary: ReportSummary,
}

/// Router exposing the rules engine over HTTP with the default intake limits.
pub fn assessment_router() -> Router {
    assessment_router_with(&IntakeConfig::default())
}

/// Documents larger than `max_body_bytes` are rejected with 413 before parsing.
pub fn assessment_router_with(config: &IntakeConfig) -> Router {
    Router::new().route(
        ASSESSMENT_PATH,
        post(assess_handler).layer(DefaultBodyLimit::max(config.max_body_bytes)),
    )
}

pub(crate) async fn assess_handler(body: String) -> Response {
    let prepared = match AssessmentIntake::from_json(&body) {
        Ok(prepared) => prepared,
        Err(error) => {
            warn!(%error, "rejected assessment document");
            return AppError::from(error).into_response();
        }
    };

    let report = prepared.analyze();
    let summary = report.summary();
    info!(
        patient_id = prepared.context.patient_id.0.as_str(),
        tier = summary.review_tier_label.as_str(),
        red_flags = summary.red_flags.len(),
        "assessment completed"
    );

    let payload = AssessmentResponse {
        generated_at: Utc::now(),
        report,
        summary,
    };
    (StatusCode::OK, axum::Json(payload)).into_response()
}
