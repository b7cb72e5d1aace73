//! Wound-care clinical decision support.
//!
//! The [`assessment`] module holds the deterministic rules engine: a pure function from a
//! structured wound questionnaire plus clinical context to a clinical report. Everything
//! around it (intake of raw answers, configuration, telemetry, HTTP routing) lives in
//! sibling modules and never leaks into the rules.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{
    analyze, assessment_router, AssessmentIntake, ClinicalContext, ClinicalReport,
    QuestionnaireInput, ReportSummary, RulesEngine,
};
pub use config::AppConfig;
pub use error::AppError;
