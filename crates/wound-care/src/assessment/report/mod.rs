mod summary;
pub mod views;

pub use summary::ClinicalReport;
pub use views::{RedFlagView, ReportSummary};
