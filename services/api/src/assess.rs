use crate::infra::init_cli_telemetry;
use crate::render::render_report;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use wound_care::assessment::{AssessmentIntake, ClinicalReport, ReportSummary};
use wound_care::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a `{ "questionnaire": ..., "context": ... }` JSON document
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the report and summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Serialize)]
struct AssessOutput<'a> {
    report: &'a ClinicalReport,
    summary: ReportSummary,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    init_cli_telemetry()?;

    let prepared = AssessmentIntake::from_path(&args.input)?;
    let report = prepared.analyze();
    info!(
        input = %args.input.display(),
        red_flags = report.red_flags.len(),
        "assessment analyzed"
    );

    if args.json {
        let output = AssessOutput {
            summary: report.summary(),
            report: &report,
        };
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|err| AppError::Io(err.into()))?;
        println!("{rendered}");
    } else {
        println!("Patient: {}", prepared.context.patient_id.0);
        println!("Location: {}\n", prepared.context.body_region.label());
        render_report(&report);
    }

    Ok(())
}
