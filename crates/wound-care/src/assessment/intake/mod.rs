//! Turns free-form answer documents into the typed engine input.
//!
//! Tag resolution never fails: unknown spellings fall back to each field's unknown
//! default. The only errors are structural ones in the document itself.

mod mapping;
mod normalizer;
mod parser;

pub(crate) use normalizer::normalize_tag;
pub use parser::{RawContext, RawQuestionnaire};

use super::domain::{ClinicalContext, QuestionnaireInput};
use super::report::ClinicalReport;
use super::RulesEngine;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("invalid assessment document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read assessment document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Combined `{ "questionnaire": ..., "context": ... }` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentDocument {
    pub questionnaire: RawQuestionnaire,
    pub context: RawContext,
}

/// Typed input and context ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedAssessment {
    pub input: QuestionnaireInput,
    pub context: ClinicalContext,
}

impl PreparedAssessment {
    pub fn analyze(&self) -> ClinicalReport {
        RulesEngine::new().analyze(&self.input, &self.context)
    }
}

pub struct AssessmentIntake;

impl AssessmentIntake {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PreparedAssessment, IntakeError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<PreparedAssessment, IntakeError> {
        let document: AssessmentDocument = serde_json::from_str(raw)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: AssessmentDocument) -> PreparedAssessment {
        let prepared = PreparedAssessment {
            input: document.questionnaire.into_input(),
            context: document.context.into_context(),
        };
        debug!(
            patient_id = prepared.context.patient_id.0.as_str(),
            region = prepared.context.body_region.label(),
            tissues = prepared.input.wound_bed_types.len(),
            "prepared assessment intake"
        );
        prepared
    }
}
