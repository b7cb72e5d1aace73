use super::super::domain::{InfectionSigns, QuestionnaireInput};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfectionSeverity {
    None,
    Local,
    Systemic,
}

impl InfectionSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No infection",
            Self::Local => "Local infection",
            Self::Systemic => "Systemic infection",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfectionSign {
    Warmth,
    PurulentDischarge,
    Odor,
    SpreadingRedness,
    ErythemaGt2cm,
    Fever,
    Crepitus,
}

impl InfectionSign {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Warmth,
            Self::PurulentDischarge,
            Self::Odor,
            Self::SpreadingRedness,
            Self::ErythemaGt2cm,
            Self::Fever,
            Self::Crepitus,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Warmth => "warmth",
            Self::PurulentDischarge => "purulent discharge",
            Self::Odor => "odor",
            Self::SpreadingRedness => "spreading redness",
            Self::ErythemaGt2cm => "erythema > 2 cm",
            Self::Fever => "fever",
            Self::Crepitus => "crepitus",
        }
    }

    pub const fn is_systemic(self) -> bool {
        matches!(self, Self::Fever | Self::Crepitus | Self::SpreadingRedness)
    }
}

impl InfectionSigns {
    pub const fn is_present(&self, sign: InfectionSign) -> bool {
        match sign {
            InfectionSign::Warmth => self.warmth,
            InfectionSign::PurulentDischarge => self.purulent_discharge,
            InfectionSign::Odor => self.odor,
            InfectionSign::SpreadingRedness => self.spreading_redness,
            InfectionSign::ErythemaGt2cm => self.erythema_gt_2cm,
            InfectionSign::Fever => self.fever,
            InfectionSign::Crepitus => self.crepitus,
        }
    }

    /// Present signs in canonical order.
    pub fn present(&self) -> Vec<InfectionSign> {
        InfectionSign::ordered()
            .into_iter()
            .filter(|sign| self.is_present(*sign))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectionAssessment {
    pub severity: InfectionSeverity,
    pub signs: Vec<InfectionSign>,
    pub requires_urgent_action: bool,
    pub summary: String,
    pub recommendation: String,
}

/// Severity alone, for rules that only branch on it.
pub fn classify_infection(signs: &InfectionSigns) -> InfectionSeverity {
    let present = signs.present();
    if present.iter().any(|sign| sign.is_systemic()) {
        InfectionSeverity::Systemic
    } else if present.is_empty() {
        InfectionSeverity::None
    } else {
        InfectionSeverity::Local
    }
}

pub fn assess_infection(input: &QuestionnaireInput) -> InfectionAssessment {
    let severity = classify_infection(&input.infection_signs);
    let signs = input.infection_signs.present();

    let (summary, recommendation) = match severity {
        InfectionSeverity::Systemic => (
            "Signs of spreading or systemic infection",
            "Urgent medical review for systemic antibiotics; obtain cultures before starting",
        ),
        InfectionSeverity::Local => (
            "Signs of local wound infection",
            "Start topical antimicrobial dressings and reassess within days",
        ),
        InfectionSeverity::None => (
            "No clinical signs of infection",
            "Continue standard wound hygiene and monitor for new signs",
        ),
    };

    trace!(severity = severity.label(), signs = signs.len(), "assessed infection");

    InfectionAssessment {
        severity,
        requires_urgent_action: severity == InfectionSeverity::Systemic,
        signs,
        summary: summary.to_string(),
        recommendation: recommendation.to_string(),
    }
}
