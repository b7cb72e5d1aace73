use super::super::domain::{QuestionnaireInput, TissueType};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantTissue {
    Necrosis,
    Slough,
    Granulation,
    Epithelializing,
    Unknown,
}

impl DominantTissue {
    /// Highest-priority tissue present: necrosis, slough, granulation, epithelializing.
    pub fn from_tissues<'a>(tissues: impl IntoIterator<Item = &'a TissueType>) -> Self {
        let present: Vec<TissueType> = tissues.into_iter().copied().collect();
        TissueType::ordered()
            .into_iter()
            .find(|tissue| present.contains(tissue))
            .map(Self::from)
            .unwrap_or(Self::Unknown)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Necrosis => "Necrosis",
            Self::Slough => "Slough",
            Self::Granulation => "Granulation",
            Self::Epithelializing => "Epithelializing",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<TissueType> for DominantTissue {
    fn from(tissue: TissueType) -> Self {
        match tissue {
            TissueType::Necrosis => Self::Necrosis,
            TissueType::Slough => Self::Slough,
            TissueType::Granulation => Self::Granulation,
            TissueType::Epithelializing => Self::Epithelializing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernLevel {
    Low,
    Moderate,
    High,
}

impl ConcernLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoundBedAssessment {
    pub dominant_tissue: DominantTissue,
    pub concern_level: ConcernLevel,
    pub tissue_types: Vec<TissueType>,
    pub is_mixed: bool,
    pub summary: String,
    pub recommendation: String,
}

pub fn assess_wound_bed(input: &QuestionnaireInput) -> WoundBedAssessment {
    let dominant_tissue = DominantTissue::from_tissues(&input.wound_bed_types);
    let is_mixed = input.wound_bed_types.len() > 1;

    let concern_level = match dominant_tissue {
        DominantTissue::Necrosis => ConcernLevel::High,
        DominantTissue::Slough => ConcernLevel::Moderate,
        DominantTissue::Granulation if is_mixed => ConcernLevel::Moderate,
        DominantTissue::Granulation => ConcernLevel::Low,
        DominantTissue::Epithelializing => ConcernLevel::Low,
        DominantTissue::Unknown => ConcernLevel::Moderate,
    };

    let (summary, recommendation) = match dominant_tissue {
        DominantTissue::Necrosis => (
            "Necrotic tissue present; the wound bed is non-viable and healing is stalled",
            "Remove devitalised tissue once perfusion allows; keep dry eschar stable on ischemic limbs",
        ),
        DominantTissue::Slough => (
            "Slough present; the wound bed is in an inflammatory, bacterially burdened state",
            "Debride slough and cleanse at each dressing change to expose a viable bed",
        ),
        DominantTissue::Granulation => (
            "Granulation tissue present; the wound bed is viable and actively healing",
            "Protect granulation tissue and maintain a moist, undisturbed environment",
        ),
        DominantTissue::Epithelializing => (
            "Epithelial tissue present; the wound is closing from the margins",
            "Protect new epithelium with a low-adherence dressing and reduce dressing frequency",
        ),
        DominantTissue::Unknown => (
            "Wound bed tissue not recorded; the assessment is incomplete",
            "Complete a wound bed tissue assessment at the next review",
        ),
    };

    trace!(
        dominant = dominant_tissue.label(),
        concern = concern_level.label(),
        is_mixed,
        "assessed wound bed"
    );

    WoundBedAssessment {
        dominant_tissue,
        concern_level,
        tissue_types: input.wound_bed_types.iter().copied().collect(),
        is_mixed,
        summary: summary.to_string(),
        recommendation: recommendation.to_string(),
    }
}
