use super::super::domain::{ClinicalContext, QuestionnaireInput, TissueType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoneStatus {
    pub exposed_bone: bool,
    pub probe_to_bone_positive: bool,
    pub requires_imaging: bool,
    pub summary: String,
    pub recommendation: String,
}

/// Bone is assessed for diabetic feet and for any wound carrying necrosis.
pub fn bone_assessment_applies(input: &QuestionnaireInput, context: &ClinicalContext) -> bool {
    (context.comorbidities.diabetes_present() && context.is_foot_location)
        || input.has_tissue(TissueType::Necrosis)
}

pub fn assess_bone(input: &QuestionnaireInput) -> BoneStatus {
    let requires_imaging = input.bone_involved();
    let (summary, recommendation) = if requires_imaging {
        (
            "Bone exposed or palpable on probing; osteomyelitis must be excluded",
            "Obtain X-ray or MRI and refer for specialist review",
        )
    } else {
        (
            "No bone exposed and probe-to-bone negative",
            "Repeat probe-to-bone testing if the wound deepens or stalls",
        )
    };

    BoneStatus {
        exposed_bone: input.has_exposed_bone,
        probe_to_bone_positive: input.probe_to_bone_positive,
        requires_imaging,
        summary: summary.to_string(),
        recommendation: recommendation.to_string(),
    }
}
