use crate::assessment::domain::{
    ClinicalContext, Comorbidities, ExudateLevel, InfectionSigns, PeriwoundSkin,
    QuestionnaireInput, TissueType,
};

pub(super) fn context(location: &str) -> ClinicalContext {
    ClinicalContext::builder("patient-001").location(location).build()
}

pub(super) fn context_with(location: &str, comorbidities: Comorbidities) -> ClinicalContext {
    ClinicalContext::builder("patient-001")
        .location(location)
        .comorbidities(comorbidities)
        .build()
}

pub(super) fn diabetic() -> Comorbidities {
    Comorbidities {
        has_diabetes: Some(true),
        ..Comorbidities::default()
    }
}

pub(super) fn tissues(types: &[TissueType]) -> QuestionnaireInput {
    QuestionnaireInput {
        wound_bed_types: types.iter().copied().collect(),
        ..QuestionnaireInput::default()
    }
}

/// Clean granulating wound with moderate exudate and healthy surrounding skin.
pub(super) fn granulating_wound() -> QuestionnaireInput {
    QuestionnaireInput {
        exudate: ExudateLevel::Moderate,
        periwound_skin: PeriwoundSkin::Normal,
        ..tissues(&[TissueType::Granulation])
    }
}

pub(super) fn with_signs(input: QuestionnaireInput, signs: InfectionSigns) -> QuestionnaireInput {
    QuestionnaireInput {
        infection_signs: signs,
        ..input
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
