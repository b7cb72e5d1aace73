use super::mapping;
use super::normalizer::normalize_tag;
use crate::assessment::domain::{
    ClinicalContext, Comorbidities, InfectionSigns, QuestionnaireInput,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

const ANONYMOUS_PATIENT: &str = "anonymous";

/// Questionnaire answers as persisted by the form layer, before any tag resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawQuestionnaire {
    #[serde(alias = "woundBedTypes", deserialize_with = "tag_list")]
    pub wound_bed_types: Vec<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub exudate: Option<String>,
    #[serde(alias = "hasDeepSpaces", deserialize_with = "tri_state")]
    pub has_deep_spaces: Option<bool>,
    #[serde(alias = "deepSpaceTypes", deserialize_with = "tag_list")]
    pub deep_space_types: Vec<String>,
    #[serde(alias = "periwoundSkin", deserialize_with = "empty_string_as_none")]
    pub periwound_skin: Option<String>,
    #[serde(deserialize_with = "tri_state")]
    pub warmth: Option<bool>,
    #[serde(alias = "purulentDischarge", deserialize_with = "tri_state")]
    pub purulent_discharge: Option<bool>,
    #[serde(alias = "odour", deserialize_with = "tri_state")]
    pub odor: Option<bool>,
    #[serde(alias = "spreadingRedness", deserialize_with = "tri_state")]
    pub spreading_redness: Option<bool>,
    #[serde(alias = "erythemaGt2cm", deserialize_with = "tri_state")]
    pub erythema_gt_2cm: Option<bool>,
    #[serde(deserialize_with = "tri_state")]
    pub fever: Option<bool>,
    #[serde(deserialize_with = "tri_state")]
    pub crepitus: Option<bool>,
    #[serde(alias = "hasExposedBone", deserialize_with = "tri_state")]
    pub has_exposed_bone: Option<bool>,
    #[serde(alias = "probeToBonePositive", deserialize_with = "tri_state")]
    pub probe_to_bone_positive: Option<bool>,
    #[serde(alias = "pedalPulsesPalpable", deserialize_with = "tri_state")]
    pub pedal_pulses_palpable: Option<bool>,
    #[serde(alias = "coldPaleFoot", deserialize_with = "tri_state")]
    pub cold_pale_foot: Option<bool>,
    #[serde(alias = "restPainRelievedByHanging", deserialize_with = "tri_state")]
    pub rest_pain_relieved_by_hanging: Option<bool>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub abi: Option<String>,
}

impl RawQuestionnaire {
    /// Resolve every tag; unknown spellings fall back to the field default.
    pub fn into_input(self) -> QuestionnaireInput {
        QuestionnaireInput {
            wound_bed_types: resolve_set(
                "wound_bed_types",
                &self.wound_bed_types,
                mapping::tissue_type,
            ),
            exudate: resolve_or_default("exudate", self.exudate.as_deref(), mapping::exudate_level),
            has_deep_spaces: self.has_deep_spaces.unwrap_or(false),
            deep_space_types: resolve_set(
                "deep_space_types",
                &self.deep_space_types,
                mapping::deep_space_type,
            ),
            periwound_skin: resolve_or_default(
                "periwound_skin",
                self.periwound_skin.as_deref(),
                mapping::periwound_skin,
            ),
            infection_signs: InfectionSigns {
                warmth: self.warmth.unwrap_or(false),
                purulent_discharge: self.purulent_discharge.unwrap_or(false),
                odor: self.odor.unwrap_or(false),
                spreading_redness: self.spreading_redness.unwrap_or(false),
                erythema_gt_2cm: self.erythema_gt_2cm.unwrap_or(false),
                fever: self.fever.unwrap_or(false),
                crepitus: self.crepitus.unwrap_or(false),
            },
            has_exposed_bone: self.has_exposed_bone.unwrap_or(false),
            probe_to_bone_positive: self.probe_to_bone_positive.unwrap_or(false),
            pedal_pulses_palpable: self.pedal_pulses_palpable,
            cold_pale_foot: self.cold_pale_foot.unwrap_or(false),
            rest_pain_relieved_by_hanging: self.rest_pain_relieved_by_hanging.unwrap_or(false),
            abi: resolve_or_default("abi", self.abi.as_deref(), mapping::abi_range),
        }
    }
}

/// Patient-profile and location facts as supplied by the profile lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawContext {
    #[serde(alias = "patientId", deserialize_with = "empty_string_as_none")]
    pub patient_id: Option<String>,
    #[serde(alias = "hasDiabetes", deserialize_with = "tri_state")]
    pub has_diabetes: Option<bool>,
    #[serde(alias = "hasPad", alias = "hasPAD", deserialize_with = "tri_state")]
    pub has_pad: Option<bool>,
    #[serde(alias = "hasVenousDisease", deserialize_with = "tri_state")]
    pub has_venous_disease: Option<bool>,
    #[serde(alias = "isImmunosuppressed", deserialize_with = "tri_state")]
    pub is_immunosuppressed: Option<bool>,
    #[serde(alias = "hasMobilityImpairment", deserialize_with = "tri_state")]
    pub has_mobility_impairment: Option<bool>,
    #[serde(alias = "isOnAnticoagulants", deserialize_with = "tri_state")]
    pub is_on_anticoagulants: Option<bool>,
    #[serde(
        alias = "bodyLocation",
        alias = "location",
        deserialize_with = "empty_string_as_none"
    )]
    pub body_location: Option<String>,
    #[serde(alias = "suggestedEtiology", deserialize_with = "empty_string_as_none")]
    pub suggested_etiology: Option<String>,
}

impl RawContext {
    pub fn into_context(self) -> ClinicalContext {
        let suggested_etiology = self.suggested_etiology.as_deref().and_then(|raw| {
            let resolved = mapping::etiology(&normalize_tag(raw));
            if resolved.is_none() {
                debug!(field = "suggested_etiology", tag = raw, "unrecognised tag dropped");
            }
            resolved
        });

        ClinicalContext::builder(
            self.patient_id
                .unwrap_or_else(|| ANONYMOUS_PATIENT.to_string()),
        )
        .location(self.body_location.as_deref().unwrap_or_default())
        .comorbidities(Comorbidities {
            has_diabetes: self.has_diabetes,
            has_pad: self.has_pad,
            has_venous_disease: self.has_venous_disease,
            is_immunosuppressed: self.is_immunosuppressed,
            has_mobility_impairment: self.has_mobility_impairment,
            is_on_anticoagulants: self.is_on_anticoagulants,
        })
        .suggested_etiology(suggested_etiology)
        .build()
    }
}

fn resolve_or_default<T: Default>(
    field: &'static str,
    raw: Option<&str>,
    lookup: fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    lookup(&normalize_tag(raw)).unwrap_or_else(|| {
        debug!(field, tag = raw, "unrecognised tag replaced with default");
        T::default()
    })
}

fn resolve_set<T: Ord>(
    field: &'static str,
    raws: &[String],
    lookup: fn(&str) -> Option<T>,
) -> BTreeSet<T> {
    raws.iter()
        .filter_map(|raw| {
            let resolved = lookup(&normalize_tag(raw));
            if resolved.is_none() {
                debug!(field, tag = raw.as_str(), "unrecognised tag dropped");
            }
            resolved
        })
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<Tags>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Tags::One(tag)) => vec![tag],
        Some(Tags::Many(tags)) => tags,
    }
    .into_iter()
    .filter(|tag| !tag.trim().is_empty())
    .collect())
}

fn tri_state<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => None,
        Some(Flag::Bool(value)) => Some(value),
        Some(Flag::Number(1)) => Some(true),
        Some(Flag::Number(0)) => Some(false),
        Some(Flag::Number(other)) => {
            debug!(value = other, "numeric flag outside 0/1 treated as unknown");
            None
        }
        Some(Flag::Text(text)) if text.trim().is_empty() => None,
        Some(Flag::Text(text)) => mapping::flag(&normalize_tag(&text)).unwrap_or_else(|| {
            debug!(tag = text.as_str(), "unrecognised flag treated as unknown");
            None
        }),
    })
}
