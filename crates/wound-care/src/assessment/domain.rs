use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::location::BodyRegion;

/// Tissue observed in the wound bed, declared from most to least concerning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TissueType {
    Necrosis,
    Slough,
    Granulation,
    Epithelializing,
}

impl TissueType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Necrosis,
            Self::Slough,
            Self::Granulation,
            Self::Epithelializing,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Necrosis => "Necrosis",
            Self::Slough => "Slough",
            Self::Granulation => "Granulation",
            Self::Epithelializing => "Epithelializing",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExudateLevel {
    Dry,
    Low,
    Moderate,
    High,
    #[default]
    Unknown,
}

impl ExudateLevel {
    pub const fn ordered() -> [Self; 5] {
        [Self::Dry, Self::Low, Self::Moderate, Self::High, Self::Unknown]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Unknown => "Not assessed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeepSpaceType {
    Cavity,
    Tunnel,
    Undermining,
}

impl DeepSpaceType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cavity => "cavity",
            Self::Tunnel => "tunnelling",
            Self::Undermining => "undermining",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriwoundSkin {
    Normal,
    Macerated,
    Fragile,
    #[default]
    Unknown,
}

impl PeriwoundSkin {
    pub const fn ordered() -> [Self; 4] {
        [Self::Normal, Self::Macerated, Self::Fragile, Self::Unknown]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Intact",
            Self::Macerated => "Macerated",
            Self::Fragile => "Fragile",
            Self::Unknown => "Not assessed",
        }
    }
}

/// Ankle-brachial index band as recorded at the bedside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbiRange {
    #[serde(rename = "ge_0_8")]
    AtLeast0_8,
    #[serde(rename = "p0_5_to_0_79")]
    From0_5To0_79,
    #[serde(rename = "lt_0_5")]
    Below0_5,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl AbiRange {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::AtLeast0_8,
            Self::From0_5To0_79,
            Self::Below0_5,
            Self::Unknown,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AtLeast0_8 => "ABI 0.8 or above",
            Self::From0_5To0_79 => "ABI 0.5 to 0.79",
            Self::Below0_5 => "ABI below 0.5",
            Self::Unknown => "ABI not measured",
        }
    }
}

/// Independent bedside infection signs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfectionSigns {
    pub warmth: bool,
    pub purulent_discharge: bool,
    pub odor: bool,
    pub spreading_redness: bool,
    pub erythema_gt_2cm: bool,
    pub fever: bool,
    pub crepitus: bool,
}

/// Normalized questionnaire answers for a single wound assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireInput {
    pub wound_bed_types: BTreeSet<TissueType>,
    pub exudate: ExudateLevel,
    pub has_deep_spaces: bool,
    pub deep_space_types: BTreeSet<DeepSpaceType>,
    pub periwound_skin: PeriwoundSkin,
    pub infection_signs: InfectionSigns,
    pub has_exposed_bone: bool,
    pub probe_to_bone_positive: bool,
    pub pedal_pulses_palpable: Option<bool>,
    pub cold_pale_foot: bool,
    pub rest_pain_relieved_by_hanging: bool,
    pub abi: AbiRange,
}

impl QuestionnaireInput {
    pub fn has_tissue(&self, tissue: TissueType) -> bool {
        self.wound_bed_types.contains(&tissue)
    }

    /// Pulses were checked and could not be felt; an unchecked foot does not count.
    pub fn pedal_pulses_absent(&self) -> bool {
        self.pedal_pulses_palpable == Some(false)
    }

    pub fn bone_involved(&self) -> bool {
        self.has_exposed_bone || self.probe_to_bone_positive
    }
}

/// Underlying cause category of a wound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Etiology {
    Venous,
    Arterial,
    #[serde(alias = "diabeticFoot")]
    DiabeticFoot,
    Pressure,
    Traumatic,
    Surgical,
    Mixed,
    Other,
}

impl Etiology {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Venous,
            Self::Arterial,
            Self::DiabeticFoot,
            Self::Pressure,
            Self::Traumatic,
            Self::Surgical,
            Self::Mixed,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Venous => "Venous",
            Self::Arterial => "Arterial",
            Self::DiabeticFoot => "Diabetic foot",
            Self::Pressure => "Pressure",
            Self::Traumatic => "Traumatic",
            Self::Surgical => "Surgical",
            Self::Mixed => "Mixed",
            Self::Other => "Other",
        }
    }
}

/// Opaque patient identifier supplied by the profile lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(pub String);

/// Tri-state comorbidity flags; only `Some(true)` counts as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comorbidities {
    pub has_diabetes: Option<bool>,
    pub has_pad: Option<bool>,
    pub has_venous_disease: Option<bool>,
    pub is_immunosuppressed: Option<bool>,
    pub has_mobility_impairment: Option<bool>,
    pub is_on_anticoagulants: Option<bool>,
}

impl Comorbidities {
    pub fn diabetes_present(&self) -> bool {
        self.has_diabetes == Some(true)
    }

    pub fn pad_present(&self) -> bool {
        self.has_pad == Some(true)
    }

    pub fn venous_disease_present(&self) -> bool {
        self.has_venous_disease == Some(true)
    }

    pub fn immunosuppression_present(&self) -> bool {
        self.is_immunosuppressed == Some(true)
    }

    pub fn mobility_impairment_present(&self) -> bool {
        self.has_mobility_impairment == Some(true)
    }

    pub fn anticoagulation_present(&self) -> bool {
        self.is_on_anticoagulants == Some(true)
    }
}

/// Patient and location facts the engine reads but never derives on its own.
///
/// `is_lower_limb` and `is_foot_location` are fixed when the context is built from a
/// [`BodyRegion`], so every rule in one analysis sees the same answer. Deserialized
/// contexts ignore any serialized flags and derive them from `body_region` again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContextFields")]
pub struct ClinicalContext {
    pub patient_id: PatientId,
    pub comorbidities: Comorbidities,
    pub body_region: BodyRegion,
    pub is_lower_limb: bool,
    pub is_foot_location: bool,
    pub suggested_etiology: Option<Etiology>,
}

#[derive(Deserialize)]
struct ContextFields {
    patient_id: PatientId,
    #[serde(default)]
    comorbidities: Comorbidities,
    #[serde(default)]
    body_region: BodyRegion,
    #[serde(default)]
    suggested_etiology: Option<Etiology>,
}

impl From<ContextFields> for ClinicalContext {
    fn from(fields: ContextFields) -> Self {
        ClinicalContextBuilder {
            patient_id: fields.patient_id,
            comorbidities: fields.comorbidities,
            body_region: fields.body_region,
            suggested_etiology: fields.suggested_etiology,
        }
        .build()
    }
}

impl ClinicalContext {
    pub fn builder(patient_id: impl Into<String>) -> ClinicalContextBuilder {
        ClinicalContextBuilder {
            patient_id: PatientId(patient_id.into()),
            comorbidities: Comorbidities::default(),
            body_region: BodyRegion::Unspecified,
            suggested_etiology: None,
        }
    }
}

/// Collects context facts; location flags are fixed in [`ClinicalContextBuilder::build`].
#[derive(Debug, Clone)]
pub struct ClinicalContextBuilder {
    patient_id: PatientId,
    comorbidities: Comorbidities,
    body_region: BodyRegion,
    suggested_etiology: Option<Etiology>,
}

impl ClinicalContextBuilder {
    /// Resolve a body-location code such as `left_heel` or `sacrum`.
    pub fn location(mut self, code: &str) -> Self {
        self.body_region = BodyRegion::from_code(code);
        self
    }

    pub fn region(mut self, region: BodyRegion) -> Self {
        self.body_region = region;
        self
    }

    pub fn comorbidities(mut self, comorbidities: Comorbidities) -> Self {
        self.comorbidities = comorbidities;
        self
    }

    pub fn suggested_etiology(mut self, etiology: Option<Etiology>) -> Self {
        self.suggested_etiology = etiology;
        self
    }

    pub fn build(self) -> ClinicalContext {
        ClinicalContext {
            patient_id: self.patient_id,
            comorbidities: self.comorbidities,
            body_region: self.body_region,
            is_lower_limb: self.body_region.is_lower_limb(),
            is_foot_location: self.body_region.is_foot_location(),
            suggested_etiology: self.suggested_etiology,
        }
    }
}
