use super::super::domain::{
    AbiRange, ClinicalContext, Etiology, ExudateLevel, QuestionnaireInput, TissueType,
};
use super::super::rules::InfectionSeverity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComorbidityFactor {
    Diabetes,
    PeripheralArterialDisease,
    VenousDisease,
    Immunosuppression,
    MobilityImpairment,
    Anticoagulation,
}

impl ComorbidityFactor {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Diabetes,
            Self::PeripheralArterialDisease,
            Self::VenousDisease,
            Self::Immunosuppression,
            Self::MobilityImpairment,
            Self::Anticoagulation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes mellitus",
            Self::PeripheralArterialDisease => "Peripheral arterial disease",
            Self::VenousDisease => "Venous disease",
            Self::Immunosuppression => "Immunosuppression",
            Self::MobilityImpairment => "Mobility impairment",
            Self::Anticoagulation => "Anticoagulant therapy",
        }
    }

    const fn guidance(self) -> (&'static str, &'static str) {
        match self {
            Self::Diabetes => (
                "Impaired immunity, neuropathy and slower tissue repair",
                "Optimize glycemic control and inspect feet daily",
            ),
            Self::PeripheralArterialDisease => (
                "Reduced oxygen and nutrient delivery to the wound",
                "Confirm perfusion before compression or debridement",
            ),
            Self::VenousDisease => (
                "Venous hypertension drives edema and recurrence",
                "Compression once arterial supply is confirmed; encourage elevation",
            ),
            Self::Immunosuppression => (
                "Blunted inflammatory response can mask infection",
                "Lower the threshold for suspecting and treating infection",
            ),
            Self::MobilityImpairment => (
                "Sustained pressure and reduced circulation",
                "Pressure redistribution and a repositioning schedule",
            ),
            Self::Anticoagulation => (
                "Increased bleeding risk during debridement and dressing changes",
                "Prefer conservative debridement and non-adherent dressings",
            ),
        }
    }

    fn present_in(self, context: &ClinicalContext) -> bool {
        let comorbidities = &context.comorbidities;
        match self {
            Self::Diabetes => comorbidities.diabetes_present(),
            Self::PeripheralArterialDisease => comorbidities.pad_present(),
            Self::VenousDisease => comorbidities.venous_disease_present(),
            Self::Immunosuppression => comorbidities.immunosuppression_present(),
            Self::MobilityImpairment => comorbidities.mobility_impairment_present(),
            Self::Anticoagulation => comorbidities.anticoagulation_present(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientConsideration {
    pub factor: ComorbidityFactor,
    pub impact: String,
    pub action: String,
}

pub fn build_patient_considerations(context: &ClinicalContext) -> Vec<PatientConsideration> {
    ComorbidityFactor::ordered()
        .into_iter()
        .filter(|factor| factor.present_in(context))
        .map(|factor| {
            let (impact, action) = factor.guidance();
            PatientConsideration {
                factor,
                impact: impact.to_string(),
                action: action.to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierKind {
    SystemicInfection,
    LocalInfection,
    NecroticTissue,
    CriticalIschemia,
    BoneInvolvement,
    VenousHypertension,
    HighExudate,
    DeepSpaces,
}

impl BarrierKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SystemicInfection => "Systemic infection",
            Self::LocalInfection => "Local infection",
            Self::NecroticTissue => "Necrotic tissue",
            Self::CriticalIschemia => "Critical ischemia",
            Self::BoneInvolvement => "Bone involvement",
            Self::VenousHypertension => "Venous hypertension",
            Self::HighExudate => "High exudate",
            Self::DeepSpaces => "Dead space",
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::SystemicInfection => "Systemic infection halts healing and endangers the patient",
            Self::LocalInfection => "Local infection raises bioburden and delays closure",
            Self::NecroticTissue => "Necrotic tissue blocks granulation and feeds bacteria",
            Self::CriticalIschemia => "Critical ischemia leaves the wound unable to heal",
            Self::BoneInvolvement => "Possible osteomyelitis requires definitive management",
            Self::VenousHypertension => "Uncontrolled venous hypertension sustains ulceration",
            Self::HighExudate => "Excess exudate damages the periwound and wound bed",
            Self::DeepSpaces => "Tunnels, cavities or undermining slow closure from the base",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierSeverity {
    Moderate,
    Major,
    Critical,
}

impl BarrierSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Moderate => "Moderate",
            Self::Major => "Major",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealingBarrier {
    pub kind: BarrierKind,
    pub severity: BarrierSeverity,
    pub description: String,
}

pub fn identify_barriers(
    input: &QuestionnaireInput,
    context: &ClinicalContext,
    etiology: Etiology,
    infection: InfectionSeverity,
) -> Vec<HealingBarrier> {
    let mut barriers = Vec::new();
    let mut push = |kind: BarrierKind, severity: BarrierSeverity| {
        barriers.push(HealingBarrier {
            kind,
            severity,
            description: kind.description().to_string(),
        });
    };

    match infection {
        InfectionSeverity::Systemic => {
            push(BarrierKind::SystemicInfection, BarrierSeverity::Critical)
        }
        InfectionSeverity::Local => push(BarrierKind::LocalInfection, BarrierSeverity::Major),
        InfectionSeverity::None => {}
    }
    if input.has_tissue(TissueType::Necrosis) {
        push(BarrierKind::NecroticTissue, BarrierSeverity::Major);
    }
    if input.abi == AbiRange::Below0_5 || input.pedal_pulses_absent() {
        push(BarrierKind::CriticalIschemia, BarrierSeverity::Critical);
    }
    if input.bone_involved() {
        push(BarrierKind::BoneInvolvement, BarrierSeverity::Critical);
    }
    if context.comorbidities.venous_disease_present() && etiology == Etiology::Venous {
        push(BarrierKind::VenousHypertension, BarrierSeverity::Major);
    }
    if input.exudate == ExudateLevel::High {
        push(BarrierKind::HighExudate, BarrierSeverity::Moderate);
    }
    if input.has_deep_spaces {
        push(BarrierKind::DeepSpaces, BarrierSeverity::Moderate);
    }

    barriers
}
