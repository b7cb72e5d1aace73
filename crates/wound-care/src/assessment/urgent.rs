use super::domain::{AbiRange, QuestionnaireInput};
use super::rules::{BoneStatus, CompressionSafety, InfectionAssessment, PerfusionStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlagKind {
    SystemicInfection,
    SuspectedOsteomyelitis,
    CriticalLimbIschemia,
    NecrotizingInfection,
}

impl RedFlagKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SystemicInfection => "Systemic infection",
            Self::SuspectedOsteomyelitis => "Suspected osteomyelitis",
            Self::CriticalLimbIschemia => "Critical limb ischemia",
            Self::NecrotizingInfection => "Possible necrotizing infection",
        }
    }

    const fn action(self) -> &'static str {
        match self {
            Self::SystemicInfection => "Immediate medical evaluation for IV antibiotics",
            Self::SuspectedOsteomyelitis => "Urgent imaging (X-ray or MRI) and specialist referral",
            Self::CriticalLimbIschemia => "Emergency vascular surgery referral within 24 hours",
            Self::NecrotizingInfection => {
                "IMMEDIATE surgical evaluation; transfer to emergency care"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    pub kind: RedFlagKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgentAction {
    pub kind: RedFlagKind,
    pub action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrgentFindings {
    pub red_flags: Vec<RedFlag>,
    pub urgent_actions: Vec<UrgentAction>,
}

impl UrgentFindings {
    fn raise(&mut self, kind: RedFlagKind, message: String) {
        self.red_flags.push(RedFlag { kind, message });
        self.urgent_actions.push(UrgentAction {
            kind,
            action: kind.action().to_string(),
        });
    }
}

/// Independent red-flag checks; each hit adds one flag and one matching action.
///
/// Critical limb ischemia needs both contraindicated compression and objective evidence
/// (ABI below 0.5 or absent pulses). An unmeasured ABI alone never raises it.
pub fn identify_urgent(
    input: &QuestionnaireInput,
    infection: &InfectionAssessment,
    perfusion: Option<&PerfusionStatus>,
    bone: Option<&BoneStatus>,
) -> UrgentFindings {
    let mut findings = UrgentFindings::default();

    if infection.requires_urgent_action {
        let signs: Vec<&str> = infection.signs.iter().map(|sign| sign.label()).collect();
        findings.raise(
            RedFlagKind::SystemicInfection,
            format!("Signs of systemic infection: {}", signs.join(", ")),
        );
    }

    if bone.is_some_and(|status| status.requires_imaging) {
        findings.raise(
            RedFlagKind::SuspectedOsteomyelitis,
            "Suspected osteomyelitis: bone exposed or probe-to-bone positive".to_string(),
        );
    }

    let ischemia_evidence = input.abi == AbiRange::Below0_5 || input.pedal_pulses_absent();
    if ischemia_evidence
        && perfusion
            .is_some_and(|status| status.compression_safe == CompressionSafety::Contraindicated)
    {
        findings.raise(
            RedFlagKind::CriticalLimbIschemia,
            "Critical limb ischemia: severely reduced ABI or absent pedal pulses".to_string(),
        );
    }

    if input.infection_signs.crepitus {
        findings.raise(
            RedFlagKind::NecrotizingInfection,
            "Crepitus present: possible necrotizing soft-tissue infection".to_string(),
        );
    }

    findings
}
