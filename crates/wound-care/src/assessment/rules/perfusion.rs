use super::super::domain::{AbiRange, QuestionnaireInput};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerfusionLevel {
    Adequate,
    Reduced,
    Critical,
    Unknown,
}

impl PerfusionLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Adequate => "Adequate",
            Self::Reduced => "Reduced",
            Self::Critical => "Critical",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionSafety {
    Full,
    Reduced,
    Contraindicated,
}

impl CompressionSafety {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Full compression (40 mmHg)",
            Self::Reduced => "Reduced compression (20-30 mmHg)",
            Self::Contraindicated => "Compression contraindicated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IschemiaSign {
    ColdPaleFoot,
    RestPainRelievedByDependency,
    AbsentPedalPulses,
}

impl IschemiaSign {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ColdPaleFoot => "Cold, pale foot",
            Self::RestPainRelievedByDependency => "Rest pain relieved by hanging the leg",
            Self::AbsentPedalPulses => "Absent pedal pulses",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfusionStatus {
    pub level: PerfusionLevel,
    pub compression_safe: CompressionSafety,
    pub abi: AbiRange,
    pub clinical_signs: Vec<IschemiaSign>,
    pub summary: String,
    pub recommendation: String,
}

/// Lower-limb perfusion. Any clinical ischemia sign outranks a reassuring ABI.
pub fn assess_perfusion(input: &QuestionnaireInput) -> PerfusionStatus {
    let mut clinical_signs = Vec::new();
    if input.cold_pale_foot {
        clinical_signs.push(IschemiaSign::ColdPaleFoot);
    }
    if input.rest_pain_relieved_by_hanging {
        clinical_signs.push(IschemiaSign::RestPainRelievedByDependency);
    }
    if input.pedal_pulses_absent() {
        clinical_signs.push(IschemiaSign::AbsentPedalPulses);
    }

    let (level, compression_safe, summary, recommendation) =
        if input.abi == AbiRange::Below0_5 || !clinical_signs.is_empty() {
            (
                PerfusionLevel::Critical,
                CompressionSafety::Contraindicated,
                "Critical perfusion deficit; the limb is at risk",
                "Do not apply compression; arrange urgent vascular assessment",
            )
        } else if input.abi == AbiRange::From0_5To0_79 {
            (
                PerfusionLevel::Reduced,
                CompressionSafety::Reduced,
                "Reduced arterial perfusion",
                "Reduced compression only (20-30 mmHg) with caution and specialist oversight",
            )
        } else if input.abi == AbiRange::AtLeast0_8 {
            (
                PerfusionLevel::Adequate,
                CompressionSafety::Full,
                "Adequate arterial perfusion for healing",
                "Full therapeutic compression may be used where indicated",
            )
        } else {
            (
                PerfusionLevel::Unknown,
                CompressionSafety::Contraindicated,
                "Perfusion not established; ABI not measured",
                "Measure ABI before any compression therapy",
            )
        };

    trace!(
        level = level.label(),
        compression = compression_safe.label(),
        signs = clinical_signs.len(),
        "assessed perfusion"
    );

    PerfusionStatus {
        level,
        compression_safe,
        abi: input.abi,
        clinical_signs,
        summary: summary.to_string(),
        recommendation: recommendation.to_string(),
    }
}
