use super::domain::{AbiRange, Etiology};
use super::rules::{DominantTissue, InfectionSeverity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealingPhase {
    Necrotic,
    Inflammatory,
    Proliferative,
    Maturation,
    Undetermined,
}

impl HealingPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Necrotic => "Necrotic (non-healing)",
            Self::Inflammatory => "Inflammatory",
            Self::Proliferative => "Proliferative (healing)",
            Self::Maturation => "Maturation (final healing)",
            Self::Undetermined => "Undetermined",
        }
    }
}

impl From<DominantTissue> for HealingPhase {
    fn from(tissue: DominantTissue) -> Self {
        match tissue {
            DominantTissue::Necrosis => Self::Necrotic,
            DominantTissue::Slough => Self::Inflammatory,
            DominantTissue::Granulation => Self::Proliferative,
            DominantTissue::Epithelializing => Self::Maturation,
            DominantTissue::Unknown => Self::Undetermined,
        }
    }
}

fn base_phrase(etiology: Etiology, abi: AbiRange) -> &'static str {
    match etiology {
        Etiology::Venous => "Venous leg ulcer",
        Etiology::Arterial if abi == AbiRange::Below0_5 => {
            "Arterial ulcer with critical limb ischemia"
        }
        Etiology::Arterial => "Arterial ulcer",
        Etiology::DiabeticFoot => "Diabetic foot ulcer",
        Etiology::Pressure => "Pressure injury",
        Etiology::Mixed => "Mixed etiology wound",
        Etiology::Traumatic => "Traumatic wound",
        Etiology::Surgical => "Surgical wound",
        Etiology::Other => "Chronic wound",
    }
}

/// `[infection prefix] + etiology phrase + " in <phase> phase"`.
pub fn compose_diagnosis(
    etiology: Etiology,
    infection: InfectionSeverity,
    phase: HealingPhase,
    abi: AbiRange,
) -> String {
    let base = base_phrase(etiology, abi);
    let lead = match infection {
        InfectionSeverity::Systemic => format!("Infected {}", lowercase_first(base)),
        InfectionSeverity::Local => format!("Locally infected {}", lowercase_first(base)),
        InfectionSeverity::None => base.to_string(),
    };
    format!("{lead} in {} phase", phase.label().to_lowercase())
}

fn lowercase_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_diagnosis_keeps_capitalised_base() {
        assert_eq!(
            compose_diagnosis(
                Etiology::Venous,
                InfectionSeverity::None,
                HealingPhase::Proliferative,
                AbiRange::AtLeast0_8
            ),
            "Venous leg ulcer in proliferative (healing) phase"
        );
    }

    #[test]
    fn infection_prefix_lowercases_base() {
        assert_eq!(
            compose_diagnosis(
                Etiology::DiabeticFoot,
                InfectionSeverity::Systemic,
                HealingPhase::Necrotic,
                AbiRange::Unknown
            ),
            "Infected diabetic foot ulcer in necrotic (non-healing) phase"
        );
        assert_eq!(
            compose_diagnosis(
                Etiology::Pressure,
                InfectionSeverity::Local,
                HealingPhase::Inflammatory,
                AbiRange::Unknown
            ),
            "Locally infected pressure injury in inflammatory phase"
        );
    }

    #[test]
    fn critical_abi_changes_arterial_phrase_only() {
        assert_eq!(
            compose_diagnosis(
                Etiology::Arterial,
                InfectionSeverity::None,
                HealingPhase::Undetermined,
                AbiRange::Below0_5
            ),
            "Arterial ulcer with critical limb ischemia in undetermined phase"
        );
        assert!(compose_diagnosis(
            Etiology::Venous,
            InfectionSeverity::None,
            HealingPhase::Undetermined,
            AbiRange::Below0_5
        )
        .starts_with("Venous leg ulcer in"));
    }
}
