use super::super::domain::{
    DeepSpaceType, Etiology, ExudateLevel, PeriwoundSkin, QuestionnaireInput,
};
use super::super::rules::{
    CompressionSafety, DominantTissue, InfectionAssessment, InfectionSeverity, PerfusionStatus,
    WoundBedAssessment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyCategory {
    Debridement,
    MoistureBalance,
    InfectionControl,
    Perfusion,
    Offloading,
    Compression,
    WoundProtection,
    PatientEducation,
}

impl StrategyCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debridement => "Debridement",
            Self::MoistureBalance => "Moisture balance",
            Self::InfectionControl => "Infection control",
            Self::Perfusion => "Perfusion",
            Self::Offloading => "Offloading",
            Self::Compression => "Compression",
            Self::WoundProtection => "Wound protection",
            Self::PatientEducation => "Patient education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyPriority {
    Critical,
    High,
    Standard,
}

impl StrategyPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Standard => "Standard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalStrategy {
    pub category: StrategyCategory,
    pub priority: StrategyPriority,
    pub strategy: String,
    pub rationale: String,
}

#[derive(Default)]
struct StrategyList(Vec<ClinicalStrategy>);

impl StrategyList {
    fn push(
        &mut self,
        category: StrategyCategory,
        priority: StrategyPriority,
        strategy: impl Into<String>,
        rationale: &str,
    ) {
        self.0.push(ClinicalStrategy {
            category,
            priority,
            strategy: strategy.into(),
            rationale: rationale.to_string(),
        });
    }
}

/// Strategies in clinical order: wound bed, moisture, infection, etiology, then protection.
///
/// `perfusion` is only consulted for venous compression; when it is absent compression
/// is treated as contraindicated.
pub fn build_strategies(
    input: &QuestionnaireInput,
    etiology: Etiology,
    wound_bed: &WoundBedAssessment,
    infection: &InfectionAssessment,
    perfusion: Option<&PerfusionStatus>,
) -> Vec<ClinicalStrategy> {
    use StrategyCategory as Category;
    use StrategyPriority as Priority;

    let mut strategies = StrategyList::default();

    match wound_bed.dominant_tissue {
        DominantTissue::Necrosis => strategies.push(
            Category::Debridement,
            Priority::High,
            "Debride necrotic tissue (sharp, enzymatic or autolytic per setting)",
            "Necrosis is a barrier to healing and a focus for infection",
        ),
        DominantTissue::Slough => strategies.push(
            Category::Debridement,
            Priority::Standard,
            "Remove slough by autolytic or mechanical debridement",
            "Slough delays granulation and increases bacterial burden",
        ),
        DominantTissue::Granulation
        | DominantTissue::Epithelializing
        | DominantTissue::Unknown => {}
    }

    match input.exudate {
        ExudateLevel::Dry => strategies.push(
            Category::MoistureBalance,
            Priority::Standard,
            "Hydrate the wound bed with hydrogel and an occlusive cover",
            "A dry bed slows epithelial migration",
        ),
        ExudateLevel::High => strategies.push(
            Category::MoistureBalance,
            Priority::High,
            "Manage heavy exudate with superabsorbent dressings and frequent changes",
            "Excess exudate macerates skin and carries proteases that stall healing",
        ),
        ExudateLevel::Low | ExudateLevel::Moderate | ExudateLevel::Unknown => strategies.push(
            Category::MoistureBalance,
            Priority::Standard,
            "Maintain moisture balance with a dressing matched to exudate volume",
            "A moist, not wet, environment supports cell migration",
        ),
    }

    match infection.severity {
        InfectionSeverity::Systemic => strategies.push(
            Category::InfectionControl,
            Priority::Critical,
            "Urgent systemic antibiotics after cultures; same-day medical review",
            "Spreading infection requires systemic treatment",
        ),
        InfectionSeverity::Local => strategies.push(
            Category::InfectionControl,
            Priority::High,
            "Topical antimicrobial dressing (silver, iodine or PHMB) for two weeks",
            "Local infection responds to reduced bioburden at the wound surface",
        ),
        InfectionSeverity::None => {}
    }

    match etiology {
        Etiology::Venous => {
            let safety = perfusion
                .map(|status| status.compression_safe)
                .unwrap_or(CompressionSafety::Contraindicated);
            match safety {
                CompressionSafety::Full => strategies.push(
                    Category::Compression,
                    Priority::High,
                    "Apply full therapeutic compression (40 mmHg)",
                    "Compression reverses venous hypertension, the driver of venous ulceration",
                ),
                CompressionSafety::Reduced => strategies.push(
                    Category::Compression,
                    Priority::Standard,
                    "Apply reduced compression (20-30 mmHg) with caution and monitor the limb",
                    "Arterial perfusion is reduced; full compression risks ischemic injury",
                ),
                CompressionSafety::Contraindicated => strategies.push(
                    Category::Compression,
                    Priority::Critical,
                    "Do not apply compression until arterial perfusion is confirmed",
                    "Compression on an ischemic or unassessed limb can cause necrosis",
                ),
            }
            strategies.push(
                Category::PatientEducation,
                Priority::Standard,
                "Teach leg elevation above heart level and calf-muscle exercises",
                "Elevation and ankle movement support venous return",
            );
        }
        Etiology::Arterial => {
            strategies.push(
                Category::Perfusion,
                Priority::Critical,
                "Urgent vascular surgery referral for revascularization assessment",
                "Arterial ulcers do not heal without restored inflow",
            );
            strategies.push(
                Category::Debridement,
                Priority::Critical,
                "Avoid aggressive debridement until perfusion is restored; keep dry necrosis dry",
                "Debriding an ischemic wound can enlarge it",
            );
        }
        Etiology::DiabeticFoot => {
            strategies.push(
                Category::Offloading,
                Priority::Critical,
                "Complete offloading with a total contact cast or removable walker",
                "Offloading is the single most important intervention for plantar ulcers",
            );
            strategies.push(
                Category::PatientEducation,
                Priority::High,
                "Glycemic control education and daily foot inspection",
                "Hyperglycemia impairs immunity and tissue repair",
            );
            if input.bone_involved() {
                strategies.push(
                    Category::InfectionControl,
                    Priority::Critical,
                    "Urgent X-ray or MRI to evaluate for osteomyelitis",
                    "Probe-to-bone contact in a diabetic foot strongly predicts osteomyelitis",
                );
            }
        }
        Etiology::Pressure => {
            strategies.push(
                Category::Offloading,
                Priority::Critical,
                "Pressure redistribution surface and complete offloading of the area",
                "Healing requires removal of the causative pressure",
            );
            strategies.push(
                Category::PatientEducation,
                Priority::High,
                "Repositioning schedule at least every two hours and skin checks",
                "Frequent repositioning prevents recurrence and new injuries",
            );
        }
        Etiology::Traumatic | Etiology::Surgical | Etiology::Mixed | Etiology::Other => {}
    }

    if input.has_deep_spaces {
        strategies.push(
            Category::WoundProtection,
            Priority::High,
            format!(
                "Loosely pack {} to eliminate dead space",
                deep_space_phrase(input)
            ),
            "Dead space collects exudate and allows abscess formation",
        );
    }

    if input.periwound_skin == PeriwoundSkin::Macerated || input.exudate == ExudateLevel::High {
        strategies.push(
            Category::WoundProtection,
            Priority::Standard,
            "Protect periwound skin with barrier film or cream",
            "Barrier products prevent moisture damage to surrounding skin",
        );
    }

    strategies.0
}

fn deep_space_phrase(input: &QuestionnaireInput) -> String {
    let labels: Vec<&str> = input
        .deep_space_types
        .iter()
        .map(|space| DeepSpaceType::label(*space))
        .collect();
    match labels.as_slice() {
        [] => "cavities".to_string(),
        [only] => only.to_string(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{AbiRange, TissueType};
    use crate::assessment::rules::{assess_infection, assess_perfusion, assess_wound_bed};

    fn strategies_for(
        input: &QuestionnaireInput,
        etiology: Etiology,
        lower_limb: bool,
    ) -> Vec<ClinicalStrategy> {
        let perfusion = lower_limb.then(|| assess_perfusion(input));
        build_strategies(
            input,
            etiology,
            &assess_wound_bed(input),
            &assess_infection(input),
            perfusion.as_ref(),
        )
    }

    fn plan_of(strategies: &[ClinicalStrategy]) -> Vec<(StrategyCategory, StrategyPriority)> {
        strategies
            .iter()
            .map(|strategy| (strategy.category, strategy.priority))
            .collect()
    }

    #[test]
    fn arterial_wounds_get_vascular_referral_and_guarded_debridement() {
        let input = QuestionnaireInput {
            abi: AbiRange::Below0_5,
            pedal_pulses_palpable: Some(false),
            ..QuestionnaireInput::default()
        };
        let strategies = strategies_for(&input, Etiology::Arterial, true);

        assert_eq!(
            plan_of(&strategies),
            vec![
                (StrategyCategory::MoistureBalance, StrategyPriority::Standard),
                (StrategyCategory::Perfusion, StrategyPriority::Critical),
                (StrategyCategory::Debridement, StrategyPriority::Critical),
            ]
        );
        assert!(strategies[1].strategy.contains("vascular surgery referral"));
        assert!(strategies[2].strategy.starts_with("Avoid aggressive debridement"));
    }

    #[test]
    fn pressure_injuries_get_redistribution_then_repositioning() {
        let strategies = strategies_for(&QuestionnaireInput::default(), Etiology::Pressure, false);

        assert_eq!(
            plan_of(&strategies),
            vec![
                (StrategyCategory::MoistureBalance, StrategyPriority::Standard),
                (StrategyCategory::Offloading, StrategyPriority::Critical),
                (StrategyCategory::PatientEducation, StrategyPriority::High),
            ]
        );
        assert!(strategies[1].strategy.contains("redistribution"));
        assert!(strategies[2].strategy.contains("Repositioning"));
    }

    #[test]
    fn slough_only_bed_gets_standard_debridement_first() {
        let input = QuestionnaireInput {
            wound_bed_types: [TissueType::Slough].into_iter().collect(),
            ..QuestionnaireInput::default()
        };
        let strategies = strategies_for(&input, Etiology::Mixed, false);

        assert_eq!(
            plan_of(&strategies),
            vec![
                (StrategyCategory::Debridement, StrategyPriority::Standard),
                (StrategyCategory::MoistureBalance, StrategyPriority::Standard),
            ]
        );
        assert!(strategies[0].strategy.contains("slough"));
    }

    #[test]
    fn exactly_one_moisture_strategy() {
        for exudate in ExudateLevel::ordered() {
            let input = QuestionnaireInput {
                exudate,
                ..QuestionnaireInput::default()
            };
            let count = strategies_for(&input, Etiology::Mixed, false)
                .iter()
                .filter(|strategy| strategy.category == StrategyCategory::MoistureBalance)
                .count();
            assert_eq!(count, 1, "{exudate:?}");
        }
    }

    #[test]
    fn venous_compression_follows_perfusion() {
        let expectations = [
            (AbiRange::AtLeast0_8, StrategyPriority::High),
            (AbiRange::From0_5To0_79, StrategyPriority::Standard),
            (AbiRange::Below0_5, StrategyPriority::Critical),
            (AbiRange::Unknown, StrategyPriority::Critical),
        ];
        for (abi, expected) in expectations {
            let input = QuestionnaireInput {
                abi,
                ..QuestionnaireInput::default()
            };
            let strategies = strategies_for(&input, Etiology::Venous, true);
            let compression = strategies
                .iter()
                .find(|strategy| strategy.category == StrategyCategory::Compression)
                .expect("compression strategy");
            assert_eq!(compression.priority, expected, "{abi:?}");
            assert_eq!(
                strategies.last().map(|strategy| strategy.category),
                Some(StrategyCategory::PatientEducation)
            );
        }
    }

    #[test]
    fn deep_spaces_are_named_in_packing_strategy() {
        let input = QuestionnaireInput {
            has_deep_spaces: true,
            deep_space_types: [DeepSpaceType::Tunnel, DeepSpaceType::Cavity]
                .into_iter()
                .collect(),
            exudate: ExudateLevel::High,
            ..QuestionnaireInput::default()
        };
        let strategies = strategies_for(&input, Etiology::Other, false);
        let protection: Vec<_> = strategies
            .iter()
            .filter(|strategy| strategy.category == StrategyCategory::WoundProtection)
            .collect();
        assert_eq!(protection.len(), 2);
        assert_eq!(protection[0].priority, StrategyPriority::High);
        assert!(protection[0].strategy.contains("cavity and tunnelling"));
        assert_eq!(protection[1].priority, StrategyPriority::Standard);
    }
}
