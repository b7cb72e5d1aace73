use super::super::domain::{AbiRange, Etiology, QuestionnaireInput};
use super::super::rules::{InfectionAssessment, InfectionSeverity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewTier {
    Urgent,
    Priority,
    Routine,
}

impl ReviewTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent review",
            Self::Priority => "Priority review",
            Self::Routine => "Routine review",
        }
    }

    pub const fn initial_review(self) -> &'static str {
        match self {
            Self::Urgent => "24-48 hours (urgent)",
            Self::Priority => "3-5 days",
            Self::Routine => "7 days",
        }
    }

    pub const fn ongoing_frequency(self) -> &'static str {
        match self {
            Self::Urgent => "Daily until stable, then every 2-3 days",
            Self::Priority => "Twice weekly",
            Self::Routine => "Weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpPlan {
    pub tier: ReviewTier,
    pub initial_review: String,
    pub ongoing_frequency: String,
    pub progress_indicators: Vec<String>,
    pub escalation_criteria: Vec<String>,
}

const PROGRESS_INDICATORS: &[&str] = &[
    "Wound area reduced by at least 40% within 4 weeks",
    "Increasing proportion of granulation tissue",
    "Decreasing exudate volume",
    "Advancing epithelial edge",
    "Reduced pain",
];

const ESCALATION_CRITERIA: &[&str] = &[
    "Wound area increased or unchanged after 2 weeks",
    "New or spreading signs of infection",
    "Fever or systemic illness",
    "New necrosis or exposed structures",
    "Worsening pain or signs of ischemia",
];

pub fn build_follow_up(
    input: &QuestionnaireInput,
    etiology: Etiology,
    infection: &InfectionAssessment,
) -> FollowUpPlan {
    let tier = if infection.requires_urgent_action
        || input.has_exposed_bone
        || input.abi == AbiRange::Below0_5
    {
        ReviewTier::Urgent
    } else if infection.severity == InfectionSeverity::Local || etiology == Etiology::Arterial {
        ReviewTier::Priority
    } else {
        ReviewTier::Routine
    };

    FollowUpPlan {
        tier,
        initial_review: tier.initial_review().to_string(),
        ongoing_frequency: tier.ongoing_frequency().to_string(),
        progress_indicators: PROGRESS_INDICATORS.iter().map(|s| s.to_string()).collect(),
        escalation_criteria: ESCALATION_CRITERIA.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::rules::assess_infection;

    fn tier_for(input: &QuestionnaireInput, etiology: Etiology) -> ReviewTier {
        build_follow_up(input, etiology, &assess_infection(input)).tier
    }

    #[test]
    fn exposed_bone_and_critical_abi_are_urgent() {
        let bone = QuestionnaireInput {
            has_exposed_bone: true,
            ..QuestionnaireInput::default()
        };
        assert_eq!(tier_for(&bone, Etiology::Mixed), ReviewTier::Urgent);

        let ischemic = QuestionnaireInput {
            abi: AbiRange::Below0_5,
            ..QuestionnaireInput::default()
        };
        assert_eq!(tier_for(&ischemic, Etiology::Venous), ReviewTier::Urgent);
    }

    #[test]
    fn probe_positive_alone_does_not_shorten_review() {
        let probe = QuestionnaireInput {
            probe_to_bone_positive: true,
            ..QuestionnaireInput::default()
        };
        assert_eq!(tier_for(&probe, Etiology::Pressure), ReviewTier::Routine);
    }

    #[test]
    fn arterial_wounds_get_priority_review() {
        let plan = build_follow_up(
            &QuestionnaireInput::default(),
            Etiology::Arterial,
            &assess_infection(&QuestionnaireInput::default()),
        );
        assert_eq!(plan.tier, ReviewTier::Priority);
        assert_eq!(plan.initial_review, "3-5 days");
        assert_eq!(plan.progress_indicators.len(), PROGRESS_INDICATORS.len());
    }
}
