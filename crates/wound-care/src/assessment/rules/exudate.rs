use super::super::domain::{ExudateLevel, PeriwoundSkin};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExudateAssessment {
    pub level: ExudateLevel,
    pub description: String,
    pub management: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriwoundAssessment {
    pub condition: PeriwoundSkin,
    pub description: String,
    pub management: String,
}

pub fn assess_exudate(level: ExudateLevel) -> ExudateAssessment {
    let (description, management) = match level {
        ExudateLevel::Dry => (
            "Dry wound bed; insufficient moisture for cell migration",
            "Donate moisture with a hydrogel or hydrocolloid dressing",
        ),
        ExudateLevel::Low => (
            "Low exudate; moisture level close to optimal",
            "Maintain moisture with a film, thin foam or hydrocolloid dressing",
        ),
        ExudateLevel::Moderate => (
            "Moderate exudate; moisture balance requires active management",
            "Absorb excess fluid with a foam or alginate dressing",
        ),
        ExudateLevel::High => (
            "High exudate; risk of periwound maceration and delayed healing",
            "Use superabsorbent dressings, increase change frequency and investigate the cause",
        ),
        ExudateLevel::Unknown => (
            "Exudate level needs assessment",
            "Record exudate volume and type at the next dressing change",
        ),
    };

    ExudateAssessment {
        level,
        description: description.to_string(),
        management: management.to_string(),
    }
}

pub fn assess_periwound(condition: PeriwoundSkin) -> PeriwoundAssessment {
    let (description, management) = match condition {
        PeriwoundSkin::Normal => (
            "Periwound skin intact and healthy",
            "Continue routine skin care and moisturise surrounding skin",
        ),
        PeriwoundSkin::Macerated => (
            "Periwound skin macerated from excess moisture",
            "Apply a barrier film and improve dressing absorbency",
        ),
        PeriwoundSkin::Fragile => (
            "Periwound skin fragile and at risk of stripping",
            "Use silicone-based atraumatic dressings and avoid adhesive tapes",
        ),
        PeriwoundSkin::Unknown => (
            "Periwound skin needs assessment",
            "Inspect and document the surrounding skin at the next review",
        ),
    };

    PeriwoundAssessment {
        condition,
        description: description.to_string(),
        management: management.to_string(),
    }
}
