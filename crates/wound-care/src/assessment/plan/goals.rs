use super::super::domain::{Etiology, QuestionnaireInput, TissueType};
use super::super::rules::{classify_infection, InfectionSeverity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    ControlSystemicInfection,
    RuleOutOsteomyelitis,
    CleanWoundBed,
    ManageVenousHypertension,
    RestorePerfusion,
    OffloadDiabeticFoot,
    RelievePressure,
    MaintainHealingEnvironment,
}

impl GoalKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ControlSystemicInfection => "Control systemic infection",
            Self::RuleOutOsteomyelitis => "Rule out osteomyelitis",
            Self::CleanWoundBed => "Achieve a clean, vascularized wound bed",
            Self::ManageVenousHypertension => "Manage venous hypertension",
            Self::RestorePerfusion => "Restore or optimize limb perfusion",
            Self::OffloadDiabeticFoot => "Eliminate pressure and shear on the diabetic foot",
            Self::RelievePressure => "Relieve pressure on the affected area",
            Self::MaintainHealingEnvironment => "Maintain an optimal wound healing environment",
        }
    }

    const fn rationale(self) -> &'static str {
        match self {
            Self::ControlSystemicInfection => {
                "Systemic infection threatens limb and life and blocks all healing"
            }
            Self::RuleOutOsteomyelitis => {
                "Bone contact raises a high probability of osteomyelitis"
            }
            Self::CleanWoundBed => "Devitalized tissue harbours bacteria and prevents granulation",
            Self::ManageVenousHypertension => {
                "Sustained venous pressure is the driver of venous ulceration"
            }
            Self::RestorePerfusion => "Healing cannot proceed without adequate arterial inflow",
            Self::OffloadDiabeticFoot => {
                "Repetitive pressure on a neuropathic foot prevents closure"
            }
            Self::RelievePressure => "Unrelieved pressure causes ongoing tissue ischemia",
            Self::MaintainHealingEnvironment => {
                "Moisture balance, warmth and protection support every healing phase"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentGoal {
    pub priority: u8,
    pub kind: GoalKind,
    pub goal: String,
    pub rationale: String,
}

#[derive(Default)]
struct GoalList(Vec<TreatmentGoal>);

impl GoalList {
    fn push(&mut self, kind: GoalKind) {
        let priority = self.0.len() as u8 + 1;
        self.0.push(TreatmentGoal {
            priority,
            kind,
            goal: kind.label().to_string(),
            rationale: kind.rationale().to_string(),
        });
    }
}

pub fn build_goals(input: &QuestionnaireInput, etiology: Etiology) -> Vec<TreatmentGoal> {
    let mut goals = GoalList::default();

    if classify_infection(&input.infection_signs) == InfectionSeverity::Systemic {
        goals.push(GoalKind::ControlSystemicInfection);
    }
    if input.bone_involved() {
        goals.push(GoalKind::RuleOutOsteomyelitis);
    }
    if input.has_tissue(TissueType::Necrosis) || input.has_tissue(TissueType::Slough) {
        goals.push(GoalKind::CleanWoundBed);
    }

    match etiology {
        Etiology::Venous => goals.push(GoalKind::ManageVenousHypertension),
        Etiology::Arterial => goals.push(GoalKind::RestorePerfusion),
        Etiology::DiabeticFoot => goals.push(GoalKind::OffloadDiabeticFoot),
        Etiology::Pressure => goals.push(GoalKind::RelievePressure),
        Etiology::Traumatic | Etiology::Surgical | Etiology::Mixed | Etiology::Other => {}
    }

    goals.push(GoalKind::MaintainHealingEnvironment);
    goals.0
}
