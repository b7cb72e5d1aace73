use super::super::diagnosis::HealingPhase;
use super::super::domain::Etiology;
use super::super::plan::{
    BarrierSeverity, ClinicalStrategy, FollowUpPlan, HealingBarrier, PatientConsideration,
    StrategyPriority, TreatmentGoal,
};
use super::super::rules::{
    BoneStatus, ExudateAssessment, InfectionAssessment, PerfusionStatus, PeriwoundAssessment,
    WoundBedAssessment,
};
use super::super::urgent::{RedFlag, UrgentAction};
use super::views::{RedFlagView, ReportSummary};
use serde::{Deserialize, Serialize};

/// Complete output of one analysis. Built fresh per call and never mutated after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalReport {
    pub diagnosis: String,
    pub etiology: Etiology,
    pub healing_phase: HealingPhase,
    pub wound_bed_assessment: WoundBedAssessment,
    pub exudate_assessment: ExudateAssessment,
    pub infection_assessment: InfectionAssessment,
    pub periwound_assessment: PeriwoundAssessment,
    pub perfusion_status: Option<PerfusionStatus>,
    pub bone_status: Option<BoneStatus>,
    pub treatment_goals: Vec<TreatmentGoal>,
    pub clinical_strategies: Vec<ClinicalStrategy>,
    pub patient_considerations: Vec<PatientConsideration>,
    pub healing_barriers: Vec<HealingBarrier>,
    pub follow_up_plan: FollowUpPlan,
    pub red_flags: Vec<RedFlag>,
    pub urgent_actions: Vec<UrgentAction>,
}

impl ClinicalReport {
    pub fn requires_escalation(&self) -> bool {
        !self.red_flags.is_empty()
    }

    pub fn summary(&self) -> ReportSummary {
        let critical_strategies = self
            .clinical_strategies
            .iter()
            .filter(|strategy| strategy.priority == StrategyPriority::Critical)
            .count();
        let critical_barriers = self
            .healing_barriers
            .iter()
            .filter(|barrier| barrier.severity == BarrierSeverity::Critical)
            .count();

        ReportSummary {
            diagnosis: self.diagnosis.clone(),
            etiology: self.etiology,
            etiology_label: self.etiology.label().to_string(),
            healing_phase: self.healing_phase,
            healing_phase_label: self.healing_phase.label().to_string(),
            review_tier: self.follow_up_plan.tier,
            review_tier_label: self.follow_up_plan.tier.label().to_string(),
            initial_review: self.follow_up_plan.initial_review.clone(),
            requires_escalation: self.requires_escalation(),
            critical_strategies,
            critical_barriers,
            red_flags: self
                .red_flags
                .iter()
                .map(|flag| RedFlagView {
                    kind: flag.kind,
                    label: flag.kind.label().to_string(),
                    message: flag.message.clone(),
                })
                .collect(),
        }
    }
}
