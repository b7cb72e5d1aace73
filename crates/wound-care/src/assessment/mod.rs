//! Deterministic wound-assessment rules engine.
//!
//! [`RulesEngine::analyze`] turns a [`QuestionnaireInput`] and a [`ClinicalContext`] into a
//! [`ClinicalReport`]. Every sub-assessment is a pure function; the engine holds no state
//! and performs no I/O, so it is safe to share across threads without coordination.

pub mod diagnosis;
pub mod domain;
pub mod intake;
pub mod location;
pub mod plan;
pub mod report;
pub mod router;
pub mod rules;
pub mod urgent;

#[cfg(test)]
mod tests;

pub use diagnosis::{compose_diagnosis, HealingPhase};
pub use domain::{
    AbiRange, ClinicalContext, ClinicalContextBuilder, Comorbidities, DeepSpaceType, Etiology,
    ExudateLevel, InfectionSigns, PatientId, PeriwoundSkin, QuestionnaireInput, TissueType,
};
pub use intake::{
    AssessmentDocument, AssessmentIntake, IntakeError, PreparedAssessment, RawContext,
    RawQuestionnaire,
};
pub use location::BodyRegion;
pub use plan::{
    BarrierKind, BarrierSeverity, ClinicalStrategy, ComorbidityFactor, FollowUpPlan, GoalKind,
    HealingBarrier, PatientConsideration, ReviewTier, StrategyCategory, StrategyPriority,
    TreatmentGoal,
};
pub use report::{ClinicalReport, RedFlagView, ReportSummary};
pub use router::{
    assessment_router, assessment_router_with, AssessmentResponse, ASSESSMENT_PATH,
};
pub use rules::{
    BoneStatus, CompressionSafety, ConcernLevel, DominantTissue, ExudateAssessment,
    InfectionAssessment, InfectionSeverity, InfectionSign, IschemiaSign, PerfusionLevel,
    PerfusionStatus, PeriwoundAssessment, WoundBedAssessment,
};
pub use urgent::{RedFlag, RedFlagKind, UrgentAction};

use tracing::debug;
use urgent::UrgentFindings;

/// Stateless engine composing the sub-assessments into a report.
#[derive(Debug, Clone, Copy, Default)]
pub struct RulesEngine;

impl RulesEngine {
    pub const fn new() -> Self {
        Self
    }

    pub fn analyze(&self, input: &QuestionnaireInput, context: &ClinicalContext) -> ClinicalReport {
        let etiology = rules::resolve_etiology(context);
        let wound_bed_assessment = rules::assess_wound_bed(input);
        let exudate_assessment = rules::assess_exudate(input.exudate);
        let infection_assessment = rules::assess_infection(input);
        let periwound_assessment = rules::assess_periwound(input.periwound_skin);
        let perfusion_status = context
            .is_lower_limb
            .then(|| rules::assess_perfusion(input));
        let bone_status = rules::bone_assessment_applies(input, context)
            .then(|| rules::assess_bone(input));

        let healing_phase = HealingPhase::from(wound_bed_assessment.dominant_tissue);
        let diagnosis = compose_diagnosis(
            etiology,
            infection_assessment.severity,
            healing_phase,
            input.abi,
        );

        let treatment_goals = plan::build_goals(input, etiology);
        let clinical_strategies = plan::build_strategies(
            input,
            etiology,
            &wound_bed_assessment,
            &infection_assessment,
            perfusion_status.as_ref(),
        );
        let patient_considerations = plan::build_patient_considerations(context);
        let healing_barriers =
            plan::identify_barriers(input, context, etiology, infection_assessment.severity);
        let follow_up_plan = plan::build_follow_up(input, etiology, &infection_assessment);

        let UrgentFindings {
            red_flags,
            urgent_actions,
        } = urgent::identify_urgent(
            input,
            &infection_assessment,
            perfusion_status.as_ref(),
            bone_status.as_ref(),
        );

        debug!(
            patient_id = context.patient_id.0.as_str(),
            etiology = etiology.label(),
            infection = infection_assessment.severity.label(),
            tier = follow_up_plan.tier.label(),
            red_flags = red_flags.len(),
            "wound assessment analyzed"
        );

        ClinicalReport {
            diagnosis,
            etiology,
            healing_phase,
            wound_bed_assessment,
            exudate_assessment,
            infection_assessment,
            periwound_assessment,
            perfusion_status,
            bone_status,
            treatment_goals,
            clinical_strategies,
            patient_considerations,
            healing_barriers,
            follow_up_plan,
            red_flags,
            urgent_actions,
        }
    }
}

/// Convenience entry point equivalent to `RulesEngine::new().analyze(input, context)`.
pub fn analyze(input: &QuestionnaireInput, context: &ClinicalContext) -> ClinicalReport {
    RulesEngine::new().analyze(input, context)
}
