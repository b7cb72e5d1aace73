//! Independent sub-assessments over the questionnaire. Each is a pure function of its
//! inputs.

mod bone;
mod etiology;
mod exudate;
mod infection;
mod perfusion;
mod wound_bed;

pub use bone::{assess_bone, bone_assessment_applies, BoneStatus};
pub use etiology::resolve_etiology;
pub use exudate::{assess_exudate, assess_periwound, ExudateAssessment, PeriwoundAssessment};
pub use infection::{
    assess_infection, classify_infection, InfectionAssessment, InfectionSeverity, InfectionSign,
};
pub use perfusion::{
    assess_perfusion, CompressionSafety, IschemiaSign, PerfusionLevel, PerfusionStatus,
};
pub use wound_bed::{assess_wound_bed, ConcernLevel, DominantTissue, WoundBedAssessment};
