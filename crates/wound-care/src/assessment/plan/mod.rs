//! Care-plan synthesis. Ordering comes from append order, never from a sort.

mod considerations;
mod follow_up;
mod goals;
mod strategies;

pub use considerations::{
    build_patient_considerations, identify_barriers, BarrierKind, BarrierSeverity,
    ComorbidityFactor, HealingBarrier, PatientConsideration,
};
pub use follow_up::{build_follow_up, FollowUpPlan, ReviewTier};
pub use goals::{build_goals, GoalKind, TreatmentGoal};
pub use strategies::{build_strategies, ClinicalStrategy, StrategyCategory, StrategyPriority};
