use super::super::diagnosis::HealingPhase;
use super::super::domain::Etiology;
use super::super::plan::ReviewTier;
use super::super::urgent::RedFlagKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedFlagView {
    pub kind: RedFlagKind,
    pub label: String,
    pub message: String,
}

/// Headline view of a report for list screens and notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub diagnosis: String,
    pub etiology: Etiology,
    pub etiology_label: String,
    pub healing_phase: HealingPhase,
    pub healing_phase_label: String,
    pub review_tier: ReviewTier,
    pub review_tier_label: String,
    pub initial_review: String,
    pub requires_escalation: bool,
    pub critical_strategies: usize,
    pub critical_barriers: usize,
    pub red_flags: Vec<RedFlagView>,
}
