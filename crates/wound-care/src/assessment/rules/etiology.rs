use super::super::domain::{ClinicalContext, Etiology};
use tracing::trace;

/// Resolve the wound etiology; a supplied suggestion always wins.
pub fn resolve_etiology(context: &ClinicalContext) -> Etiology {
    if let Some(suggested) = context.suggested_etiology {
        trace!(etiology = suggested.label(), "using suggested etiology");
        return suggested;
    }

    let comorbidities = &context.comorbidities;
    let inferred = if comorbidities.diabetes_present() && context.is_foot_location {
        Etiology::DiabeticFoot
    } else if comorbidities.pad_present() {
        Etiology::Arterial
    } else if comorbidities.venous_disease_present() {
        Etiology::Venous
    } else if comorbidities.mobility_impairment_present() {
        Etiology::Pressure
    } else {
        Etiology::Mixed
    };

    trace!(etiology = inferred.label(), "inferred etiology from context");
    inferred
}
