use wound_care::assessment::ClinicalReport;

pub(crate) fn render_report(report: &ClinicalReport) {
    let summary = report.summary();
    println!("Diagnosis: {}", report.diagnosis);
    println!(
        "Etiology: {} | Healing phase: {}",
        summary.etiology_label, summary.healing_phase_label
    );

    let wound_bed = &report.wound_bed_assessment;
    println!(
        "Wound bed: {} dominant, {} concern{}",
        wound_bed.dominant_tissue.label(),
        wound_bed.concern_level.label(),
        if wound_bed.is_mixed { " (mixed bed)" } else { "" }
    );
    println!("  {}", wound_bed.summary);
    println!(
        "Exudate: {} | Periwound: {}",
        report.exudate_assessment.description, report.periwound_assessment.description
    );

    let infection = &report.infection_assessment;
    if infection.signs.is_empty() {
        println!("Infection: {}", infection.severity.label());
    } else {
        let signs: Vec<&str> = infection.signs.iter().map(|sign| sign.label()).collect();
        println!(
            "Infection: {} ({})",
            infection.severity.label(),
            signs.join(", ")
        );
    }

    match &report.perfusion_status {
        Some(perfusion) => println!(
            "Perfusion: {} | {} | {}",
            perfusion.level.label(),
            perfusion.abi.label(),
            perfusion.compression_safe.label()
        ),
        None => println!("Perfusion: not assessed (not a lower-limb wound)"),
    }
    if let Some(bone) = &report.bone_status {
        println!("Bone: {}", bone.summary);
    }

    println!("\nTreatment goals");
    for goal in &report.treatment_goals {
        println!("  {}. {} ({})", goal.priority, goal.goal, goal.rationale);
    }

    println!("\nClinical strategies");
    for strategy in &report.clinical_strategies {
        println!(
            "  [{}] {}: {}",
            strategy.priority.label(),
            strategy.category.label(),
            strategy.strategy
        );
    }

    if !report.patient_considerations.is_empty() {
        println!("\nPatient considerations");
        for consideration in &report.patient_considerations {
            println!(
                "  - {}: {} -> {}",
                consideration.factor.label(),
                consideration.impact,
                consideration.action
            );
        }
    }

    if report.healing_barriers.is_empty() {
        println!("\nHealing barriers: none identified");
    } else {
        println!("\nHealing barriers");
        for barrier in &report.healing_barriers {
            println!(
                "  - [{}] {}",
                barrier.severity.label(),
                barrier.kind.label()
            );
        }
    }

    let follow_up = &report.follow_up_plan;
    println!(
        "\nFollow-up: {} | first review in {} | then {}",
        follow_up.tier.label(),
        follow_up.initial_review,
        follow_up.ongoing_frequency
    );

    if report.red_flags.is_empty() {
        println!("Red flags: none");
    } else {
        println!("RED FLAGS");
        for (flag, action) in report.red_flags.iter().zip(&report.urgent_actions) {
            println!("  ! {}", flag.message);
            println!("    -> {}", action.action);
        }
    }
}
