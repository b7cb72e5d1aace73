use super::common::*;
use crate::assessment::domain::{
    AbiRange, Comorbidities, Etiology, ExudateLevel, InfectionSigns, PeriwoundSkin,
    QuestionnaireInput, TissueType,
};
use crate::assessment::{
    analyze, BodyRegion, ClinicalContext, CompressionSafety, GoalKind, InfectionSeverity,
    IschemiaSign, RulesEngine, StrategyCategory,
};

fn tissue_subsets() -> Vec<Vec<TissueType>> {
    let all = TissueType::ordered();
    (0..1u8 << all.len())
        .map(|mask| {
            all.iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, tissue)| *tissue)
                .collect()
        })
        .collect()
}

fn contexts() -> Vec<ClinicalContext> {
    let mut contexts = Vec::new();
    for region in BodyRegion::ordered() {
        for comorbidities in [
            Comorbidities::default(),
            diabetic(),
            Comorbidities {
                has_pad: Some(true),
                has_venous_disease: Some(true),
                ..Comorbidities::default()
            },
        ] {
            contexts.push(
                ClinicalContext::builder("p")
                    .region(region)
                    .comorbidities(comorbidities)
                    .build(),
            );
        }
    }
    contexts
}

#[test]
fn analysis_is_total_and_structurally_sound() {
    let contexts = contexts();
    for tissues in tissue_subsets() {
        for exudate in ExudateLevel::ordered() {
            for abi in AbiRange::ordered() {
                for pulses in [None, Some(true), Some(false)] {
                    let input = QuestionnaireInput {
                        wound_bed_types: tissues.iter().copied().collect(),
                        exudate,
                        abi,
                        pedal_pulses_palpable: pulses,
                        ..QuestionnaireInput::default()
                    };
                    for context in &contexts {
                        let report = analyze(&input, context);

                        let priorities: Vec<u8> =
                            report.treatment_goals.iter().map(|goal| goal.priority).collect();
                        let expected: Vec<u8> = (1..=priorities.len() as u8).collect();
                        assert_eq!(priorities, expected);
                        assert_eq!(
                            report.treatment_goals.last().map(|goal| goal.kind),
                            Some(GoalKind::MaintainHealingEnvironment)
                        );
                        assert_eq!(
                            report
                                .clinical_strategies
                                .iter()
                                .filter(|s| s.category == StrategyCategory::MoistureBalance)
                                .count(),
                            1
                        );
                        assert_eq!(report.red_flags.len(), report.urgent_actions.len());
                        assert!(report.diagnosis.ends_with(" phase"));
                        assert_eq!(report.perfusion_status.is_some(), context.is_lower_limb);
                        assert_eq!(
                            report.bone_status.is_some(),
                            (context.comorbidities.diabetes_present() && context.is_foot_location)
                                || tissues.contains(&TissueType::Necrosis)
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn every_infection_sign_combination_is_classified() {
    for mask in 0u8..128 {
        let signs = InfectionSigns {
            warmth: mask & 1 != 0,
            purulent_discharge: mask & 2 != 0,
            odor: mask & 4 != 0,
            spreading_redness: mask & 8 != 0,
            erythema_gt_2cm: mask & 16 != 0,
            fever: mask & 32 != 0,
            crepitus: mask & 64 != 0,
        };
        let report = analyze(&with_signs(granulating_wound(), signs), &context("knee"));
        let infection = &report.infection_assessment;

        assert_eq!(infection.signs.len(), mask.count_ones() as usize);
        if signs.fever {
            assert_eq!(infection.severity, InfectionSeverity::Systemic);
        }
        if mask == 0 {
            assert_eq!(infection.severity, InfectionSeverity::None);
        }
        assert_eq!(
            infection.requires_urgent_action,
            infection.severity == InfectionSeverity::Systemic
        );
    }
}

#[test]
fn identical_inputs_produce_identical_reports() {
    let input = QuestionnaireInput {
        has_deep_spaces: true,
        periwound_skin: PeriwoundSkin::Macerated,
        infection_signs: InfectionSigns {
            warmth: true,
            odor: true,
            ..InfectionSigns::default()
        },
        ..tissues(&[TissueType::Slough, TissueType::Granulation])
    };
    let context = context_with(
        "right_calf",
        Comorbidities {
            has_venous_disease: Some(true),
            is_on_anticoagulants: Some(true),
            ..Comorbidities::default()
        },
    );

    let engine = RulesEngine::new();
    let first = serde_json::to_string(&engine.analyze(&input, &context)).unwrap();
    let second = serde_json::to_string(&engine.analyze(&input, &context)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn clinical_signs_override_reassuring_abi() {
    let cases = [
        (
            QuestionnaireInput {
                pedal_pulses_palpable: Some(false),
                ..QuestionnaireInput::default()
            },
            IschemiaSign::AbsentPedalPulses,
        ),
        (
            QuestionnaireInput {
                cold_pale_foot: true,
                ..QuestionnaireInput::default()
            },
            IschemiaSign::ColdPaleFoot,
        ),
        (
            QuestionnaireInput {
                rest_pain_relieved_by_hanging: true,
                ..QuestionnaireInput::default()
            },
            IschemiaSign::RestPainRelievedByDependency,
        ),
    ];

    for (input, sign) in cases {
        let input = QuestionnaireInput {
            abi: AbiRange::AtLeast0_8,
            ..input
        };
        let report = analyze(&input, &context("left_foot"));
        let perfusion = report.perfusion_status.expect("lower limb");
        assert_eq!(perfusion.compression_safe, CompressionSafety::Contraindicated);
        assert_eq!(perfusion.clinical_signs, vec![sign]);
    }
}

#[test]
fn suggested_etiology_flows_through_unchanged() {
    for etiology in Etiology::ordered() {
        let context = ClinicalContext::builder("p")
            .location("sacrum")
            .comorbidities(diabetic())
            .suggested_etiology(Some(etiology))
            .build();
        let report = analyze(&granulating_wound(), &context);
        assert_eq!(report.etiology, etiology);
    }
}
