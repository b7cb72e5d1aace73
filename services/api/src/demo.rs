use crate::infra::init_cli_telemetry;
use crate::render::render_report;
use clap::{Args, ValueEnum};
use wound_care::assessment::{
    AbiRange, ClinicalContext, Comorbidities, ExudateLevel, InfectionSigns, PeriwoundSkin,
    QuestionnaireInput, RulesEngine, TissueType,
};
use wound_care::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Run a single scenario instead of the full catalogue
    #[arg(long, value_enum)]
    pub(crate) scenario: Option<DemoScenario>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoScenario {
    CleanGranulating,
    SystemicInfection,
    DiabeticOsteomyelitis,
    CriticalLimbIschemia,
    VenousCompression,
    UndeterminedWoundBed,
}

impl DemoScenario {
    const fn ordered() -> [Self; 6] {
        [
            Self::CleanGranulating,
            Self::SystemicInfection,
            Self::DiabeticOsteomyelitis,
            Self::CriticalLimbIschemia,
            Self::VenousCompression,
            Self::UndeterminedWoundBed,
        ]
    }

    const fn title(self) -> &'static str {
        match self {
            Self::CleanGranulating => "Clean granulating abdominal wound",
            Self::SystemicInfection => "Wound with fever and crepitus",
            Self::DiabeticOsteomyelitis => "Probe-positive diabetic heel ulcer",
            Self::CriticalLimbIschemia => "Shin ulcer with ABI below 0.5 and absent pulses",
            Self::VenousCompression => "Sloughy venous leg ulcer with adequate perfusion",
            Self::UndeterminedWoundBed => "Incomplete questionnaire",
        }
    }

    fn build(self) -> (QuestionnaireInput, ClinicalContext) {
        let granulating = QuestionnaireInput {
            wound_bed_types: [TissueType::Granulation].into_iter().collect(),
            exudate: ExudateLevel::Moderate,
            periwound_skin: PeriwoundSkin::Normal,
            ..QuestionnaireInput::default()
        };

        match self {
            Self::CleanGranulating => (granulating, context("abdomen", Comorbidities::default())),
            Self::SystemicInfection => (
                QuestionnaireInput {
                    infection_signs: InfectionSigns {
                        fever: true,
                        crepitus: true,
                        odor: true,
                        ..InfectionSigns::default()
                    },
                    ..granulating
                },
                context("left_flank", Comorbidities::default()),
            ),
            Self::DiabeticOsteomyelitis => (
                QuestionnaireInput {
                    probe_to_bone_positive: true,
                    pedal_pulses_palpable: Some(true),
                    abi: AbiRange::AtLeast0_8,
                    ..granulating
                },
                context(
                    "right_heel",
                    Comorbidities {
                        has_diabetes: Some(true),
                        ..Comorbidities::default()
                    },
                ),
            ),
            Self::CriticalLimbIschemia => (
                QuestionnaireInput {
                    wound_bed_types: [TissueType::Necrosis].into_iter().collect(),
                    exudate: ExudateLevel::Dry,
                    abi: AbiRange::Below0_5,
                    pedal_pulses_palpable: Some(false),
                    ..QuestionnaireInput::default()
                },
                context(
                    "right_shin",
                    Comorbidities {
                        has_pad: Some(true),
                        ..Comorbidities::default()
                    },
                ),
            ),
            Self::VenousCompression => (
                QuestionnaireInput {
                    wound_bed_types: [TissueType::Slough, TissueType::Granulation]
                        .into_iter()
                        .collect(),
                    exudate: ExudateLevel::High,
                    periwound_skin: PeriwoundSkin::Macerated,
                    pedal_pulses_palpable: Some(true),
                    abi: AbiRange::AtLeast0_8,
                    ..QuestionnaireInput::default()
                },
                context(
                    "left_gaiter",
                    Comorbidities {
                        has_venous_disease: Some(true),
                        ..Comorbidities::default()
                    },
                ),
            ),
            Self::UndeterminedWoundBed => (
                QuestionnaireInput::default(),
                context("", Comorbidities::default()),
            ),
        }
    }
}

fn context(location: &str, comorbidities: Comorbidities) -> ClinicalContext {
    ClinicalContext::builder("demo-patient")
        .location(location)
        .comorbidities(comorbidities)
        .build()
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    init_cli_telemetry()?;

    let scenarios: Vec<DemoScenario> = match args.scenario {
        Some(scenario) => vec![scenario],
        None => DemoScenario::ordered().to_vec(),
    };

    let engine = RulesEngine::new();
    println!("Wound assessment rules engine demo");
    for (index, scenario) in scenarios.into_iter().enumerate() {
        let (input, context) = scenario.build();
        let report = engine.analyze(&input, &context);

        println!("\n=== {}. {} ===", index + 1, scenario.title());
        println!("Location: {}", context.body_region.label());
        render_report(&report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wound_care::assessment::RedFlagKind;

    #[test]
    fn every_scenario_builds_a_report() {
        for scenario in DemoScenario::ordered() {
            let (input, context) = scenario.build();
            let report = RulesEngine::new().analyze(&input, &context);
            assert!(!report.treatment_goals.is_empty(), "{scenario:?}");
        }
    }

    #[test]
    fn limb_ischemia_scenario_raises_its_flag() {
        let (input, context) = DemoScenario::CriticalLimbIschemia.build();
        let report = RulesEngine::new().analyze(&input, &context);
        assert!(report
            .red_flags
            .iter()
            .any(|flag| flag.kind == RedFlagKind::CriticalLimbIschemia));
    }
}
