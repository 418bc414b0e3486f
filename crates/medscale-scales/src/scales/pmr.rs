use medscale_core::models::answers::{AnswerValue, TriState};
use medscale_core::models::band::{ColorHint, InterpretationBand, Tier};
use medscale_core::models::condition::Condition;
use medscale_core::models::definition::{CompletionPolicy, ScaleDefinition};
use medscale_core::models::field::{Field, FieldOption};

use crate::Scale;

/// EULAR/ACR 2012 provisional classification criteria for polymyalgia rheumatica.
///
/// Seropositivity and pain in other joints subtract points. Ultrasound
/// findings are only asked for once an ultrasound has been performed.
/// Classification threshold: 4 points. The clinical items alone reach at
/// most 3, so the criteria are only met through the ultrasound findings.
/// Scored live from the empty state.
pub struct PolymyalgiaRheumatica;

pub const ID: &str = "pmr_eular_acr";
pub const THRESHOLD: i32 = 4;

impl Scale for PolymyalgiaRheumatica {
    fn definition(&self) -> &ScaleDefinition {
        definition()
    }
}

/// The static definition, usable without a `Scale` value.
pub fn definition() -> &'static ScaleDefinition {
    static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
        let ultrasound_done =
            Condition::equals("ultrasound_performed", AnswerValue::TriState(TriState::Present));

        ScaleDefinition {
            id: ID.to_string(),
            version: 1,
            title: "EULAR/ACR classification criteria for polymyalgia rheumatica".to_string(),
            description: Some(
                "For patients aged 50 or older with new bilateral shoulder pain and raised CRP and/or ESR."
                    .to_string(),
            ),
            fields: vec![
                Field::single_choice(
                    "morning_stiffness",
                    "Morning stiffness",
                    vec![
                        FieldOption::new("over_45_min", "Longer than 45 minutes", 2),
                        FieldOption::new("up_to_45_min", "45 minutes or less", 0),
                    ],
                )
                .required(),
                Field::single_choice(
                    "hip_pain",
                    "Hip pain or limited range of motion",
                    vec![
                        FieldOption::new("present", "Present", 1),
                        FieldOption::new("absent", "Absent", 0),
                    ],
                )
                .required(),
                Field::single_choice(
                    "rf_acpa",
                    "Rheumatoid factor or ACPA",
                    vec![
                        FieldOption::new("negative", "Both negative", 0),
                        FieldOption::new("positive", "RF and/or ACPA positive", -2),
                    ],
                )
                .required(),
                Field::single_choice(
                    "other_joint_pain",
                    "Pain in other joints",
                    vec![
                        FieldOption::new("absent", "Absent", 0),
                        FieldOption::new("present", "Present", -1),
                    ],
                )
                .required()
                .with_help("Peripheral synovitis or pain in joints other than shoulders and hips."),
                Field::tri_state("ultrasound_performed", "Ultrasound performed", 0),
                Field::tri_state(
                    "us_shoulder_and_hip",
                    "At least one shoulder with subdeltoid bursitis, biceps tenosynovitis or glenohumeral synovitis, and at least one hip with synovitis or trochanteric bursitis",
                    1,
                )
                .visible_when(ultrasound_done.clone()),
                Field::tri_state(
                    "us_both_shoulders",
                    "Both shoulders with subdeltoid bursitis, biceps tenosynovitis or glenohumeral synovitis",
                    1,
                )
                .visible_when(ultrasound_done),
            ],
            bands: vec![
                InterpretationBand::new(
                    None,
                    Some(THRESHOLD - 1),
                    "Does not meet EULAR/ACR criteria",
                    Tier::CriteriaNotMet,
                    ColorHint::Gray,
                ),
                InterpretationBand::new(
                    Some(THRESHOLD),
                    None,
                    "Meets EULAR/ACR criteria",
                    Tier::CriteriaMet,
                    ColorHint::Orange,
                )
                .with_recommendation(
                    "Classification as PMR is supported; exclude mimicking conditions before treatment.",
                ),
            ],
            completion_policy: CompletionPolicy::Live,
            score_limits: None,
        }
    });
    &DEFINITION
}
