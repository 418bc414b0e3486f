use medscale_core::models::band::{ColorHint, InterpretationBand, Tier};
use medscale_core::models::definition::{CompletionPolicy, ScaleDefinition};
use medscale_core::models::field::{Field, FieldOption, NumericBracket};

use crate::Scale;

/// CHA₂DS₂-VASc: stroke risk in atrial fibrillation. Total 0–9.
/// Age is entered in years and mapped to 0, 1 or 2 points.
pub struct Cha2ds2Vasc;

pub const ID: &str = "cha2ds2_vasc";

impl Scale for Cha2ds2Vasc {
    fn definition(&self) -> &ScaleDefinition {
        definition()
    }
}

/// The static definition, usable without a `Scale` value.
pub fn definition() -> &'static ScaleDefinition {
    static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
        let age_brackets = vec![
            NumericBracket {
                min: 0.0,
                max: Some(65.0),
                points: 0,
            },
            NumericBracket {
                min: 65.0,
                max: Some(75.0),
                points: 1,
            },
            NumericBracket {
                min: 75.0,
                max: None,
                points: 2,
            },
        ];

        ScaleDefinition {
            id: ID.to_string(),
            version: 1,
            title: "CHA₂DS₂-VASc".to_string(),
            description: Some("Stroke risk in non-valvular atrial fibrillation.".to_string()),
            fields: vec![
                Field::tri_state("congestive_heart_failure", "Congestive heart failure", 1),
                Field::tri_state("hypertension", "Hypertension", 1),
                Field::numeric("age", "Age", 18.0, 120.0, age_brackets)
                    .with_unit("years")
                    .required(),
                Field::tri_state("diabetes", "Diabetes mellitus", 1),
                Field::tri_state("stroke_tia", "Prior stroke, TIA or thromboembolism", 2),
                Field::tri_state(
                    "vascular_disease",
                    "Vascular disease (prior MI, peripheral artery disease, aortic plaque)",
                    1,
                ),
                Field::single_choice(
                    "sex",
                    "Sex",
                    vec![
                        FieldOption::new("male", "Male", 0),
                        FieldOption::new("female", "Female", 1),
                    ],
                )
                .required(),
            ],
            bands: vec![
                InterpretationBand::new(Some(0), Some(0), "Low stroke risk", Tier::Low, ColorHint::Green)
                    .with_recommendation("No antithrombotic therapy is usually needed."),
                InterpretationBand::new(
                    Some(1),
                    Some(1),
                    "Intermediate stroke risk",
                    Tier::Intermediate,
                    ColorHint::Yellow,
                )
                .with_recommendation("Consider oral anticoagulation, weighing bleeding risk."),
                InterpretationBand::new(Some(2), None, "High stroke risk", Tier::High, ColorHint::Red)
                    .with_recommendation("Oral anticoagulation is recommended."),
            ],
            completion_policy: CompletionPolicy::Live,
            score_limits: None,
        }
    });
    &DEFINITION
}
