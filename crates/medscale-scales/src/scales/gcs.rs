use medscale_core::models::band::{ColorHint, InterpretationBand, Tier};
use medscale_core::models::definition::{CompletionPolicy, ScaleDefinition, ScoreLimits};
use medscale_core::models::field::{Field, FieldOption};

use crate::Scale;

/// Glasgow Coma Scale. Eye (1–4), verbal (1–5) and motor (1–6) responses,
/// total 3–15. All three components are required.
pub struct GlasgowComaScale;

pub const ID: &str = "gcs";

impl Scale for GlasgowComaScale {
    fn definition(&self) -> &ScaleDefinition {
        definition()
    }
}

/// The static definition, usable without a `Scale` value.
pub fn definition() -> &'static ScaleDefinition {
    static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
        ScaleDefinition {
            id: ID.to_string(),
            version: 1,
            title: "Glasgow Coma Scale".to_string(),
            description: None,
            fields: vec![
                Field::single_choice(
                    "eye",
                    "Eye opening",
                    vec![
                        FieldOption::new("spontaneous", "Spontaneous", 4),
                        FieldOption::new("to_sound", "To sound", 3),
                        FieldOption::new("to_pressure", "To pressure", 2),
                        FieldOption::new("none", "None", 1),
                    ],
                ),
                Field::single_choice(
                    "verbal",
                    "Verbal response",
                    vec![
                        FieldOption::new("oriented", "Oriented", 5),
                        FieldOption::new("confused", "Confused", 4),
                        FieldOption::new("words", "Words", 3),
                        FieldOption::new("sounds", "Sounds", 2),
                        FieldOption::new("none", "None", 1),
                    ],
                ),
                Field::single_choice(
                    "motor",
                    "Motor response",
                    vec![
                        FieldOption::new("obeys", "Obeys commands", 6),
                        FieldOption::new("localising", "Localising", 5),
                        FieldOption::new("normal_flexion", "Normal flexion", 4),
                        FieldOption::new("abnormal_flexion", "Abnormal flexion", 3),
                        FieldOption::new("extension", "Extension", 2),
                        FieldOption::new("none", "None", 1),
                    ],
                ),
            ]
            .into_iter()
            .map(Field::required)
            .collect(),
            bands: vec![
                InterpretationBand::new(Some(3), Some(8), "Severe brain injury", Tier::Severe, ColorHint::Red)
                    .with_recommendation("Secure the airway; consider intubation."),
                InterpretationBand::new(
                    Some(9),
                    Some(12),
                    "Moderate brain injury",
                    Tier::Moderate,
                    ColorHint::Orange,
                ),
                InterpretationBand::new(Some(13), Some(15), "Mild brain injury", Tier::Mild, ColorHint::Green),
            ],
            completion_policy: CompletionPolicy::AllRequired,
            // Unanswered components count 0, so partial totals are held at the scale floor.
            score_limits: Some(ScoreLimits {
                floor: Some(3),
                ceiling: Some(15),
            }),
        }
    });
    &DEFINITION
}
