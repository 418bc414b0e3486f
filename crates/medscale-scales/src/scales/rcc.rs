use medscale_core::models::band::{ColorHint, InterpretationBand, Tier};
use medscale_core::models::definition::{CompletionPolicy, ScaleDefinition};
use medscale_core::models::field::{Field, FieldOption};

use crate::Scale;

/// Leibovich score: risk of progression after nephrectomy for clear cell
/// renal cell carcinoma. Five pathology items, total 0–11.
/// 0–2 low, 3–5 intermediate, 6+ high. Every item is required.
pub struct LeibovichRcc;

pub const ID: &str = "leibovich_rcc";

impl Scale for LeibovichRcc {
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
            title: "Skala Leibovicha – rak nerkowokomórkowy".to_string(),
            description: Some(
                "Ryzyko progresji po nefrektomii z powodu jasnokomórkowego raka nerki.".to_string(),
            ),
            fields: vec![
                Field::single_choice(
                    "t_stage",
                    "Cecha T",
                    vec![
                        FieldOption::new("t1a", "pT1a", 0),
                        FieldOption::new("t1b", "pT1b", 2),
                        FieldOption::new("t2", "pT2", 3),
                        FieldOption::new("t3_t4", "pT3–pT4", 4),
                    ],
                ),
                Field::single_choice(
                    "n_stage",
                    "Cecha N",
                    vec![
                        FieldOption::new("n0", "pNx / pN0", 0),
                        FieldOption::new("n1_n2", "pN1 / pN2", 2),
                    ],
                ),
                Field::single_choice(
                    "tumor_size",
                    "Wielkość guza",
                    vec![
                        FieldOption::new("lt_10", "< 10 cm", 0),
                        FieldOption::new("gte_10", "≥ 10 cm", 1),
                    ],
                ),
                Field::single_choice(
                    "nuclear_grade",
                    "Stopień jądrowy",
                    vec![
                        FieldOption::new("grade_1", "1", 0),
                        FieldOption::new("grade_2", "2", 0),
                        FieldOption::new("grade_3", "3", 1),
                        FieldOption::new("grade_4", "4", 3),
                    ],
                ),
                Field::single_choice(
                    "tumor_necrosis",
                    "Martwica guza",
                    vec![
                        FieldOption::new("absent", "Nieobecna", 0),
                        FieldOption::new("present", "Obecna", 1),
                    ],
                ),
            ]
            .into_iter()
            .map(Field::required)
            .collect(),
            bands: vec![
                InterpretationBand::new(Some(0), Some(2), "Niskie ryzyko", Tier::Low, ColorHint::Green)
                    .with_recommendation("Przeżycie bez przerzutów po 5 latach: ok. 97%."),
                InterpretationBand::new(
                    Some(3),
                    Some(5),
                    "Średnie ryzyko",
                    Tier::Intermediate,
                    ColorHint::Yellow,
                )
                .with_recommendation("Przeżycie bez przerzutów po 5 latach: ok. 74%."),
                InterpretationBand::new(Some(6), None, "Wysokie ryzyko", Tier::High, ColorHint::Red)
                    .with_recommendation("Przeżycie bez przerzutów po 5 latach: ok. 31%."),
            ],
            completion_policy: CompletionPolicy::AllRequired,
            score_limits: None,
        }
    });
    &DEFINITION
}
