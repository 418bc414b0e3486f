use medscale_core::models::band::{ColorHint, InterpretationBand, Tier};
use medscale_core::models::definition::{CompletionPolicy, ScaleDefinition};
use medscale_core::models::field::Field;

use crate::Scale;

/// Wells score for deep vein thrombosis.
/// Nine findings worth 1 point each, and -2 when an alternative diagnosis
/// is at least as likely. Total -2 to 9.
pub struct WellsDvt;

pub const ID: &str = "wells_dvt";

impl Scale for WellsDvt {
    fn definition(&self) -> &ScaleDefinition {
        definition()
    }
}

/// The static definition, usable without a `Scale` value.
pub fn definition() -> &'static ScaleDefinition {
    static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
        let findings = [
            ("active_cancer", "Active cancer (treatment within 6 months or palliative)", 1),
            (
                "paralysis_or_cast",
                "Paralysis, paresis or recent plaster immobilisation of the lower extremity",
                1,
            ),
            (
                "bedridden_or_surgery",
                "Bedridden 3 days or more, or major surgery within 12 weeks",
                1,
            ),
            ("localized_tenderness", "Localised tenderness along the deep venous system", 1),
            ("entire_leg_swollen", "Entire leg swollen", 1),
            ("calf_swelling", "Calf swelling at least 3 cm larger than the other leg", 1),
            ("pitting_edema", "Pitting oedema confined to the symptomatic leg", 1),
            ("collateral_veins", "Collateral superficial veins (non-varicose)", 1),
            ("previous_dvt", "Previously documented DVT", 1),
            (
                "alternative_diagnosis",
                "Alternative diagnosis at least as likely as DVT",
                -2,
            ),
        ];

        ScaleDefinition {
            id: ID.to_string(),
            version: 1,
            title: "Wells score for DVT".to_string(),
            description: None,
            fields: findings
                .iter()
                .map(|(id, label, points)| Field::tri_state(id, label, *points))
                .collect(),
            bands: vec![
                InterpretationBand::new(None, Some(0), "Low probability of DVT", Tier::Low, ColorHint::Green)
                    .with_recommendation("Measure D-dimer; a negative result rules out DVT."),
                InterpretationBand::new(
                    Some(1),
                    Some(2),
                    "Moderate probability of DVT",
                    Tier::Intermediate,
                    ColorHint::Yellow,
                )
                .with_recommendation("Measure D-dimer; perform compression ultrasound if positive."),
                InterpretationBand::new(Some(3), None, "High probability of DVT", Tier::High, ColorHint::Red)
                    .with_recommendation("Perform compression ultrasound."),
            ],
            completion_policy: CompletionPolicy::Live,
            score_limits: None,
        }
    });
    &DEFINITION
}
