//! medscale-scales
//!
//! The clinical scale catalog and the generic engine that scores it.
//! Each scale is pure data, a [`ScaleDefinition`], evaluated by one
//! scoring function instead of per-calculator code.

pub mod error;
pub mod loader;
pub mod scales;
pub mod scoring;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use medscale_core::error::DefinitionError;
use medscale_core::models::answers::Answers;
use medscale_core::models::band::InterpretationBand;
use medscale_core::models::definition::ScaleDefinition;
use medscale_core::models::result::ScoreResult;

use error::{InterpretError, ScaleError};

/// Trait implemented by each built-in clinical scale.
pub trait Scale: Send + Sync {
    /// The static definition backing this scale.
    fn definition(&self) -> &ScaleDefinition;

    /// Unique identifier (e.g., "pmr_eular_acr", "leibovich_rcc").
    fn id(&self) -> &str {
        &self.definition().id
    }

    /// Human-readable title.
    fn title(&self) -> &str {
        &self.definition().title
    }

    fn is_complete(&self, answers: &Answers) -> bool {
        self.definition().is_complete(answers)
    }

    fn score(&self, answers: &Answers) -> i32 {
        scoring::score(self.definition(), answers)
    }

    fn interpret(&self, score: i32) -> Result<&InterpretationBand, InterpretError> {
        scoring::interpret(self.definition(), score)
    }

    fn evaluate(&self, answers: &Answers) -> Result<ScoreResult, InterpretError> {
        scoring::evaluate(self.definition(), answers)
    }
}

/// Catalog entry for scale pickers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleSummary {
    pub id: String,
    pub title: String,
    pub version: u32,
}

/// Return all registered scales.
pub fn all_scales() -> Vec<Box<dyn Scale>> {
    vec![
        Box::new(scales::pmr::PolymyalgiaRheumatica),
        Box::new(scales::rcc::LeibovichRcc),
        Box::new(scales::wells_dvt::WellsDvt),
        Box::new(scales::cha2ds2_vasc::Cha2ds2Vasc),
        Box::new(scales::gcs::GlasgowComaScale),
    ]
}

/// Look up a scale by ID.
pub fn get_scale(id: &str) -> Option<Box<dyn Scale>> {
    all_scales().into_iter().find(|s| s.id() == id)
}

/// Look up a scale, check the stored answers against it and evaluate them.
///
/// The entry point for hosts holding a scale id and answers deserialized
/// from their own storage.
pub fn evaluate_by_id(id: &str, answers: &Answers) -> Result<ScoreResult, ScaleError> {
    let scale = get_scale(id).ok_or_else(|| ScaleError::UnknownScale(id.to_string()))?;
    answers.validate(scale.definition())?;
    Ok(scale.evaluate(answers)?)
}

pub fn summaries() -> Vec<ScaleSummary> {
    all_scales()
        .iter()
        .map(|s| ScaleSummary {
            id: s.id().to_string(),
            title: s.title().to_string(),
            version: s.definition().version,
        })
        .collect()
}

/// Validate every built-in definition. Hosts call this once at startup.
pub fn validate_catalog() -> Result<(), DefinitionError> {
    for scale in all_scales() {
        scale.definition().validate()?;
    }
    tracing::debug!("scale catalog validated");
    Ok(())
}
