use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Categorical outcome of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    Low,
    Intermediate,
    High,
    CriteriaNotMet,
    CriteriaMet,
    Mild,
    Moderate,
    Severe,
}

/// Presentation hint for the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ColorHint {
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

/// A contiguous score range mapped to a verdict. Both bounds are inclusive;
/// a missing bound is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationBand {
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub label: String,
    pub tier: Tier,
    pub color: ColorHint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl InterpretationBand {
    pub fn new(min: Option<i32>, max: Option<i32>, label: &str, tier: Tier, color: ColorHint) -> Self {
        Self {
            min,
            max,
            label: label.to_string(),
            tier,
            color,
            recommendation: None,
        }
    }

    pub fn with_recommendation(mut self, recommendation: &str) -> Self {
        self.recommendation = Some(recommendation.to_string());
        self
    }

    pub fn contains(&self, score: i32) -> bool {
        self.min.is_none_or(|min| score >= min) && self.max.is_none_or(|max| score <= max)
    }
}
