use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::band::InterpretationBand;
use super::definition::CompletionPolicy;

/// Where a scale sits between "nothing answered" and "fully answered".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationState {
    Empty,
    Partial,
    Evaluated,
}

/// Outcome of one evaluation. Built fresh on every recompute and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub scale_id: String,
    pub score: i32,
    pub band: InterpretationBand,
    /// `false` means required answers are still missing; the score is provisional.
    pub is_complete: bool,
    pub state: EvaluationState,
}

impl ScoreResult {
    /// Whether the host should show the verdict under `policy`.
    pub fn should_display_verdict(&self, policy: CompletionPolicy) -> bool {
        match policy {
            CompletionPolicy::AllRequired => self.is_complete,
            CompletionPolicy::Live => true,
        }
    }
}
