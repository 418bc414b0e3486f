//! Scoring evaluator and interpretation resolver.
//!
//! Everything here is a pure function of `(definition, answers)`: the score is
//! recomputed from scratch on every call and nothing is cached between calls.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use medscale_core::models::answers::Answers;
use medscale_core::models::band::InterpretationBand;
use medscale_core::models::definition::ScaleDefinition;
use medscale_core::models::result::{EvaluationState, ScoreResult};

use crate::error::InterpretError;

/// Points one visible, answered field adds to the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contribution {
    pub field_id: String,
    pub label: String,
    pub points: i32,
}

/// Per-field points of the current answers, in field order.
///
/// Hidden and unanswered fields are left out. An answer that does not fit
/// its field (only possible when it bypassed validation) counts as 0.
pub fn breakdown(definition: &ScaleDefinition, answers: &Answers) -> Vec<Contribution> {
    definition
        .resolve(answers)
        .into_iter()
        .filter_map(|resolved| {
            let answer = resolved.answer?;
            let points = resolved.field.points_for(answer).unwrap_or_else(|| {
                tracing::warn!(
                    scale_id = %definition.id,
                    field_id = %resolved.field.id,
                    "answer does not fit field, counting 0"
                );
                0
            });
            Some(Contribution {
                field_id: resolved.field.id.clone(),
                label: resolved.field.label.clone(),
                points,
            })
        })
        .collect()
}

/// Total score: the signed sum of visible, answered fields.
///
/// No clamping unless the definition declares score limits. A validated
/// definition cannot overflow; an unvalidated one saturates.
pub fn score(definition: &ScaleDefinition, answers: &Answers) -> i32 {
    let total = breakdown(definition, answers)
        .iter()
        .fold(0i32, |total, c| total.saturating_add(c.points));
    match &definition.score_limits {
        Some(limits) => limits.apply(total),
        None => total,
    }
}

/// First band, in ascending order, containing `score`.
pub fn interpret(
    definition: &ScaleDefinition,
    score: i32,
) -> Result<&InterpretationBand, InterpretError> {
    definition
        .bands
        .iter()
        .find(|band| band.contains(score))
        .ok_or_else(|| InterpretError::Unclassifiable {
            scale_id: definition.id.clone(),
            score,
        })
}

/// Completeness, score and interpretation in one pass.
pub fn evaluate(definition: &ScaleDefinition, answers: &Answers) -> Result<ScoreResult, InterpretError> {
    let is_complete = definition.is_complete(answers);
    let any_answered = definition.resolve(answers).iter().any(|r| r.answer.is_some());
    let score = score(definition, answers);
    let band = interpret(definition, score)?;

    let state = if !any_answered {
        EvaluationState::Empty
    } else if is_complete {
        EvaluationState::Evaluated
    } else {
        EvaluationState::Partial
    };

    tracing::debug!(
        scale_id = %definition.id,
        score,
        is_complete,
        band = %band.label,
        "evaluated scale"
    );

    Ok(ScoreResult {
        scale_id: definition.id.clone(),
        score,
        band: band.clone(),
        is_complete,
        state,
    })
}
