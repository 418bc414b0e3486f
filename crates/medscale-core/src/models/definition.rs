use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answers::{AnswerValue, Answers};
use super::band::InterpretationBand;
use super::field::Field;

/// Whether a verdict is shown before every required field is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompletionPolicy {
    /// Nothing is shown until the scale is complete.
    AllRequired,
    /// A provisional score is shown from the empty state and updated live.
    #[default]
    Live,
}

/// Optional floor and ceiling applied to the summed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreLimits {
    pub floor: Option<i32>,
    pub ceiling: Option<i32>,
}

impl ScoreLimits {
    pub fn apply(&self, score: i32) -> i32 {
        let score = self.floor.map_or(score, |floor| score.max(floor));
        self.ceiling.map_or(score, |ceiling| score.min(ceiling))
    }
}

/// A complete, declarative clinical scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub id: String,
    pub version: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<Field>,
    /// Ascending, contiguous, non-overlapping.
    pub bands: Vec<InterpretationBand>,
    #[serde(default)]
    pub completion_policy: CompletionPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_limits: Option<ScoreLimits>,
}

/// A field paired with its visibility and effective answer for one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedField<'a> {
    pub field: &'a Field,
    pub visible: bool,
    /// `None` when unanswered or hidden.
    pub answer: Option<&'a AnswerValue>,
}

impl ScaleDefinition {
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Resolve visibility for every field, in declaration order.
    ///
    /// Conditions only see answers of earlier, visible fields, so an answer
    /// left behind on a hidden field never leaks into later conditions.
    pub fn resolve<'a>(&'a self, answers: &'a Answers) -> Vec<ResolvedField<'a>> {
        let mut effective = Answers::new();
        self.fields
            .iter()
            .map(|field| {
                let visible = field
                    .visible_when
                    .as_ref()
                    .is_none_or(|c| c.evaluate(&effective));
                let answer = if visible { answers.get(&field.id) } else { None };
                if let Some(value) = answer {
                    effective.insert(&field.id, value.clone());
                }
                ResolvedField {
                    field,
                    visible,
                    answer,
                }
            })
            .collect()
    }

    /// True when every visible required field has an answer.
    pub fn is_complete(&self, answers: &Answers) -> bool {
        self.resolve(answers)
            .iter()
            .filter(|r| r.visible && r.field.required)
            .all(|r| r.answer.is_some())
    }

    /// Lowest and highest score the fields can produce, after score limits.
    ///
    /// Saturates at the `i32` bounds; [`Self::checked_score_range`] tells
    /// whether it had to.
    pub fn score_range(&self) -> (i32, i32) {
        let (lo, hi) = self
            .fields
            .iter()
            .map(Field::point_span)
            .fold((0i32, 0i32), |(lo, hi), (a, b)| {
                (lo.saturating_add(a), hi.saturating_add(b))
            });
        self.limit_range(lo, hi)
    }

    /// Like [`Self::score_range`], or `None` when the summed points do not fit in `i32`.
    pub fn checked_score_range(&self) -> Option<(i32, i32)> {
        let (lo, hi) = self
            .fields
            .iter()
            .map(Field::point_span)
            .try_fold((0i32, 0i32), |(lo, hi), (a, b)| {
                Some((lo.checked_add(a)?, hi.checked_add(b)?))
            })?;
        Some(self.limit_range(lo, hi))
    }

    fn limit_range(&self, lo: i32, hi: i32) -> (i32, i32) {
        match &self.score_limits {
            Some(limits) => (limits.apply(lo), limits.apply(hi)),
            None => (lo, hi),
        }
    }
}
