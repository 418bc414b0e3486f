use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answers::{AnswerValue, FieldInput, TriState};
use super::condition::Condition;
use crate::error::AnswerError;

/// One selectable option of a single-choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldOption {
    /// Stable key submitted by the UI when the option is picked.
    pub value: String,
    pub label: String,
    /// Signed contribution to the total. Negative for subtractive criteria.
    pub points: i32,
}

impl FieldOption {
    pub fn new(value: &str, label: &str, points: i32) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            points,
        }
    }
}

/// Maps a numeric entry to points: `min` inclusive, `max` exclusive,
/// open-ended when `max` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericBracket {
    pub min: f64,
    pub max: Option<f64>,
    pub points: i32,
}

impl NumericBracket {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.is_none_or(|max| value < max)
    }
}

/// The input kind of a field, with its point contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Exactly one of the declared options.
    SingleChoice { options: Vec<FieldOption> },
    /// Present / absent / not evaluated. "Not evaluated" scores like "absent".
    TriState {
        present_points: i32,
        #[serde(default)]
        absent_points: i32,
    },
    /// A number within `[min, max]`, converted to points through `brackets`.
    Numeric {
        min: f64,
        max: f64,
        #[serde(default)]
        unit: Option<String>,
        brackets: Vec<NumericBracket>,
    },
}

impl FieldKind {
    fn describe(&self) -> &'static str {
        match self {
            FieldKind::SingleChoice { .. } => "single-choice",
            FieldKind::TriState { .. } => "tri-state",
            FieldKind::Numeric { .. } => "numeric",
        }
    }
}

/// A single input of a scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Field {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    /// Shown and scored only while this holds. Hidden fields count as unanswered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_when: Option<Condition>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Field {
    pub fn single_choice(id: &str, label: &str, options: Vec<FieldOption>) -> Self {
        Self::new(id, label, FieldKind::SingleChoice { options })
    }

    pub fn tri_state(id: &str, label: &str, present_points: i32) -> Self {
        Self::new(
            id,
            label,
            FieldKind::TriState {
                present_points,
                absent_points: 0,
            },
        )
    }

    pub fn numeric(id: &str, label: &str, min: f64, max: f64, brackets: Vec<NumericBracket>) -> Self {
        Self::new(
            id,
            label,
            FieldKind::Numeric {
                min,
                max,
                unit: None,
                brackets,
            },
        )
    }

    fn new(id: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            visible_when: None,
            required: false,
            help: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn visible_when(mut self, condition: Condition) -> Self {
        self.visible_when = Some(condition);
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        if let FieldKind::Numeric { unit: slot, .. } = &mut self.kind {
            *slot = Some(unit.to_string());
        }
        self
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    pub fn option(&self, value: &str) -> Option<&FieldOption> {
        match &self.kind {
            FieldKind::SingleChoice { options } => options.iter().find(|o| o.value == value),
            _ => None,
        }
    }

    /// Validate a raw UI event against this field.
    ///
    /// Returns the answer to store, or `None` when the event clears the field.
    pub fn accept(&self, input: &FieldInput) -> Result<Option<AnswerValue>, AnswerError> {
        let value = match (&self.kind, input) {
            (_, FieldInput::Clear) => return Ok(None),
            (FieldKind::SingleChoice { .. }, FieldInput::Select(value)) => {
                if self.option(value).is_none() {
                    return Err(AnswerError::InvalidOption {
                        field_id: self.id.clone(),
                        value: value.clone(),
                    });
                }
                AnswerValue::Choice(value.clone())
            }
            (FieldKind::TriState { .. }, FieldInput::Toggle(state)) => AnswerValue::TriState(*state),
            (FieldKind::Numeric { min, max, .. }, FieldInput::Enter(value)) => {
                if !value.is_finite() {
                    return Err(AnswerError::NotFinite {
                        field_id: self.id.clone(),
                    });
                }
                if value < min || value > max {
                    return Err(AnswerError::OutOfRange {
                        field_id: self.id.clone(),
                        value: *value,
                        min: *min,
                        max: *max,
                    });
                }
                AnswerValue::Number(*value)
            }
            (kind, _) => {
                return Err(AnswerError::KindMismatch {
                    field_id: self.id.clone(),
                    expected: kind.describe(),
                });
            }
        };
        Ok(Some(value))
    }

    /// Check an already-stored answer, e.g. one deserialized from the host.
    pub fn check(&self, answer: &AnswerValue) -> Result<(), AnswerError> {
        self.accept(&answer.to_input()).map(|_| ())
    }

    /// Points contributed by `answer`, or `None` if the answer does not fit this field.
    pub fn points_for(&self, answer: &AnswerValue) -> Option<i32> {
        match (&self.kind, answer) {
            (FieldKind::SingleChoice { .. }, AnswerValue::Choice(value)) => {
                self.option(value).map(|o| o.points)
            }
            (
                FieldKind::TriState {
                    present_points,
                    absent_points,
                },
                AnswerValue::TriState(state),
            ) => Some(match state {
                TriState::Present => *present_points,
                TriState::Absent | TriState::NotEvaluated => *absent_points,
            }),
            (FieldKind::Numeric { brackets, .. }, AnswerValue::Number(value)) => Some(
                brackets
                    .iter()
                    .find(|b| b.contains(*value))
                    .map_or(0, |b| b.points),
            ),
            _ => None,
        }
    }

    /// The lowest and highest contribution this field can make, counting
    /// "unanswered" as 0.
    pub fn point_span(&self) -> (i32, i32) {
        let points: Vec<i32> = match &self.kind {
            FieldKind::SingleChoice { options } => options.iter().map(|o| o.points).collect(),
            FieldKind::TriState {
                present_points,
                absent_points,
            } => vec![*present_points, *absent_points],
            FieldKind::Numeric { brackets, .. } => brackets.iter().map(|b| b.points).collect(),
        };
        points
            .into_iter()
            .fold((0, 0), |(lo, hi), p| (lo.min(p), hi.max(p)))
    }
}
