use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::definition::ScaleDefinition;
use crate::error::AnswerError;

/// Answer to an optional clinical finding.
///
/// `Absent` and `NotEvaluated` are rendered differently but score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TriState {
    Present,
    Absent,
    NotEvaluated,
}

/// A stored answer for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    /// The `value` key of the selected option.
    Choice(String),
    TriState(TriState),
    Number(f64),
}

impl AnswerValue {
    pub fn choice(value: &str) -> Self {
        AnswerValue::Choice(value.to_string())
    }

    pub(crate) fn to_input(&self) -> FieldInput {
        match self {
            AnswerValue::Choice(value) => FieldInput::Select(value.clone()),
            AnswerValue::TriState(state) => FieldInput::Toggle(*state),
            AnswerValue::Number(value) => FieldInput::Enter(*value),
        }
    }
}

/// A raw UI event targeting one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldInput {
    Select(String),
    Toggle(TriState),
    Enter(f64),
    Clear,
}

/// The answers collected so far, keyed by field id.
///
/// Owned by the host; unanswered fields are absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answers(BTreeMap<String, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field_id: &str) -> Option<&AnswerValue> {
        self.0.get(field_id)
    }

    pub fn is_answered(&self, field_id: &str) -> bool {
        self.0.contains_key(field_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Apply a UI event to the answers.
    ///
    /// On error nothing changes, so the host keeps showing the previous state.
    pub fn apply(
        &mut self,
        definition: &ScaleDefinition,
        field_id: &str,
        input: FieldInput,
    ) -> Result<(), AnswerError> {
        let field = definition
            .field(field_id)
            .ok_or_else(|| AnswerError::UnknownField {
                scale_id: definition.id.clone(),
                field_id: field_id.to_string(),
            })?;

        match field.accept(&input) {
            Ok(Some(value)) => {
                self.0.insert(field_id.to_string(), value);
                Ok(())
            }
            Ok(None) => {
                self.0.remove(field_id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(scale_id = %definition.id, field_id, error = %e, "rejected answer update");
                Err(e)
            }
        }
    }

    /// Builder-style [`Answers::apply`].
    pub fn with(
        mut self,
        definition: &ScaleDefinition,
        field_id: &str,
        input: FieldInput,
    ) -> Result<Self, AnswerError> {
        self.apply(definition, field_id, input)?;
        Ok(self)
    }

    /// Check every stored answer against `definition`.
    ///
    /// Useful for answers that bypassed [`Answers::apply`], such as a snapshot
    /// deserialized from the host.
    pub fn validate(&self, definition: &ScaleDefinition) -> Result<(), AnswerError> {
        for (field_id, answer) in &self.0 {
            let field = definition
                .field(field_id)
                .ok_or_else(|| AnswerError::UnknownField {
                    scale_id: definition.id.clone(),
                    field_id: field_id.clone(),
                })?;
            field.check(answer)?;
        }
        Ok(())
    }

    pub(crate) fn insert(&mut self, field_id: &str, value: AnswerValue) {
        self.0.insert(field_id.to_string(), value);
    }
}

impl FromIterator<(String, AnswerValue)> for Answers {
    fn from_iter<I: IntoIterator<Item = (String, AnswerValue)>>(iter: I) -> Self {
        Answers(iter.into_iter().collect())
    }
}
