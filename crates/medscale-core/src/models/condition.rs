use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answers::{AnswerValue, Answers};

/// Serializable predicate over the answers, used for conditional visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    Answered { field: String },
    Equals { field: String, value: AnswerValue },
    All { conditions: Vec<Condition> },
    Any { conditions: Vec<Condition> },
    Not { condition: Box<Condition> },
}

impl Condition {
    pub fn answered(field: &str) -> Self {
        Condition::Answered {
            field: field.to_string(),
        }
    }

    pub fn equals(field: &str, value: AnswerValue) -> Self {
        Condition::Equals {
            field: field.to_string(),
            value,
        }
    }

    pub fn all(conditions: Vec<Condition>) -> Self {
        Condition::All { conditions }
    }

    pub fn any(conditions: Vec<Condition>) -> Self {
        Condition::Any { conditions }
    }

    pub fn not(condition: Condition) -> Self {
        Condition::Not {
            condition: Box::new(condition),
        }
    }

    pub fn evaluate(&self, answers: &Answers) -> bool {
        match self {
            Condition::Answered { field } => answers.is_answered(field),
            Condition::Equals { field, value } => answers.get(field) == Some(value),
            Condition::All { conditions } => conditions.iter().all(|c| c.evaluate(answers)),
            Condition::Any { conditions } => conditions.iter().any(|c| c.evaluate(answers)),
            Condition::Not { condition } => !condition.evaluate(answers),
        }
    }

    /// Every field id this condition reads.
    pub fn referenced_fields(&self) -> Vec<&str> {
        match self {
            Condition::Answered { field } | Condition::Equals { field, .. } => vec![field.as_str()],
            Condition::All { conditions } | Condition::Any { conditions } => conditions
                .iter()
                .flat_map(|c| c.referenced_fields())
                .collect(),
            Condition::Not { condition } => condition.referenced_fields(),
        }
    }
}
