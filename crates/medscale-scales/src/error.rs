use thiserror::Error;

use medscale_core::error::{AnswerError, DefinitionError};

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("invalid definition: {0}")]
    Definition(#[from] DefinitionError),

    #[error("invalid answers: {0}")]
    Answer(#[from] AnswerError),

    #[error("interpretation failed: {0}")]
    Interpret(#[from] InterpretError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A score no band covers. Only reachable with a definition that skipped validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    #[error("score {score} of scale '{scale_id}' matches no interpretation band")]
    Unclassifiable { scale_id: String, score: i32 },
}
