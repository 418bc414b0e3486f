use thiserror::Error;

/// A rejected answer update. The previous answers are left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("unknown field '{field_id}' for scale '{scale_id}'")]
    UnknownField { scale_id: String, field_id: String },

    #[error("option '{value}' is not offered by field '{field_id}'")]
    InvalidOption { field_id: String, value: String },

    #[error("field '{field_id}' expects {expected} input")]
    KindMismatch {
        field_id: String,
        expected: &'static str,
    },

    #[error("value {value} for field '{field_id}' is outside [{min}, {max}]")]
    OutOfRange {
        field_id: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("value for field '{field_id}' is not a finite number")]
    NotFinite { field_id: String },
}

/// An authoring defect in a scale definition, caught when the definition is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("scale '{scale_id}' declares no fields")]
    NoFields { scale_id: String },

    #[error("scale '{scale_id}' declares no interpretation bands")]
    NoBands { scale_id: String },

    #[error("scale '{scale_id}' declares field '{field_id}' more than once")]
    DuplicateField { scale_id: String, field_id: String },

    #[error("field '{field_id}' of scale '{scale_id}' has no options")]
    NoOptions { scale_id: String, field_id: String },

    #[error("field '{field_id}' of scale '{scale_id}' repeats option '{value}'")]
    DuplicateOption {
        scale_id: String,
        field_id: String,
        value: String,
    },

    #[error("numeric field '{field_id}' of scale '{scale_id}' has an invalid range or bracket")]
    InvalidNumericRange { scale_id: String, field_id: String },

    #[error("field '{field_id}' of scale '{scale_id}' is conditioned on unknown field '{referenced}'")]
    UnknownConditionField {
        scale_id: String,
        field_id: String,
        referenced: String,
    },

    #[error("field '{field_id}' of scale '{scale_id}' is conditioned on later field '{referenced}'")]
    ForwardConditionReference {
        scale_id: String,
        field_id: String,
        referenced: String,
    },

    #[error("band {index} of scale '{scale_id}' is malformed")]
    InvalidBand { scale_id: String, index: usize },

    #[error("bands of scale '{scale_id}' are not in ascending order at band {index}")]
    BandsOutOfOrder { scale_id: String, index: usize },

    #[error("score limits of scale '{scale_id}' have floor above ceiling")]
    InvalidLimits { scale_id: String },

    #[error("points of scale '{scale_id}' can sum past the 32-bit score range")]
    ScoreOverflow { scale_id: String },

    #[error("no band of scale '{scale_id}' covers score {score}")]
    Unclassifiable { scale_id: String, score: i32 },

    #[error("more than one band of scale '{scale_id}' covers score {score}")]
    OverlappingBands { scale_id: String, score: i32 },
}
