pub mod answers;
pub mod band;
pub mod condition;
pub mod definition;
pub mod field;
pub mod result;
