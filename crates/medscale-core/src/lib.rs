//! medscale-core
//!
//! Pure domain types for clinical scales: fields, answers, visibility
//! conditions, interpretation bands and definition validation.
//! No scoring lives here. This is the shared vocabulary that the scale
//! catalog and the exporter build on.

pub mod error;
pub mod models;
pub mod validate;
