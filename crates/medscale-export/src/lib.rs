//! medscale-export
//!
//! Plain-text summaries of scale results, for the clipboard and exports.

pub mod config;
pub mod error;
pub mod render;
