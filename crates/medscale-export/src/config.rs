use std::env;
use std::fs;

use crate::error::ExportError;

pub const ENV_ATTRIBUTION: &str = "MEDSCALE_ATTRIBUTION";
pub const ENV_SUMMARY_TEMPLATE: &str = "MEDSCALE_SUMMARY_TEMPLATE";

pub const DEFAULT_ATTRIBUTION: &str =
    "Calculated with the medical portal scale calculator. Does not replace clinical judgement.";

/// Default summary layout. Tera syntax; see [`crate::render::SummaryContext`]
/// for the available variables.
pub const DEFAULT_TEMPLATE: &str = "{{ title }}
{{ score_caption }}: {{ score }}
{{ interpretation_caption }}: {{ label }}
{% if recommendation %}{{ recommendation_caption }}: {{ recommendation }}
{% endif %}{% if not is_complete %}{{ provisional_notice }}
{% endif %}{{ attribution }}";

/// Captions, attribution and layout of the text summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    pub attribution: String,
    pub score_caption: String,
    pub interpretation_caption: String,
    pub recommendation_caption: String,
    pub provisional_notice: String,
    pub template: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            score_caption: "Score".to_string(),
            interpretation_caption: "Interpretation".to_string(),
            recommendation_caption: "Recommendation".to_string(),
            provisional_notice: "Provisional result: not all required fields are answered.".to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl SummaryConfig {
    /// Defaults overridden by `MEDSCALE_ATTRIBUTION` and
    /// `MEDSCALE_SUMMARY_TEMPLATE` (path to a Tera template file).
    pub fn from_env() -> Result<Self, ExportError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ExportError> {
        let mut config = Self::default();

        if let Some(attribution) = lookup(ENV_ATTRIBUTION) {
            config.attribution = attribution;
        }

        if let Some(path) = lookup(ENV_SUMMARY_TEMPLATE) {
            config.template = fs::read_to_string(&path).map_err(|e| {
                tracing::warn!(path = %path, error = %e, "summary template unreadable");
                ExportError::TemplateNotFound(path.clone())
            })?;
            tracing::info!(path = %path, "using custom summary template");
        }

        Ok(config)
    }
}
