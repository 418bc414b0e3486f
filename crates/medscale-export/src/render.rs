use serde::Serialize;
use tera::{Context, Tera};

use medscale_core::models::definition::ScaleDefinition;
use medscale_core::models::result::ScoreResult;

use crate::config::SummaryConfig;
use crate::error::ExportError;

const TEMPLATE_NAME: &str = "summary.txt";

/// Variables available to a summary template.
#[derive(Debug, Serialize)]
pub struct SummaryContext<'a> {
    pub title: &'a str,
    pub scale_id: &'a str,
    pub version: u32,
    pub score: i32,
    pub label: &'a str,
    pub recommendation: Option<&'a str>,
    pub is_complete: bool,
    pub score_caption: &'a str,
    pub interpretation_caption: &'a str,
    pub recommendation_caption: &'a str,
    pub provisional_notice: &'a str,
    pub attribution: &'a str,
}

/// Render the plain-text summary of `result` using the default configuration.
///
/// The output depends only on its inputs: identical `(definition, result)`
/// pairs always produce byte-identical text.
pub fn format_result(definition: &ScaleDefinition, result: &ScoreResult) -> Result<String, ExportError> {
    render_summary(definition, result, &SummaryConfig::default())
}

/// Render the plain-text summary of `result` with `config`.
pub fn render_summary(
    definition: &ScaleDefinition,
    result: &ScoreResult,
    config: &SummaryConfig,
) -> Result<String, ExportError> {
    if result.scale_id != definition.id {
        return Err(ExportError::ScaleMismatch {
            scale_id: definition.id.clone(),
            result_scale: result.scale_id.clone(),
        });
    }

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, &config.template)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let summary = SummaryContext {
        title: &definition.title,
        scale_id: &definition.id,
        version: definition.version,
        score: result.score,
        label: &result.band.label,
        recommendation: result.band.recommendation.as_deref(),
        is_complete: result.is_complete,
        score_caption: &config.score_caption,
        interpretation_caption: &config.interpretation_caption,
        recommendation_caption: &config.recommendation_caption,
        provisional_notice: &config.provisional_notice,
        attribution: &config.attribution,
    };

    // Convert the summary to a Tera context via serde_json
    let value = serde_json::to_value(&summary)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    Ok(rendered)
}
