//! Loading scale definitions authored as JSON.

use medscale_core::models::definition::ScaleDefinition;

use crate::error::ScaleError;

/// Parse and validate a definition. Authoring defects are rejected here,
/// never at evaluation time.
pub fn load_definition(json: &str) -> Result<ScaleDefinition, ScaleError> {
    let definition: ScaleDefinition = serde_json::from_str(json)?;
    definition.validate()?;
    tracing::info!(
        scale_id = %definition.id,
        version = definition.version,
        fields = definition.fields.len(),
        "loaded scale definition"
    );
    Ok(definition)
}

/// Serialize a definition, e.g. to ship it to the web UI.
pub fn to_json(definition: &ScaleDefinition) -> Result<String, ScaleError> {
    Ok(serde_json::to_string_pretty(definition)?)
}
