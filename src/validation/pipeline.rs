//! Raw text → parse → validate → descriptor pipeline

use super::traits::SchemaValidator;
use crate::schema::FormDescriptor;
use serde_json::Value;
use thiserror::Error;

/// Why a pasted text could not become a form descriptor.
///
/// `Display` is the exact message shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// The text is not well-formed JSON
    #[error("Invalid JSON format: {0}")]
    Parse(String),
    /// Well-formed JSON that fails the descriptor schema
    #[error("Invalid JSON structure: {}", .0.join(", "))]
    Structure(Vec<String>),
}

/// Run the full pipeline on the current input text.
///
/// Returns `Ok(None)` for blank input, which shows neither a form nor an error.
pub fn evaluate_input(
    raw: &str,
    validator: &dyn SchemaValidator,
) -> Result<Option<FormDescriptor>, DescriptorError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let value: Value =
        serde_json::from_str(raw).map_err(|e| DescriptorError::Parse(e.to_string()))?;

    let violations = validator.validate(&value);
    if !violations.is_empty() {
        return Err(DescriptorError::Structure(
            violations.into_iter().map(|v| v.message).collect(),
        ));
    }

    // Keys the schema does not name are accepted but not kept: the typed
    // descriptor carries only the known properties. An explicit `null` on an
    // optional property becomes `None`.
    let descriptor = serde_json::from_value(value)
        .map_err(|e| DescriptorError::Structure(vec![e.to_string()]))?;

    Ok(Some(descriptor))
}
