//! `jsonschema`-backed validator for form descriptors

use super::traits::{SchemaValidator, Violation};
use crate::schema::form_descriptor_schema;
use anyhow::{anyhow, Result};
use jsonschema::Validator;
use serde_json::Value;

/// Validator compiled once from the descriptor schema
pub struct JsonSchemaValidator {
    compiled: Validator,
}

impl JsonSchemaValidator {
    /// Compile the form descriptor schema
    pub fn new() -> Result<Self> {
        Self::from_schema(&form_descriptor_schema())
    }

    /// Compile an arbitrary schema, honoring `nullable: true`
    pub fn from_schema(schema: &Value) -> Result<Self> {
        let mut schema = schema.clone();
        expand_nullable(&mut schema);
        let compiled = jsonschema::validator_for(&schema)
            .map_err(|e| anyhow!("schema compile error: {e}"))?;
        tracing::debug!("Compiled form descriptor schema");
        Ok(Self { compiled })
    }
}

/// Rewrite `{"type": T, "nullable": true}` to `{"type": [T, "null"]}` at
/// every depth, so `null` passes the type check as it does in OpenAPI-style
/// schemas.
fn expand_nullable(schema: &mut Value) {
    match schema {
        Value::Object(map) => {
            if map.get("nullable") == Some(&Value::Bool(true)) {
                if let Some(kind) = map.get_mut("type") {
                    let null = Value::from("null");
                    match kind {
                        Value::String(_) => *kind = Value::Array(vec![kind.take(), null]),
                        Value::Array(kinds) if !kinds.contains(&null) => kinds.push(null),
                        _ => {}
                    }
                }
            }
            map.values_mut().for_each(expand_nullable);
        }
        Value::Array(items) => items.iter_mut().for_each(expand_nullable),
        _ => {}
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate(&self, instance: &Value) -> Vec<Violation> {
        self.compiled
            .iter_errors(instance)
            .map(|e| Violation::new(e.to_string()))
            .collect()
    }
}
