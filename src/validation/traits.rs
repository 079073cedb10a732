//! Trait abstraction for the validation capability to enable mocking in tests

use serde_json::Value;

/// A single schema violation reported by a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub message: String,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Checks a candidate value against a fixed schema.
///
/// An empty result means the value is valid.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaValidator: Send + Sync {
    fn validate(&self, instance: &Value) -> Vec<Violation>;
}
