//! Validation of pasted form descriptors

mod json_schema;
mod pipeline;
mod traits;

pub use json_schema::JsonSchemaValidator;
pub use pipeline::{evaluate_input, DescriptorError};
pub use traits::SchemaValidator;

#[cfg(test)]
pub use traits::{MockSchemaValidator, Violation};
