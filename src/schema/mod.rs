//! Form descriptor schema
//!
//! - `kind`: supported field kinds and the field → control mapping
//! - `descriptor`: typed descriptor model
//! - `definition`: the JSON Schema pasted input is validated against

mod definition;
mod descriptor;
mod kind;

pub use definition::form_descriptor_schema;
pub use descriptor::{FieldDescriptor, FormDescriptor};
pub use kind::{render_field, Control, FieldKind, RenderedField};

#[cfg(test)]
pub use descriptor::FieldOption;
