//! Generated form domain layer
//!
//! Per-control interaction state for the form built from a validated
//! descriptor.

mod field;
mod form_state;

pub use field::FieldControl;
pub use form_state::FormState;
