//! Supported field kinds and their control mapping

use super::descriptor::FieldDescriptor;
use serde::{Deserialize, Serialize};

/// Sentinel label shown as the first, empty entry of every drop-down
pub const SELECT_SENTINEL_LABEL: &str = "Select an option";

/// The kinds of field a form descriptor may declare.
///
/// This enum is the only list of supported kinds: the JSON Schema `enum` for
/// the `type` property is generated from [`FieldKind::ALL`], and
/// [`FieldKind::control`] is the rendering dispatch. Adding a variant forces
/// both to be updated together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Select,
    Radio,
    TextArea,
}

impl FieldKind {
    /// Every supported kind, in schema order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Select,
        FieldKind::Radio,
        FieldKind::TextArea,
    ];

    /// Wire name of the kind, as it appears in the `type` property
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::TextArea => "textarea",
        }
    }

    /// Whether the kind picks its value from the descriptor's options
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    /// Map a field of this kind to the control that edits it.
    ///
    /// Text-like kinds share the single-line branch, whose `input_type` is the
    /// kind's wire name. A future text-like kind only needs a variant here to
    /// render as a generic single-line control.
    pub fn control(&self, field: &FieldDescriptor) -> Control {
        match self {
            Self::Select => {
                let mut entries = vec![ChoiceEntry {
                    value: String::new(),
                    label: SELECT_SENTINEL_LABEL.to_string(),
                }];
                entries.extend(field.options().iter().map(ChoiceEntry::from));
                Control::Dropdown { entries }
            }
            Self::Radio => Control::RadioGroup {
                group: field.id.clone(),
                entries: field.options().iter().map(ChoiceEntry::from).collect(),
            },
            Self::TextArea => Control::MultiLine {
                placeholder: field.placeholder_or_empty().to_string(),
            },
            Self::Text | Self::Email => Control::SingleLine {
                input_type: self.as_str(),
                placeholder: field.placeholder_or_empty().to_string(),
            },
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable entry of a drop-down or radio group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceEntry {
    pub value: String,
    pub label: String,
}

impl From<&super::descriptor::FieldOption> for ChoiceEntry {
    fn from(option: &super::descriptor::FieldOption) -> Self {
        Self {
            value: option.value.clone(),
            label: option.label.clone(),
        }
    }
}

/// Interactive control produced for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Drop-down list; the first entry is always the empty sentinel
    Dropdown { entries: Vec<ChoiceEntry> },
    /// One radio button per entry, all sharing `group`
    RadioGroup {
        group: String,
        entries: Vec<ChoiceEntry>,
    },
    /// Multi-line text control
    MultiLine { placeholder: String },
    /// Single-line input whose type mirrors the field kind
    SingleLine {
        input_type: &'static str,
        placeholder: String,
    },
}

impl Control {
    pub fn is_multiline(&self) -> bool {
        matches!(self, Control::MultiLine { .. })
    }

    pub fn accepts_text(&self) -> bool {
        matches!(self, Control::MultiLine { .. } | Control::SingleLine { .. })
    }

    pub fn entries(&self) -> &[ChoiceEntry] {
        match self {
            Control::Dropdown { entries } | Control::RadioGroup { entries, .. } => entries,
            Control::MultiLine { .. } | Control::SingleLine { .. } => &[],
        }
    }
}

/// A field descriptor mapped to its labeled control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub id: String,
    pub label: String,
    /// Enforced on submit for every kind, and shown as a `*` marker
    pub required: bool,
    pub kind: FieldKind,
    pub control: Control,
}

/// Map a field descriptor to its control
pub fn render_field(field: &FieldDescriptor) -> RenderedField {
    RenderedField {
        id: field.id.clone(),
        label: field.label.clone(),
        required: field.required,
        kind: field.kind,
        control: field.kind.control(field),
    }
}
