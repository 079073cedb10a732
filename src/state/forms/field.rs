//! Interaction state of a single rendered control

use crate::schema::{render_field, Control, FieldDescriptor, FieldKind, RenderedField};
use crate::state::AnswerMap;

/// A rendered field plus the selection cursor of choice controls.
///
/// Text values are not stored here; they live in the [`AnswerMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldControl {
    pub field: RenderedField,
    /// Selected entry of a drop-down (starts on the sentinel) or radio group
    /// (starts unselected). Always `None` for text controls.
    pub selected: Option<usize>,
}

impl FieldControl {
    pub fn from_descriptor(descriptor: &FieldDescriptor) -> Self {
        let field = render_field(descriptor);
        let selected = Self::initial_selection(&field.control);
        Self { field, selected }
    }

    fn initial_selection(control: &Control) -> Option<usize> {
        match control {
            Control::Dropdown { .. } => Some(0),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        &self.field.id
    }

    pub fn label(&self) -> &str {
        &self.field.label
    }

    pub fn is_multiline(&self) -> bool {
        self.field.control.is_multiline()
    }

    pub fn accepts_text(&self) -> bool {
        self.field.control.accepts_text()
    }

    pub fn is_choice(&self) -> bool {
        self.field.kind.is_choice()
    }

    /// Drop the selection back to its initial state
    pub fn reset(&mut self) {
        self.selected = Self::initial_selection(&self.field.control);
    }

    /// Point the selection at the entry matching a previously entered answer
    pub fn restore(&mut self, answers: &AnswerMap) {
        let Some(value) = answers.get(self.id()) else {
            return;
        };
        if let Some(index) = self
            .field
            .control
            .entries()
            .iter()
            .position(|e| e.value == value)
        {
            self.selected = Some(index);
        }
    }

    /// Move the selection of a choice control.
    ///
    /// Returns the newly selected value, which the caller reports as a field
    /// change. Text controls and empty option lists return `None`.
    pub fn cycle(&mut self, forward: bool) -> Option<String> {
        let entries = self.field.control.entries();
        if entries.is_empty() {
            return None;
        }
        let count = entries.len();
        let next = match (self.selected, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.selected = Some(next);
        Some(entries[next].value.clone())
    }

    /// Text shown for the current value
    pub fn display_value(&self, answers: &AnswerMap) -> String {
        match &self.field.control {
            Control::SingleLine { .. } | Control::MultiLine { .. } => {
                answers.value(self.id()).to_string()
            }
            Control::Dropdown { entries } | Control::RadioGroup { entries, .. } => self
                .selected
                .and_then(|i| entries.get(i))
                .map(|e| e.label.clone())
                .unwrap_or_default(),
        }
    }

    /// Check the answer against the control's constraints
    pub fn check(&self, answers: &AnswerMap) -> Option<ConstraintViolation> {
        let value = answers.value(self.id());
        if self.field.required && value.is_empty() {
            return Some(ConstraintViolation::Missing {
                label: self.label().to_string(),
            });
        }
        if self.field.kind == FieldKind::Email && !value.is_empty() && !looks_like_email(value) {
            return Some(ConstraintViolation::InvalidEmail {
                label: self.label().to_string(),
            });
        }
        None
    }
}

/// A control whose answer blocks submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    Missing { label: String },
    InvalidEmail { label: String },
}

impl std::fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { label } => write!(f, "Please fill out this field: {label}"),
            Self::InvalidEmail { label } => {
                write!(f, "Please enter an email address: {label}")
            }
        }
    }
}

/// Loose approximation of a browser's `type=email` check: `local@domain`
/// with no whitespace and a non-empty part on each side
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldOption;
    use pretty_assertions::assert_eq;

    fn descriptor(kind: FieldKind, required: bool) -> FieldDescriptor {
        FieldDescriptor {
            id: "f".to_string(),
            kind,
            label: "Field".to_string(),
            required,
            placeholder: None,
            options: kind.is_choice().then(|| {
                vec![
                    FieldOption {
                        value: "r".to_string(),
                        label: "Red".to_string(),
                    },
                    FieldOption {
                        value: "g".to_string(),
                        label: "Green".to_string(),
                    },
                ]
            }),
        }
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_dropdown_starts_on_sentinel() {
            let control = FieldControl::from_descriptor(&descriptor(FieldKind::Select, true));
            assert_eq!(control.selected, Some(0));
            assert_eq!(
                control.display_value(&AnswerMap::default()),
                "Select an option"
            );
        }

        #[test]
        fn test_dropdown_cycle_wraps_through_sentinel() {
            let mut control = FieldControl::from_descriptor(&descriptor(FieldKind::Select, true));
            assert_eq!(control.cycle(true), Some("r".to_string()));
            assert_eq!(control.cycle(true), Some("g".to_string()));
            assert_eq!(control.cycle(true), Some(String::new()));
            assert_eq!(control.cycle(false), Some("g".to_string()));
        }

        #[test]
        fn test_radio_starts_unselected() {
            let mut control = FieldControl::from_descriptor(&descriptor(FieldKind::Radio, true));
            assert_eq!(control.selected, None);
            assert_eq!(control.display_value(&AnswerMap::default()), "");
            assert_eq!(control.cycle(false), Some("g".to_string()));
            assert_eq!(control.display_value(&AnswerMap::default()), "Green");
        }

        #[test]
        fn test_text_controls_do_not_cycle() {
            let mut control = FieldControl::from_descriptor(&descriptor(FieldKind::Text, true));
            assert_eq!(control.cycle(true), None);
            assert!(control.accepts_text());
            assert!(!control.is_choice());
        }

        #[test]
        fn test_reset_restores_initial() {
            let mut control = FieldControl::from_descriptor(&descriptor(FieldKind::Radio, true));
            control.cycle(true);
            control.reset();
            assert_eq!(control.selected, None);
        }

        #[test]
        fn test_restore_from_answers() {
            let mut control = FieldControl::from_descriptor(&descriptor(FieldKind::Select, true));
            control.restore(&AnswerMap::default().with_answer("f", "g"));
            assert_eq!(control.selected, Some(2));

            control.restore(&AnswerMap::default().with_answer("f", "unknown"));
            assert_eq!(control.selected, Some(2));
        }
    }

    mod constraints {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_textarea_is_enforced() {
            let control = FieldControl::from_descriptor(&descriptor(FieldKind::TextArea, true));
            assert_eq!(
                control.check(&AnswerMap::default()),
                Some(ConstraintViolation::Missing {
                    label: "Field".to_string()
                })
            );
            let answers = AnswerMap::default().with_answer("f", "hello");
            assert_eq!(control.check(&answers), None);
        }

        #[test]
        fn test_optional_empty_passes() {
            let control = FieldControl::from_descriptor(&descriptor(FieldKind::Email, false));
            assert_eq!(control.check(&AnswerMap::default()), None);
        }

        #[test]
        fn test_required_select_sentinel_is_missing() {
            let control = FieldControl::from_descriptor(&descriptor(FieldKind::Select, true));
            let answers = AnswerMap::default().with_answer("f", "");
            assert!(matches!(
                control.check(&answers),
                Some(ConstraintViolation::Missing { .. })
            ));
        }

        #[test]
        fn test_email_format() {
            let control = FieldControl::from_descriptor(&descriptor(FieldKind::Email, true));
            for bad in ["ada", "@example.com", "ada@", "a b@c", "a@b@c"] {
                let answers = AnswerMap::default().with_answer("f", bad);
                assert!(
                    matches!(
                        control.check(&answers),
                        Some(ConstraintViolation::InvalidEmail { .. })
                    ),
                    "{bad}"
                );
            }
            let answers = AnswerMap::default().with_answer("f", "ada@example.com");
            assert_eq!(control.check(&answers), None);
        }

        #[test]
        fn test_violation_messages() {
            let missing = ConstraintViolation::Missing {
                label: "Name".to_string(),
            };
            assert_eq!(missing.to_string(), "Please fill out this field: Name");
            let email = ConstraintViolation::InvalidEmail {
                label: "Email".to_string(),
            };
            assert_eq!(email.to_string(), "Please enter an email address: Email");
        }
    }
}
