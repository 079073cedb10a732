//! Application state definitions

use super::forms::FormState;
use super::{AnswerMap, InputBuffer, Submission};
use crate::schema::FormDescriptor;
use crate::validation::DescriptorError;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Which pane receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Editor,
    Form,
}

impl Focus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Editor => "Editor",
            Self::Form => "Form",
        }
    }
}

/// Modal message shown over the whole screen until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogMessage {
    pub title: String,
    pub message: String,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Input pane
    pub focus: Focus,
    pub input: InputBuffer,
    /// Error for the current input; empty when there is nothing to report
    pub error: String,

    // Generated form
    pub descriptor: Option<FormDescriptor>,
    pub form: FormState,
    pub answers: AnswerMap,
    /// Identity of the last descriptor that was rendered
    descriptor_fingerprint: Option<u64>,
    pub reset_answers_on_schema_change: bool,

    // Feedback
    pub status_message: Option<String>,
    pub dialog: Option<DialogMessage>,
    pub last_submission: Option<Submission>,
}

impl AppState {
    pub fn new(reset_answers_on_schema_change: bool) -> Self {
        Self {
            reset_answers_on_schema_change,
            ..Default::default()
        }
    }

    /// Apply the result of running the pipeline on the current input.
    ///
    /// The error text and the descriptor are replaced wholesale on every call.
    pub fn apply_input_outcome(&mut self, outcome: Result<Option<FormDescriptor>, DescriptorError>) {
        match outcome {
            Ok(None) => {
                self.error.clear();
                self.clear_descriptor();
            }
            Err(err) => {
                tracing::debug!("Descriptor rejected: {err}");
                self.error = err.to_string();
                self.clear_descriptor();
            }
            Ok(Some(descriptor)) => {
                self.error.clear();
                self.replace_descriptor(descriptor);
            }
        }
    }

    fn clear_descriptor(&mut self) {
        self.descriptor = None;
        self.form = FormState::default();
        self.focus = Focus::Editor;
    }

    fn replace_descriptor(&mut self, descriptor: FormDescriptor) {
        let fingerprint = fingerprint(&descriptor);
        let changed = self.descriptor_fingerprint != Some(fingerprint);

        if changed {
            tracing::info!(
                title = %descriptor.form_title,
                fields = descriptor.fields.len(),
                "Rendering new form"
            );
            if self.reset_answers_on_schema_change {
                self.answers = AnswerMap::default();
            }
        }

        // An identical descriptor that is still on screen keeps its focus.
        if changed || self.descriptor.is_none() {
            self.form = FormState::from_descriptor(&descriptor);
            self.form.restore_selections(&self.answers);
        }

        self.descriptor_fingerprint = Some(fingerprint);
        self.descriptor = Some(descriptor);
    }

    pub fn has_form(&self) -> bool {
        self.descriptor.is_some()
    }

    /// Record a new value for a field; every other answer is left as is
    pub fn on_field_change(&mut self, id: &str, value: impl Into<String>) {
        self.answers = self.answers.with_answer(id, value);
    }

    /// Append a char to the focused text control
    pub fn form_input_char(&mut self, c: char) {
        self.edit_active_text(|value| value.push(c));
    }

    /// Append pasted text to the focused text control
    pub fn form_input_str(&mut self, s: &str) {
        let multiline = self.form.is_active_field_multiline();
        self.edit_active_text(|value| {
            if multiline {
                value.push_str(&s.replace("\r\n", "\n"));
            } else {
                value.extend(s.chars().filter(|c| *c != '\n' && *c != '\r'));
            }
        });
    }

    /// Remove the last char of the focused text control
    pub fn form_backspace(&mut self) {
        self.edit_active_text(|value| {
            value.pop();
        });
    }

    fn edit_active_text(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(control) = self.form.active_control() else {
            return;
        };
        if !control.accepts_text() {
            return;
        }
        let id = control.id().to_string();
        let mut value = self.answers.value(&id).to_string();
        edit(&mut value);
        self.on_field_change(&id, value);
    }

    /// Move the selection of the focused drop-down or radio group
    pub fn cycle_active_choice(&mut self, forward: bool) {
        let Some(control) = self.form.active_control_mut() else {
            return;
        };
        if let Some(value) = control.cycle(forward) {
            let id = control.id().to_string();
            self.on_field_change(&id, value);
        }
    }

    /// Move key input to the form, if one is rendered
    pub fn focus_form(&mut self) -> bool {
        if self.has_form() {
            self.focus = Focus::Form;
            true
        } else {
            false
        }
    }

    pub fn focus_editor(&mut self) {
        self.focus = Focus::Editor;
    }

    /// Accept the current answers if every control constraint holds.
    ///
    /// On success the answers and selections are discarded and an
    /// acknowledgment dialog is queued. On failure focus moves to the first
    /// offending control and the status bar says why.
    pub fn submit(&mut self) -> Option<Submission> {
        let title = self.descriptor.as_ref()?.form_title.clone();

        if let Some((index, violation)) = self.form.first_violation(&self.answers) {
            self.focus = Focus::Form;
            self.form.set_active_field(index);
            self.status_message = Some(violation.to_string());
            return None;
        }

        let submission = Submission::new(title, std::mem::take(&mut self.answers));
        self.form.reset();
        self.status_message = Some(submission.summary());
        self.dialog = Some(DialogMessage {
            title: "Submitted".to_string(),
            message: "Form submitted successfully!".to_string(),
        });
        self.last_submission = Some(submission.clone());
        Some(submission)
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}

fn fingerprint(descriptor: &FormDescriptor) -> u64 {
    let mut hasher = DefaultHasher::new();
    descriptor.hash(&mut hasher);
    hasher.finish()
}
