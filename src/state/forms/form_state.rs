//! Focus and control state of the generated form

use super::field::{ConstraintViolation, FieldControl};
use crate::schema::FormDescriptor;
use crate::state::AnswerMap;

/// Controls of the rendered form plus the focused row.
///
/// Rows are the controls in descriptor order followed by the Submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub controls: Vec<FieldControl>,
    pub active_field_index: usize,
}

impl FormState {
    pub fn from_descriptor(descriptor: &FormDescriptor) -> Self {
        Self {
            controls: descriptor
                .fields
                .iter()
                .map(FieldControl::from_descriptor)
                .collect(),
            active_field_index: 0,
        }
    }

    /// Number of focusable rows, including the Submit button
    pub fn field_count(&self) -> usize {
        self.controls.len() + 1
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.controls.len());
    }

    pub fn next_field(&mut self) {
        let count = self.field_count();
        self.set_active_field((self.active_field_index + 1) % count);
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.set_active_field(self.field_count() - 1);
        } else {
            self.set_active_field(self.active_field_index - 1);
        }
    }

    /// Returns true if the Submit button row is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.controls.len()
    }

    pub fn active_control(&self) -> Option<&FieldControl> {
        self.controls.get(self.active_field_index)
    }

    pub fn active_control_mut(&mut self) -> Option<&mut FieldControl> {
        self.controls.get_mut(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_control().is_some_and(FieldControl::is_multiline)
    }

    /// First control, in form order, whose answer blocks submission
    pub fn first_violation(&self, answers: &AnswerMap) -> Option<(usize, ConstraintViolation)> {
        self.controls
            .iter()
            .enumerate()
            .find_map(|(index, control)| control.check(answers).map(|v| (index, v)))
    }

    /// Re-point choice selections at answers entered before a rebuild
    pub fn restore_selections(&mut self, answers: &AnswerMap) {
        for control in &mut self.controls {
            control.restore(answers);
        }
    }

    /// Clear all selections and focus the first row
    pub fn reset(&mut self) {
        for control in &mut self.controls {
            control.reset();
        }
        self.active_field_index = 0;
    }
}
