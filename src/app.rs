//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Focus};
use crate::validation::{evaluate_input, JsonSchemaValidator, SchemaValidator};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Validator compiled once at startup and reused for every keystroke
    validator: Box<dyn SchemaValidator>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let validator = JsonSchemaValidator::new()?;
        Ok(Self::with_validator(Box::new(validator), config))
    }

    pub fn with_validator(validator: Box<dyn SchemaValidator>, config: &TuiConfig) -> Self {
        Self {
            state: AppState::new(config.reset_answers_on_schema_change()),
            validator,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Re-run the whole pipeline on the current input text
    pub fn on_input_change(&mut self) {
        let outcome = evaluate_input(self.state.input.text(), self.validator.as_ref());
        self.state.apply_input_outcome(outcome);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle dialog dismissal first (modal)
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.on_submit();
                return Ok(());
            }
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_from_clipboard();
                return Ok(());
            }
            _ => {}
        }

        match self.state.focus {
            Focus::Editor => self.handle_editor_key(key),
            Focus::Form => self.handle_form_key(key),
        }
        Ok(())
    }

    /// Handle keys while the JSON input pane is focused
    fn handle_editor_key(&mut self, key: KeyEvent) {
        let input = &mut self.state.input;
        let changed = match key.code {
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.clear();
                true
            }
            KeyCode::Tab => {
                if !self.state.focus_form() {
                    self.state.status_message = Some("No form to focus yet".to_string());
                }
                false
            }
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                false
            }
            KeyCode::Char(c) => {
                input.insert_char(c);
                true
            }
            KeyCode::Enter => {
                input.insert_char('\n');
                true
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => {
                input.move_left();
                false
            }
            KeyCode::Right => {
                input.move_right();
                false
            }
            KeyCode::Up => {
                input.move_up();
                false
            }
            KeyCode::Down => {
                input.move_down();
                false
            }
            KeyCode::Home => {
                input.move_line_start();
                false
            }
            KeyCode::End => {
                input.move_line_end();
                false
            }
            _ => false,
        };

        if changed {
            self.on_input_change();
        }
    }

    /// Handle keys while the generated form is focused
    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Esc => self.state.focus_editor(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left => self.state.cycle_active_choice(false),
            KeyCode::Right => self.state.cycle_active_choice(true),
            KeyCode::Enter => {
                // Enter adds a newline in multi-line controls, submits elsewhere
                if form.is_active_field_multiline() {
                    self.state.form_input_char('\n');
                } else {
                    self.on_submit();
                }
            }
            KeyCode::Char(' ') if form.active_control().is_some_and(|c| c.is_choice()) => {
                self.state.cycle_active_choice(true);
            }
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Handle a bracketed paste from the terminal
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_dialog() {
            return;
        }
        match self.state.focus {
            Focus::Editor => {
                self.state.input.insert_str(text);
                self.on_input_change();
            }
            Focus::Form => self.state.form_input_str(text),
        }
    }

    /// Submit the generated form
    pub fn on_submit(&mut self) {
        if !self.state.has_form() {
            self.state.status_message = Some("Nothing to submit".to_string());
            return;
        }

        match self.state.submit() {
            Some(submission) => {
                let answers = serde_json::to_string(&submission.answers).unwrap_or_default();
                tracing::info!(
                    id = %submission.id,
                    title = %submission.form_title,
                    submitted_at = %submission.submitted_at,
                    %answers,
                    "Form submitted"
                );
            }
            None => {
                if let Some(reason) = &self.state.status_message {
                    tracing::debug!("Submission blocked: {reason}");
                }
            }
        }
    }

    fn paste_from_clipboard(&mut self) {
        match Self::read_clipboard() {
            Ok(text) => self.handle_paste(&text),
            Err(err) => {
                tracing::warn!("Clipboard read failed: {err:?}");
                self.state.status_message = Some(format!("Clipboard unavailable: {err}"));
            }
        }
    }

    fn read_clipboard() -> Result<String> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        Ok(clipboard.get_text()?)
    }
}
