//! UI module for rendering the TUI

mod components;
mod editor;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header);
    editor::draw(frame, areas.editor, app);
    forms::draw_form_preview(frame, areas.form, app);
    layout::draw_status_bar(frame, areas.status, app);

    // Modal overlay last so it sits on top
    if let Some(dialog) = &app.state.dialog {
        components::render_message_dialog(frame, dialog);
    }
}
