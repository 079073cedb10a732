//! Acknowledgment dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::DialogMessage;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a dismissible message overlay centered on the screen
pub fn render_message_dialog(frame: &mut Frame, dialog: &DialogMessage) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &dialog.title,
            accent: Color::Green,
            message: &dialog.message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
