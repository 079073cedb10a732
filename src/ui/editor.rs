//! JSON input pane

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const INPUT_PLACEHOLDER: &str = "Paste your JSON schema here...";

/// Most rows the inline error may take below the editor
const MAX_ERROR_HEIGHT: u16 = 6;

/// Draw the input editor with the inline error below it
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let is_focused = state.focus == Focus::Editor;

    let error_height = error_height(&state.error, area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(error_height)])
        .split(area);

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Paste JSON Schema ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(chunks[0]);

    let (line, col) = state.input.cursor_position();
    let scroll_y = (line as u16).saturating_sub(inner.height.saturating_sub(1));
    let scroll_x = (col as u16).saturating_sub(inner.width.saturating_sub(1));

    let content = if state.input.is_empty() {
        Paragraph::new(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let lines: Vec<Line> = state
            .input
            .text()
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        Paragraph::new(lines).scroll((scroll_y, scroll_x))
    };
    frame.render_widget(content.block(block), chunks[0]);

    if is_focused && !state.has_dialog() && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((
            inner.x + col as u16 - scroll_x,
            inner.y + line as u16 - scroll_y,
        ));
    }

    if !state.error.is_empty() {
        let error = Paragraph::new(Span::styled(
            state.error.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: false });
        frame.render_widget(error, chunks[1]);
    }
}

/// Rows needed to show the error wrapped to `width`
fn error_height(error: &str, width: u16) -> u16 {
    if error.is_empty() || width == 0 {
        return 0;
    }
    let chars = error.chars().count().min(u16::MAX as usize) as u16;
    chars.div_ceil(width).clamp(1, MAX_ERROR_HEIGHT)
}
