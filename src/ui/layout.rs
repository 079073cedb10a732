//! Layout components (header, panes, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, PASTE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Focus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Application title shown in the header
pub const APP_TITLE: &str = "Dynamic Form Generator";

/// Screen regions
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub editor: Rect,
    pub form: Rect,
    pub status: Rect,
}

/// Create the main layout: header, editor and form side by side, status bar
pub fn create_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    AppLayout {
        header: rows[0],
        editor: panes[0],
        form: panes[1],
        status: rows[2],
    }
}

/// Draw the header line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.focus.label()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_focus_hints(app.state.focus),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^Q:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused pane
fn get_focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Editor => format!("Tab:form  {PASTE_SHORTCUT}:paste  {CLEAR_SHORTCUT}:clear"),
        Focus::Form => {
            format!("Tab:next  ←/→:choose  {SUBMIT_SHORTCUT}:submit  Esc:editor")
        }
    }
}
