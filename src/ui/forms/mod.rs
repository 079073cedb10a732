//! Generated form rendering
//!
//! - `field_renderer`: per-control drawing
//! - this module: the form pane (title, description, controls, Submit)

mod field_renderer;

use field_renderer::{draw_field, field_height};

use crate::app::App;
use crate::schema::FormDescriptor;
use crate::state::{AppState, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const EMPTY_FORM_TEXT: &str =
    "No valid JSON schema provided. Paste your JSON to generate the form.";

/// Draw the generated form pane, or its placeholder
pub fn draw_form_preview(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let border_color = if state.focus == Focus::Form {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Generated Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.descriptor {
        Some(descriptor) => draw_form(frame, inner, state, descriptor),
        None => {
            let placeholder = Paragraph::new(Span::styled(
                EMPTY_FORM_TEXT,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
            .wrap(Wrap { trim: true });
            frame.render_widget(placeholder, inner);
        }
    }
}

fn draw_form(frame: &mut Frame, area: Rect, state: &AppState, descriptor: &FormDescriptor) {
    let header_height = header_height(descriptor, area.width).min(area.height);
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            descriptor.form_title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            descriptor.form_description.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(
        header,
        Rect {
            height: header_height,
            ..area
        },
    );

    let body = Rect {
        y: area.y + header_height,
        height: area.height - header_height,
        ..area
    };

    let is_form_focused = state.focus == Focus::Form;
    let active = state.form.active_field();
    let heights = row_heights(state);
    let first = first_visible_row(&heights, active, body.height);

    let bottom = body.y + body.height;
    let mut y = body.y;
    for (row, height) in heights.iter().enumerate().skip(first) {
        if y >= bottom {
            break;
        }
        // The last visible row may be cut off at the bottom edge
        let row_area = Rect {
            x: body.x,
            y,
            width: body.width,
            height: (*height).min(bottom - y),
        };
        let is_active = is_form_focused && row == active;
        match state.form.controls.get(row) {
            Some(control) => draw_field(frame, row_area, control, &state.answers, is_active),
            None => render_button(
                frame,
                row_area,
                "Submit",
                is_form_focused && state.form.is_submit_active(),
            ),
        }
        y = y.saturating_add(*height);
    }
}

/// Rows for the form title and its wrapped description, plus a spacer
fn header_height(descriptor: &FormDescriptor, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let description = descriptor
        .form_description
        .chars()
        .count()
        .min(u16::MAX as usize) as u16;
    description.div_ceil(width).max(1).saturating_add(2)
}

/// Height of every focusable row, the Submit button last
fn row_heights(state: &AppState) -> Vec<u16> {
    state
        .form
        .controls
        .iter()
        .map(|control| field_height(control, &state.answers))
        .chain(std::iter::once(BUTTON_HEIGHT))
        .collect()
}

/// First row to draw so that the active row fits in `available` rows
fn first_visible_row(heights: &[u16], active: usize, available: u16) -> usize {
    let active = active.min(heights.len().saturating_sub(1));
    let mut first = 0;
    while first < active {
        let used: usize = heights[first..=active].iter().map(|h| usize::from(*h)).sum();
        if used <= usize::from(available) {
            break;
        }
        first += 1;
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visible_row_no_scroll_when_fits() {
        assert_eq!(first_visible_row(&[3, 3, 3], 2, 9), 0);
    }

    #[test]
    fn test_first_visible_row_scrolls_to_active() {
        assert_eq!(first_visible_row(&[3, 3, 3, 3], 3, 7), 2);
        assert_eq!(first_visible_row(&[3, 3, 3, 3], 0, 7), 0);
    }

    #[test]
    fn test_first_visible_row_oversized_active() {
        assert_eq!(first_visible_row(&[3, 8], 1, 4), 1);
    }

    #[test]
    fn test_first_visible_row_sum_exceeding_u16() {
        assert_eq!(first_visible_row(&[u16::MAX, u16::MAX, 3], 2, 20), 2);
    }

    #[test]
    fn test_header_height_wraps_description() {
        let descriptor = FormDescriptor {
            form_title: "T".to_string(),
            form_description: "x".repeat(25),
            fields: Vec::new(),
        };
        assert_eq!(header_height(&descriptor, 10), 5);
        assert_eq!(header_height(&descriptor, 0), 0);
    }
}
