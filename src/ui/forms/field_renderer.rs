//! Field rendering utilities for forms

use crate::schema::Control;
use crate::state::{AnswerMap, FieldControl};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Tallest a multi-line control grows before its text is cut off
const MAX_MULTILINE_HEIGHT: u16 = 8;

/// Tallest a radio group grows; longer option lists scroll with the selection
const MAX_RADIO_HEIGHT: u16 = 12;

/// Rows a control occupies, borders included
pub fn field_height(control: &FieldControl, answers: &AnswerMap) -> u16 {
    match &control.field.control {
        Control::SingleLine { .. } | Control::Dropdown { .. } => 3,
        Control::MultiLine { .. } => {
            let lines = answers
                .value(control.id())
                .split('\n')
                .count()
                .min(usize::from(MAX_MULTILINE_HEIGHT)) as u16;
            (lines + 2).clamp(4, MAX_MULTILINE_HEIGHT)
        }
        Control::RadioGroup { entries, .. } => {
            let rows = entries.len().clamp(1, usize::from(MAX_RADIO_HEIGHT - 2)) as u16;
            rows + 2
        }
    }
}

/// Draw one control with its label and required marker
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    control: &FieldControl,
    answers: &AnswerMap,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::raw(format!(" {} ", control.label()))];
    if control.field.required {
        title.push(Span::styled(
            "* ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = match &control.field.control {
        Control::SingleLine {
            input_type,
            placeholder,
        } => {
            block = block.title(Line::from(format!(" {input_type} ")).right_aligned());
            Paragraph::new(text_lines(
                answers.value(control.id()),
                placeholder,
                is_active,
                false,
            ))
        }
        Control::MultiLine { placeholder } => Paragraph::new(text_lines(
            answers.value(control.id()),
            placeholder,
            is_active,
            true,
        )),
        Control::Dropdown { .. } => {
            let label = control.display_value(answers);
            let style = if control.selected.unwrap_or(0) == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            let mut spans = Vec::new();
            if is_active {
                spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
            }
            spans.push(Span::styled(label, style));
            spans.push(Span::styled(
                if is_active { " ▶" } else { " ▾" },
                Style::default().fg(Color::Cyan),
            ));
            Paragraph::new(Line::from(spans))
        }
        Control::RadioGroup { group, entries } => {
            block = block.title(Line::from(format!(" {group} ")).right_aligned());
            let lines: Vec<Line> = if entries.is_empty() {
                vec![Line::from(Span::styled(
                    "(no options)",
                    Style::default().fg(Color::DarkGray),
                ))]
            } else {
                let visible = usize::from(area.height.saturating_sub(2)).max(1);
                let first = control
                    .selected
                    .map_or(0, |i| (i + 1).saturating_sub(visible));
                entries
                    .iter()
                    .enumerate()
                    .skip(first)
                    .take(visible)
                    .map(|(i, entry)| {
                        let checked = control.selected == Some(i);
                        let marker = if checked { "(•) " } else { "( ) " };
                        let style = if checked && is_active {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else if checked {
                            Style::default().add_modifier(Modifier::BOLD)
                        } else {
                            Style::default()
                        };
                        Line::from(Span::styled(format!("{marker}{}", entry.label), style))
                    })
                    .collect()
            };
            Paragraph::new(lines)
        }
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Lines for a text control, falling back to the placeholder when empty
fn text_lines<'a>(
    value: &'a str,
    placeholder: &'a str,
    is_active: bool,
    is_multiline: bool,
) -> Vec<Line<'a>> {
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));

    if value.is_empty() {
        let mut spans = vec![cursor];
        if !placeholder.is_empty() {
            spans.push(Span::styled(
                placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        return vec![Line::from(spans)];
    }

    let mut lines: Vec<Line> = if is_multiline {
        value.split('\n').map(Line::from).collect()
    } else {
        vec![Line::from(value)]
    };

    // Keep the cursor on the last visible line of a multi-line value
    if is_multiline && lines.len() > usize::from(MAX_MULTILINE_HEIGHT - 2) {
        let skip = lines.len() - usize::from(MAX_MULTILINE_HEIGHT - 2);
        lines.drain(..skip);
    }

    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }
    lines
}
