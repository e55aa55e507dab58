//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Border color for a field: errors win over focus
fn border_color(is_active: bool, has_error: bool) -> Color {
    if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw a form field, outlined in red when it has an error
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if field.is_empty() {
        Paragraph::new(Line::from(vec![
            cursor,
            Span::styled(
                field.name.placeholder(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.as_text(), text_style),
            cursor,
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, has_error)));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the error line under a field (blank when there is none)
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, area);
    }
}
