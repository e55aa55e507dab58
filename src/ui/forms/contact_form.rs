//! Contact form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::state::{AppState, Form};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form with inline field errors
pub fn draw_contact_form(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    submit_label: &str,
    submit_enabled: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Phone
            Constraint::Length(1),             // Phone error
            Constraint::Min(4),                // Message
            Constraint::Length(1),             // Message error
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let form = &state.form;
    for index in 0..form.field_count() {
        let Some(field) = form.get_field(index) else {
            continue;
        };
        draw_field(
            frame,
            chunks[index * 2],
            field,
            form.active_field() == index,
            state.errors.contains(field.name),
        );
        draw_field_error(frame, chunks[index * 2 + 1], state.errors.get(field.name));
    }

    render_button(
        frame,
        chunks[8],
        submit_label,
        form.is_submit_active(),
        submit_enabled,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[9]);
}
