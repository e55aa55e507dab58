//! Confirmation view shown after a message is sent

use crate::ui::components::{render_button, BUTTON_HEIGHT};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const THANK_YOU: &str = "Thank you for your message!";
pub const FOLLOW_UP: &str = "We'll get back to you soon.";
pub const RESET_LABEL: &str = "Send another message";

/// Draw the confirmation view
pub fn draw(frame: &mut Frame, area: Rect, submitted_at: Option<DateTime<Local>>) {
    let block = Block::default()
        .title(" Message Sent ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(4),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            THANK_YOU,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(FOLLOW_UP, Style::default().fg(Color::Gray))),
    ];
    if let Some(at) = submitted_at {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Sent at {}", at.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );

    // Keep the button to a readable width in the middle
    let button_width = (RESET_LABEL.len() as u16 + 4).min(chunks[2].width);
    let button_area = Rect {
        x: chunks[2].x + (chunks[2].width - button_width) / 2,
        width: button_width,
        ..chunks[2]
    };
    render_button(frame, button_area, RESET_LABEL, true, true);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": send another message  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}
