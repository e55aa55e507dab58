//! Layout and status bar

use crate::app::App;
use crate::state::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form is allowed to grow
const MAX_CONTENT_WIDTH: u16 = 72;

/// Split the screen into a centered content column and a status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let width = rows[0].width.min(MAX_CONTENT_WIDTH);
    let content = Rect {
        x: rows[0].x + (rows[0].width - width) / 2,
        width,
        ..rows[0]
    };

    (content, rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state.submission_state();
    let indicator = match state {
        SubmissionState::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        SubmissionState::Submitting => Span::styled(" ● ", Style::default().fg(Color::Yellow)),
        SubmissionState::Submitted => Span::styled(" ● ", Style::default().fg(Color::Green)),
    };

    let spans = vec![
        indicator,
        Span::styled(state.label(), Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled(app.endpoint.as_str(), Style::default().fg(Color::Blue)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
