//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Horizontal padding inside the borders, both sides together
const PADDING: u16 = 4;

/// Size of the dialog box for the given wrapped content
fn dialog_size(config: &DialogConfig, lines: &[String]) -> (u16, u16) {
    let hint_width = config
        .hint
        .iter()
        .map(|spans| spans.iter().map(|s| s.content.chars().count()).sum::<usize>());
    let widest = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(config.title.chars().count()))
        .chain(hint_width)
        .max()
        .unwrap_or(0) as u16;
    let width = (widest + PADDING + 2).min(config.max_width);

    // Title, blank, message, then blank + hint if present, plus borders
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = 2 + lines.len() as u16 + hint_rows + 2;
    (width, height)
}

/// Render a dialog centered over the whole frame
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let max_line = config.max_width.saturating_sub(PADDING + 2).max(1) as usize;
    let wrapped = wrap_text(config.message, max_line);

    let (width, height) = dialog_size(&config, &wrapped);
    let width = width.min(area.width);
    let height = height.min(area.height);
    let dialog_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint));
    }

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(config.accent))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(dialog, dialog_area);
}

/// Greedy word wrap, keeping explicit line breaks
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}
