//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a centred button with border.
///
/// `blocker` names what is still missing; the button stays focusable but is
/// drawn dimmed with the reason beside the label.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_focused: bool,
    blocker: Option<&str>,
) {
    let border_style = match (is_focused, blocker) {
        (true, None) => Style::default().fg(Color::Green),
        (true, Some(_)) => Style::default().fg(Color::Cyan),
        (false, _) => Style::default().fg(Color::DarkGray),
    };

    let label_style = match (is_focused, blocker) {
        (true, _) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (false, Some(_)) => Style::default().fg(Color::DarkGray),
        (false, None) => Style::default(),
    };

    let mut spans = vec![Span::styled(format!(" {label} "), label_style)];
    if let Some(reason) = blocker {
        spans.push(Span::styled(
            format!("({reason})"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
