//! Layout components (main area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(" 🔒 ", Style::default().fg(Color::Green))];

    // View-specific hints
    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Consent => "Space:tick  Enter:continue  q:quit",
        View::Form => "Tab:next  Space:tick  ^G:generate  ^N:clear  ^D:save defaults",
        View::Output => "Tab:switch email  s/b/a:copy  j/k:scroll  n:new  Esc:edit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let main = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 23);
        assert_eq!(main.width, 80);
    }

    #[test]
    fn test_every_view_has_hints() {
        for view in [View::Consent, View::Form, View::Output] {
            assert!(!get_view_hints(view).is_empty());
        }
    }
}
