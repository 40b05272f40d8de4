//! Generated email display

use super::components::draw_data_protection_caption;
use crate::app::App;
use crate::email::EmailKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

fn tab_title(kind: EmailKind) -> String {
    match kind {
        EmailKind::Primary => kind.label().to_string(),
        _ => format!("📩 {}", kind.label()),
    }
}

/// Draw the rendered emails as read-only text
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(output) = &app.state.output else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Length(3), // Subject
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Caption
        ])
        .split(area);

    let titles: Vec<String> = output
        .emails
        .entries()
        .iter()
        .map(|(kind, _)| tab_title(*kind))
        .collect();
    let tabs = Tabs::new(titles)
        .select(output.selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Generated Emails ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(tabs, chunks[0]);

    let (_, email) = output.selected_email();

    let subject = Paragraph::new(email.subject.as_str()).block(
        Block::default()
            .title(Line::from(vec![
                Span::raw(" Subject (copy into Prospect) "),
                Span::styled("[s] ", Style::default().fg(Color::Cyan)),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(subject, chunks[1]);

    let body = Paragraph::new(email.body.as_str())
        .wrap(Wrap { trim: false })
        .scroll((output.scroll_offset, 0))
        .block(
            Block::default()
                .title(Line::from(vec![
                    Span::raw(" Email Body (copy into Prospect) "),
                    Span::styled("[b] ", Style::default().fg(Color::Cyan)),
                ]))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(body, chunks[2]);

    draw_data_protection_caption(frame, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_titles() {
        assert_eq!(tab_title(EmailKind::Primary), "Primary");
        assert_eq!(tab_title(EmailKind::GentleReminder), "📩 Follow-Up 1");
        assert_eq!(tab_title(EmailKind::FinalCheckIn), "📩 Follow-Up 2");
    }
}
