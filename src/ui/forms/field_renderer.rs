//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a single-line text field, showing its placeholder while empty
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let value = field.as_text();
    let cursor = if is_active { "▌" } else { "" };

    let value_span = match (&field.placeholder, value.is_empty()) {
        (Some(placeholder), true) => {
            Span::styled(placeholder.as_str(), Style::default().fg(Color::DarkGray))
        }
        (None, true) if !is_active => {
            Span::styled("(empty)", Style::default().fg(Color::DarkGray))
        }
        _ if is_active => Span::styled(value, Style::default().fg(Color::White)),
        _ => Span::styled(value, Style::default().fg(Color::Gray)),
    };

    // Placeholder sits after the cursor so typing appears where the cursor is
    let line = if value.is_empty() && is_active {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            value_span,
        ])
    } else {
        Line::from(vec![
            value_span,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw a checkbox field
pub fn draw_checkbox_field(frame: &mut Frame, area: Rect, field: &FormField, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(field.display_value())
        .style(style)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Draw a one-line selector listing every option, the chosen one marked
pub fn draw_selector_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    options: &[&str],
    selected: usize,
    is_active: bool,
) {
    let chosen_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = Vec::with_capacity(options.len() * 2);
    for (idx, option) in options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        if idx == selected {
            spans.push(Span::styled(format!("‹{option}›"), chosen_style));
        } else {
            spans.push(Span::styled(
                format!(" {option} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw key hints under a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, spans: Vec<Span>) {
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
