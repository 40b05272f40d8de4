//! Document request form rendering

use super::field_renderer::{
    draw_checkbox_field, draw_field, draw_help_text, draw_selector_field,
};
use crate::app::App;
use crate::email::DOCUMENT_CATALOG;
use crate::state::{DeadlineChoice, RequestField, RequestForm};
use crate::ui::components::{draw_data_protection_caption, render_button};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// One vertical band of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Names,
    Deadline,
    DeadlineDate,
    Documents,
    EnableFollowUps,
    FollowUps,
    Generate,
    Help,
    Caption,
}

impl Row {
    fn constraint(self) -> Constraint {
        match self {
            Row::Documents => Constraint::Min(4),
            Row::Help | Row::Caption => Constraint::Length(1),
            _ => Constraint::Length(3),
        }
    }
}

fn rows(form: &RequestForm) -> Vec<Row> {
    let mut rows = vec![Row::Names, Row::Deadline];
    if form.is_available(RequestField::DeadlineDate) {
        rows.push(Row::DeadlineDate);
    }
    rows.extend([Row::Documents, Row::EnableFollowUps]);
    if form.enable_follow_ups.is_checked() {
        rows.push(Row::FollowUps);
    }
    rows.extend([Row::Generate, Row::Help, Row::Caption]);
    rows
}

fn two_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the request form
pub fn draw_request_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let active = form.active_field;

    let block = Block::default()
        .title(" Document Request Email Generator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let rows = rows(form);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|r| r.constraint()).collect::<Vec<_>>())
        .margin(1)
        .split(area);

    for (row, chunk) in rows.iter().zip(chunks.iter().copied()) {
        match row {
            Row::Names => {
                let (left, right) = two_columns(chunk);
                draw_field(frame, left, &form.forename, active == RequestField::Forename);
                draw_field(frame, right, &form.programme, active == RequestField::Programme);
            }
            Row::Deadline => {
                let options: Vec<&str> = DeadlineChoice::ALL.iter().map(|c| c.label()).collect();
                let selected = DeadlineChoice::ALL
                    .iter()
                    .position(|c| *c == form.deadline_choice)
                    .unwrap_or(0);
                draw_selector_field(
                    frame,
                    chunk,
                    "Deadline",
                    &options,
                    selected,
                    active == RequestField::Deadline,
                );
            }
            Row::DeadlineDate => draw_field(
                frame,
                chunk,
                &form.deadline_date,
                active == RequestField::DeadlineDate,
            ),
            Row::Documents => draw_documents(frame, chunk, form, active == RequestField::Documents),
            Row::EnableFollowUps => draw_checkbox_field(
                frame,
                chunk,
                &form.enable_follow_ups,
                active == RequestField::EnableFollowUps,
            ),
            Row::FollowUps => {
                let (left, right) = two_columns(chunk);
                draw_checkbox_field(
                    frame,
                    left,
                    &form.gentle_reminder,
                    active == RequestField::GentleReminder,
                );
                draw_checkbox_field(
                    frame,
                    right,
                    &form.final_check_in,
                    active == RequestField::FinalCheckIn,
                );
            }
            Row::Generate => render_button(
                frame,
                chunk,
                "Generate Email",
                active == RequestField::Generate,
                generate_blocker(form),
            ),
            Row::Help => draw_help_text(frame, chunk, help_spans(active)),
            Row::Caption => draw_data_protection_caption(frame, chunk),
        }
    }
}

/// What still keeps the request from rendering, if anything
fn generate_blocker(form: &RequestForm) -> Option<&'static str> {
    if form.forename.as_text().trim().is_empty() || form.programme.as_text().trim().is_empty() {
        Some("enter forename and programme")
    } else if form.documents.selected_count() == 0 {
        Some("select at least one document")
    } else {
        None
    }
}

/// Catalog checklist; ticked entries show their position in the email
fn draw_documents(frame: &mut Frame, area: Rect, form: &RequestForm, is_active: bool) {
    let checklist = &form.documents;
    let items: Vec<ListItem> = DOCUMENT_CATALOG
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let mut spans = match checklist.selection_rank(idx) {
                Some(rank) => vec![
                    Span::styled("[x] ", Style::default().fg(Color::Green)),
                    Span::raw(label.to_string()),
                    Span::styled(format!("  #{rank}"), Style::default().fg(Color::DarkGray)),
                ],
                None => vec![Span::raw("[ ] "), Span::raw(label.to_string())],
            };
            if is_active && idx == checklist.cursor {
                spans.insert(0, Span::styled("› ", Style::default().fg(Color::Cyan)));
            } else {
                spans.insert(0, Span::raw("  "));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = format!(
        " Required Documents ({} selected) ",
        checklist.selected_count()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(if is_active {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        });

    render_scrollable_list(frame, area, list, checklist.cursor);
}

fn help_spans(active: RequestField) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let mut spans = match active {
        RequestField::Deadline => vec![key("←/→"), Span::raw(": change  ")],
        RequestField::Documents => vec![
            key("↑/↓"),
            Span::raw(": move  "),
            key("Space"),
            Span::raw(": tick  "),
        ],
        RequestField::EnableFollowUps
        | RequestField::GentleReminder
        | RequestField::FinalCheckIn => vec![key("Space"), Span::raw(": toggle  ")],
        RequestField::Generate => vec![key("Enter"), Span::raw(": generate  ")],
        RequestField::Forename | RequestField::Programme | RequestField::DeadlineDate => {
            vec![key("Ctrl+U"), Span::raw(": clear  ")]
        }
    };
    spans.extend([
        key("Tab"),
        Span::raw(": next field  "),
        key("Ctrl+G"),
        Span::raw(": generate"),
    ]);
    spans
}
