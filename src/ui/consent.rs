//! Data protection notice shown before the form

use super::components::{render_dialog, DialogConfig};
use crate::app::App;
use crate::state::{CONSENT_STATEMENT, GDPR_NOTICE};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Draw the notice and the confirmation checkbox as a centred dialog
pub fn draw(frame: &mut Frame, app: &App) {
    let checkbox = if app.state.consent.statement_ticked {
        "[x]"
    } else {
        "[ ]"
    };
    let message = format!("{GDPR_NOTICE}\n\n{checkbox} {CONSENT_STATEMENT}");

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Space", key_style),
        Span::raw(": tick  "),
        Span::styled("Enter", key_style),
        Span::raw(": continue  "),
        Span::styled("q", key_style),
        Span::raw(": quit"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "TUS Document Request Generator",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: &message,
            hint: Some(hint),
            max_width: 72,
        },
    );
}
