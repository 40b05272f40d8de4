//! Data protection caption shown under every post-consent view

use crate::state::DATA_PROTECTION_CAPTION;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw_data_protection_caption(frame: &mut Frame, area: Rect) {
    let caption = Paragraph::new(DATA_PROTECTION_CAPTION)
        .wrap(Wrap { trim: true })
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
    frame.render_widget(caption, area);
}
