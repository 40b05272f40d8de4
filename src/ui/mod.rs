//! UI module for rendering the TUI

mod components;
mod consent;
mod forms;
mod layout;
mod output;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Consent => consent::draw(frame, app),
        View::Form => forms::draw_request_form(frame, main_area, app),
        View::Output => output::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Errors sit on top of everything else
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
