//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// Wraps `render_stateful_widget` with a `ListState`, so long lists scroll
/// to keep the highlighted row in view on short terminals.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
