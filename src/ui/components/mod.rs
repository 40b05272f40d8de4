//! Reusable UI components

mod button;
mod caption;
mod dialog;

pub use button::render_button;
pub use caption::draw_data_protection_caption;
pub use dialog::{render_dialog, render_error_dialog, DialogConfig};
