//! Application state module

mod app_state;
mod consent;
mod forms;
mod output;

pub use app_state::*;
pub use consent::*;
pub use forms::*;
pub use output::*;
