//! Email template rendering
//!
//! Turns a validated [`RequestInput`] into the primary document request
//! email and the optional follow-up reminders. Rendering is pure: no I/O,
//! no shared state, nothing logged except counts.

mod catalog;
mod deadline;
mod error;
mod render;
mod templates;

pub use catalog::DOCUMENT_CATALOG;
pub use deadline::{DeadlineOffset, DeadlineSpec};
pub use error::ValidationError;
pub use render::{render, EmailKind, FollowUpSelection, RenderedEmail, RenderedEmails, RequestInput};
