//! Form domain layer
//!
//! Raw field values for the request form and their conversion into a
//! renderer input.

mod checklist;
mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{DeadlineChoice, FormError, RequestField, RequestForm};
