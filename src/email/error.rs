//! Validation errors raised before any email text is built

use thiserror::Error;

/// Why a request could not be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Forename and/or programme are empty after trimming
    #[error("Please enter Student Forename and Programme Name.")]
    MissingDetails {
        missing_forename: bool,
        missing_programme: bool,
    },
    /// No document was selected
    #[error("Please select at least one document.")]
    NoDocuments,
}
