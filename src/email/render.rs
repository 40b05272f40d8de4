//! Request input and the render entry point

use super::deadline::format_deadline;
use super::error::ValidationError;
use super::templates::{self, BULLET};
use chrono::NaiveDate;

/// Which optional follow-ups were asked for.
///
/// `first` and `second` only count while `enabled` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FollowUpSelection {
    pub enabled: bool,
    pub first: bool,
    pub second: bool,
}

impl FollowUpSelection {
    pub fn wants_first(&self) -> bool {
        self.enabled && self.first
    }

    pub fn wants_second(&self) -> bool {
        self.enabled && self.second
    }
}

/// Everything needed to render one document request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInput {
    pub forename: String,
    pub programme: String,
    pub deadline: NaiveDate,
    /// Document labels in the order they were selected
    pub documents: Vec<String>,
    pub follow_ups: FollowUpSelection,
}

/// A subject line and plain-text body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,
}

/// Identifies one of the rendered emails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    Primary,
    GentleReminder,
    FinalCheckIn,
}

impl EmailKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::GentleReminder => "Follow-Up 1",
            Self::FinalCheckIn => "Follow-Up 2",
        }
    }
}

/// Output of a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmails {
    pub primary: RenderedEmail,
    pub follow_up_1: Option<RenderedEmail>,
    pub follow_up_2: Option<RenderedEmail>,
}

impl RenderedEmails {
    /// All rendered emails in display order
    pub fn entries(&self) -> Vec<(EmailKind, &RenderedEmail)> {
        let mut entries = vec![(EmailKind::Primary, &self.primary)];
        if let Some(email) = &self.follow_up_1 {
            entries.push((EmailKind::GentleReminder, email));
        }
        if let Some(email) = &self.follow_up_2 {
            entries.push((EmailKind::FinalCheckIn, email));
        }
        entries
    }

    pub fn follow_up_count(&self) -> usize {
        usize::from(self.follow_up_1.is_some()) + usize::from(self.follow_up_2.is_some())
    }
}

/// Render the primary email and any requested follow-ups.
///
/// Validation runs before any text is built, so a failure never leaves
/// partial output behind.
pub fn render(input: &RequestInput) -> Result<RenderedEmails, ValidationError> {
    let forename = input.forename.trim();
    let programme = input.programme.trim();

    if forename.is_empty() || programme.is_empty() {
        return Err(ValidationError::MissingDetails {
            missing_forename: forename.is_empty(),
            missing_programme: programme.is_empty(),
        });
    }
    if input.documents.is_empty() {
        return Err(ValidationError::NoDocuments);
    }

    let document_list = input
        .documents
        .iter()
        .map(|doc| format!("{BULLET} {doc}"))
        .collect::<Vec<_>>()
        .join("\n");

    let primary = RenderedEmail {
        subject: templates::primary_subject(programme),
        body: templates::primary_body(
            forename,
            programme,
            &document_list,
            &format_deadline(input.deadline),
        ),
    };

    let follow_up_1 = input.follow_ups.wants_first().then(|| RenderedEmail {
        subject: templates::gentle_reminder_subject(programme),
        body: templates::gentle_reminder_body(forename, programme),
    });

    let follow_up_2 = input.follow_ups.wants_second().then(|| RenderedEmail {
        subject: templates::final_check_in_subject(programme),
        body: templates::final_check_in_body(forename, programme),
    });

    let rendered = RenderedEmails {
        primary,
        follow_up_1,
        follow_up_2,
    };

    tracing::debug!(
        documents = input.documents.len(),
        follow_ups = rendered.follow_up_count(),
        "Rendered document request"
    );

    Ok(rendered)
}
