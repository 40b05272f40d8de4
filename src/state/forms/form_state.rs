//! Request form state

use super::checklist::DocumentChecklist;
use super::field::FormField;
use crate::config::FormDefaults;
use crate::email::{
    DeadlineOffset, DeadlineSpec, FollowUpSelection, RequestInput, ValidationError,
};
use crate::state::Acknowledgement;
use chrono::{Days, NaiveDate};
use thiserror::Error;

/// Format expected in the "Pick a date" field
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Why the form could not produce a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Deadline date \"{0}\" is not a valid date (expected YYYY-MM-DD).")]
    InvalidDate(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Options of the deadline selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineChoice {
    Relative(DeadlineOffset),
    PickDate,
}

impl DeadlineChoice {
    pub const ALL: [DeadlineChoice; 4] = [
        Self::Relative(DeadlineOffset::OneWeek),
        Self::Relative(DeadlineOffset::TwoWeeks),
        Self::Relative(DeadlineOffset::ThreeWeeks),
        Self::PickDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Relative(offset) => offset.label(),
            Self::PickDate => "Pick a date",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Focusable rows of the request form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Forename,
    Programme,
    Deadline,
    DeadlineDate,
    Documents,
    EnableFollowUps,
    GentleReminder,
    FinalCheckIn,
    Generate,
}

impl RequestField {
    pub const ORDER: [RequestField; 9] = [
        Self::Forename,
        Self::Programme,
        Self::Deadline,
        Self::DeadlineDate,
        Self::Documents,
        Self::EnableFollowUps,
        Self::GentleReminder,
        Self::FinalCheckIn,
        Self::Generate,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// The single document request form
#[derive(Debug, Clone)]
pub struct RequestForm {
    pub forename: FormField,
    pub programme: FormField,
    pub deadline_choice: DeadlineChoice,
    pub deadline_date: FormField,
    pub documents: DocumentChecklist,
    pub enable_follow_ups: FormField,
    pub gentle_reminder: FormField,
    pub final_check_in: FormField,
    pub active_field: RequestField,
    defaults: FormDefaults,
}

impl RequestForm {
    pub fn new(defaults: FormDefaults, today: NaiveDate) -> Self {
        let suggested_date = today + Days::new(DeadlineOffset::TwoWeeks.days());
        Self {
            forename: FormField::text("Student Forename (free text)")
                .with_placeholder("e.g., Rahul"),
            programme: FormField::text("Programme Name (free text)")
                .with_placeholder("e.g., MSc Data Analytics"),
            deadline_choice: DeadlineChoice::Relative(defaults.deadline),
            deadline_date: FormField::text_with_value(
                "Deadline Date (YYYY-MM-DD)",
                suggested_date.format(DATE_INPUT_FORMAT).to_string(),
            ),
            documents: DocumentChecklist::default(),
            enable_follow_ups: FormField::toggle(
                "Include follow-up email templates",
                defaults.follow_ups_enabled,
            ),
            gentle_reminder: FormField::toggle(
                "Follow-Up Email 1 (Gentle Reminder)",
                false,
            ),
            final_check_in: FormField::toggle(
                "Follow-Up Email 2 (Final Check-In)",
                false,
            ),
            active_field: RequestField::Forename,
            defaults,
        }
    }

    /// Whether a row is currently shown and focusable
    pub fn is_available(&self, field: RequestField) -> bool {
        match field {
            RequestField::DeadlineDate => self.deadline_choice == DeadlineChoice::PickDate,
            RequestField::GentleReminder | RequestField::FinalCheckIn => {
                self.enable_follow_ups.is_checked()
            }
            _ => true,
        }
    }

    pub fn next_field(&mut self) {
        self.step_field(1);
    }

    pub fn prev_field(&mut self) {
        self.step_field(RequestField::ORDER.len() - 1);
    }

    fn step_field(&mut self, step: usize) {
        let len = RequestField::ORDER.len();
        let mut pos = self.active_field.position();
        for _ in 0..len {
            pos = (pos + step) % len;
            let candidate = RequestField::ORDER[pos];
            if self.is_available(candidate) {
                self.active_field = candidate;
                return;
            }
        }
    }

    pub fn is_text_field_active(&self) -> bool {
        self.text_field(self.active_field).is_some()
    }

    pub fn text_field(&self, field: RequestField) -> Option<&FormField> {
        match field {
            RequestField::Forename => Some(&self.forename),
            RequestField::Programme => Some(&self.programme),
            RequestField::DeadlineDate => Some(&self.deadline_date),
            _ => None,
        }
    }

    fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field {
            RequestField::Forename => Some(&mut self.forename),
            RequestField::Programme => Some(&mut self.programme),
            RequestField::DeadlineDate => Some(&mut self.deadline_date),
            _ => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_field_mut() {
            field.pop_char();
        }
    }

    /// Empty the text field under focus
    pub fn clear_active_text(&mut self) {
        if let Some(field) = self.active_text_field_mut() {
            field.clear();
        }
    }

    /// Toggle the checkbox or checklist entry under focus
    pub fn toggle_active(&mut self) {
        match self.active_field {
            RequestField::Documents => self.documents.toggle_current(),
            RequestField::EnableFollowUps => self.enable_follow_ups.toggle_value(),
            RequestField::GentleReminder => self.gentle_reminder.toggle_value(),
            RequestField::FinalCheckIn => self.final_check_in.toggle_value(),
            _ => {}
        }
    }

    pub fn cycle_deadline(&mut self, forward: bool) {
        self.deadline_choice = if forward {
            self.deadline_choice.next()
        } else {
            self.deadline_choice.prev()
        };
    }

    /// The deadline as chosen, parsing the picked date if needed
    pub fn deadline_spec(&self) -> Result<DeadlineSpec, FormError> {
        match self.deadline_choice {
            DeadlineChoice::Relative(offset) => Ok(DeadlineSpec::Relative(offset)),
            DeadlineChoice::PickDate => {
                let raw = self.deadline_date.as_text().trim();
                NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
                    .map(DeadlineSpec::Fixed)
                    .map_err(|_| FormError::InvalidDate(raw.to_string()))
            }
        }
    }

    pub fn follow_up_selection(&self) -> FollowUpSelection {
        FollowUpSelection {
            enabled: self.enable_follow_ups.is_checked(),
            first: self.gentle_reminder.is_checked(),
            second: self.final_check_in.is_checked(),
        }
    }

    /// Build the request handed to the renderer.
    ///
    /// Presence checks on the text fields are left to the renderer.
    pub fn to_request_input(
        &self,
        _consent: &Acknowledgement,
        today: NaiveDate,
    ) -> Result<RequestInput, FormError> {
        let deadline = self.deadline_spec()?.resolve(today);
        Ok(RequestInput {
            forename: self.forename.as_text().to_string(),
            programme: self.programme.as_text().to_string(),
            deadline,
            documents: self.documents.selected_labels(),
            follow_ups: self.follow_up_selection(),
        })
    }

    /// Move focus to the row that caused `err`
    pub fn focus_error(&mut self, err: &FormError) {
        self.active_field = match err {
            FormError::InvalidDate(_) => RequestField::DeadlineDate,
            FormError::Validation(ValidationError::MissingDetails {
                missing_forename,
                missing_programme,
            }) => {
                if *missing_forename {
                    RequestField::Forename
                } else if *missing_programme {
                    RequestField::Programme
                } else {
                    return;
                }
            }
            FormError::Validation(ValidationError::NoDocuments) => RequestField::Documents,
        };
    }

    /// Current deadline and follow-up choice, for saving as preferences
    pub fn current_defaults(&self) -> FormDefaults {
        let deadline = match self.deadline_choice {
            DeadlineChoice::Relative(offset) => offset,
            DeadlineChoice::PickDate => self.defaults.deadline,
        };
        FormDefaults {
            deadline,
            follow_ups_enabled: self.enable_follow_ups.is_checked(),
        }
    }

    /// Use new defaults for the next `clear`
    pub fn set_defaults(&mut self, defaults: FormDefaults) {
        self.defaults = defaults;
    }

    /// Reset every field for a new applicant
    pub fn clear(&mut self, today: NaiveDate) {
        *self = Self::new(self.defaults, today);
    }
}
