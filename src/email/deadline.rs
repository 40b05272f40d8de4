//! Deadline selection and formatting

use chrono::{Days, NaiveDate};

/// strftime pattern used in the email body, e.g. "14 March 2025"
pub const DEADLINE_FORMAT: &str = "%d %B %Y";

/// Relative deadline offsets offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeadlineOffset {
    OneWeek,
    #[default]
    TwoWeeks,
    ThreeWeeks,
}

impl DeadlineOffset {
    pub const ALL: [DeadlineOffset; 3] = [Self::OneWeek, Self::TwoWeeks, Self::ThreeWeeks];

    pub fn days(self) -> u64 {
        match self {
            Self::OneWeek => 7,
            Self::TwoWeeks => 14,
            Self::ThreeWeeks => 21,
        }
    }

    /// Map a day count back to an offset; only 7, 14 and 21 are offered
    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.days() == u64::from(days))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OneWeek => "In 7 days",
            Self::TwoWeeks => "In 14 days",
            Self::ThreeWeeks => "In 21 days",
        }
    }
}

/// How the deadline was chosen, before it is pinned to a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineSpec {
    Relative(DeadlineOffset),
    Fixed(NaiveDate),
}

impl Default for DeadlineSpec {
    fn default() -> Self {
        DeadlineSpec::Relative(DeadlineOffset::default())
    }
}

impl DeadlineSpec {
    /// Resolve to a concrete date. Fixed dates are not required to be in the future.
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            DeadlineSpec::Relative(offset) => today + Days::new(offset.days()),
            DeadlineSpec::Fixed(date) => date,
        }
    }
}

/// Format a deadline the way it appears in the primary email
pub fn format_deadline(date: NaiveDate) -> String {
    date.format(DEADLINE_FORMAT).to_string()
}
