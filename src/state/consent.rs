//! Data protection notice and the acknowledgement that unlocks the form

/// Shown before anything else; the tool keeps applicant data in memory only
pub const GDPR_NOTICE: &str = "🔒 GDPR Notice: This tool does NOT store, log, or transmit any personal data. All inputs are processed temporarily in memory and disappear when the tool is closed. Only enter minimal applicant information (forename and programme).";

/// The statement the operator ticks to proceed
pub const CONSENT_STATEMENT: &str =
    "I confirm I will only enter minimal applicant data and understand no data is stored.";

/// Footer caption under generated output
pub const DATA_PROTECTION_CAPTION: &str = "Data Protection: This tool processes inputs in-memory only and does not retain or transmit personal information.";

/// Proof that the operator accepted the notice.
///
/// Only [`Acknowledgement::confirm`] creates one, so holding a value means
/// the statement was ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement {
    _private: (),
}

impl Acknowledgement {
    /// Returns an acknowledgement only if the statement was ticked
    pub fn confirm(statement_ticked: bool) -> Option<Self> {
        statement_ticked.then_some(Self { _private: () })
    }
}

/// Consent screen state
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsentState {
    pub statement_ticked: bool,
}

impl ConsentState {
    pub fn toggle(&mut self) {
        self.statement_ticked = !self.statement_ticked;
    }
}
