//! Application state definitions

use super::consent::{Acknowledgement, ConsentState};
use super::forms::RequestForm;
use super::output::OutputState;
use crate::config::FormDefaults;
use chrono::NaiveDate;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Data protection notice; nothing else is reachable until accepted
    #[default]
    Consent,
    Form,
    Output,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub consent: ConsentState,
    acknowledgement: Option<Acknowledgement>,
    pub form: RequestForm,
    pub output: Option<OutputState>,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(defaults: FormDefaults, today: NaiveDate) -> Self {
        Self {
            current_view: View::Consent,
            consent: ConsentState::default(),
            acknowledgement: None,
            form: RequestForm::new(defaults, today),
            output: None,
            errors: VecDeque::new(),
        }
    }

    pub fn acknowledgement(&self) -> Option<&Acknowledgement> {
        self.acknowledgement.as_ref()
    }

    /// Accept the notice if the statement is ticked. Returns true on success.
    pub fn accept_consent(&mut self) -> bool {
        match Acknowledgement::confirm(self.consent.statement_ticked) {
            Some(ack) => {
                self.acknowledgement = Some(ack);
                true
            }
            None => false,
        }
    }

    /// Switch views; the form and output stay locked until consent is given
    pub fn navigate(&mut self, view: View) -> bool {
        let allowed = match view {
            View::Consent => true,
            View::Form => self.acknowledgement.is_some(),
            View::Output => self.acknowledgement.is_some() && self.output.is_some(),
        };
        if allowed {
            tracing::debug!("Navigating to {view:?}");
            self.current_view = view;
        }
        allowed
    }

    /// Discard generated output and applicant values
    pub fn reset_request(&mut self, today: NaiveDate) {
        self.output = None;
        self.form.clear(today);
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::{RenderedEmail, RenderedEmails};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
    }

    fn state() -> AppState {
        AppState::new(FormDefaults::default(), today())
    }

    fn output() -> OutputState {
        OutputState::new(RenderedEmails {
            primary: RenderedEmail {
                subject: "s".to_string(),
                body: "b".to_string(),
            },
            follow_up_1: None,
            follow_up_2: None,
        })
    }

    mod consent_gate {
        use super::*;

        #[test]
        fn test_starts_on_consent() {
            let state = state();
            assert_eq!(state.current_view, View::Consent);
            assert!(state.acknowledgement().is_none());
        }

        #[test]
        fn test_form_locked_without_consent() {
            let mut state = state();
            assert!(!state.navigate(View::Form));
            assert_eq!(state.current_view, View::Consent);
        }

        #[test]
        fn test_accept_requires_tick() {
            let mut state = state();
            assert!(!state.accept_consent());
            state.consent.toggle();
            assert!(state.accept_consent());
            assert!(state.navigate(View::Form));
            assert_eq!(state.current_view, View::Form);
        }

        #[test]
        fn test_output_requires_rendered_emails() {
            let mut state = state();
            state.consent.toggle();
            state.accept_consent();
            assert!(!state.navigate(View::Output));
            state.output = Some(output());
            assert!(state.navigate(View::Output));
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_queue_order() {
            let mut state = state();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_dismiss_empty_is_noop() {
            let mut state = state();
            state.dismiss_error();
            assert!(state.current_error().is_none());
        }
    }

    #[test]
    fn test_reset_request_clears_values() {
        let mut state = state();
        state.form.input_char('R');
        state.output = Some(output());
        state.reset_request(today());
        assert!(state.output.is_none());
        assert_eq!(state.form.forename.as_text(), "");
    }
}
