//! Application state and core logic

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::GeneratorConfig;
use crate::email::render;
use crate::state::{AppState, CopyTarget, FormError, OutputState, RequestField, View};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Persisted UI preferences
    config: GeneratorConfig,
    /// Where copy actions send text
    clipboard: Box<dyn ClipboardSink>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Source of "today" for deadline arithmetic
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl App {
    /// Create a new App instance using the system clipboard
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard), local_today)
    }

    pub fn with_clipboard(
        config: GeneratorConfig,
        clipboard: Box<dyn ClipboardSink>,
        today: fn() -> NaiveDate,
    ) -> Self {
        let state = AppState::new(config.form_defaults(), today());
        Self {
            state,
            config,
            clipboard,
            quit: false,
            status_message: None,
            today,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press in the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Consent => self.handle_consent_key(key),
            View::Form => self.handle_form_key(key),
            View::Output => self.handle_output_key(key),
        }

        Ok(())
    }

    fn handle_consent_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => self.state.consent.toggle(),
            KeyCode::Enter => {
                if self.state.accept_consent() {
                    tracing::info!("Data protection notice acknowledged");
                    self.state.navigate(View::Form);
                } else {
                    self.status_message =
                        Some("Tick the confirmation with Space to continue".to_string());
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('g') => self.generate(),
                KeyCode::Char('d') => self.save_defaults(),
                KeyCode::Char('u') => self.state.form.clear_active_text(),
                KeyCode::Char('n') => {
                    self.state.reset_request((self.today)());
                    self.status_message = Some("Form cleared".to_string());
                }
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::Enter && self.state.form.active_field == RequestField::Generate {
            self.generate();
            return;
        }

        let form = &mut self.state.form;
        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Down if form.active_field == RequestField::Documents => {
                form.documents.move_down()
            }
            KeyCode::Up if form.active_field == RequestField::Documents => form.documents.move_up(),
            KeyCode::Down => form.next_field(),
            KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.active_field == RequestField::Deadline => {
                form.cycle_deadline(false)
            }
            KeyCode::Right if form.active_field == RequestField::Deadline => {
                form.cycle_deadline(true)
            }
            KeyCode::Enter => match form.active_field {
                RequestField::Documents
                | RequestField::EnableFollowUps
                | RequestField::GentleReminder
                | RequestField::FinalCheckIn => form.toggle_active(),
                _ => form.next_field(),
            },
            KeyCode::Char(' ') if !form.is_text_field_active() => form.toggle_active(),
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    fn handle_output_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.navigate(View::Form);
            }
            KeyCode::Char('n') => {
                self.state.reset_request((self.today)());
                self.state.navigate(View::Form);
            }
            KeyCode::Char('s') => self.copy(CopyTarget::Subject),
            KeyCode::Char('b') => self.copy(CopyTarget::Body),
            KeyCode::Char('a') => self.copy(CopyTarget::Both),
            _ => {
                let Some(output) = self.state.output.as_mut() else {
                    return;
                };
                match key.code {
                    KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => output.next_tab(),
                    KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => output.prev_tab(),
                    KeyCode::Down | KeyCode::Char('j') => output.scroll_down(),
                    KeyCode::Up | KeyCode::Char('k') => output.scroll_up(),
                    _ => {}
                }
            }
        }
    }

    /// Build the request from the form and render it
    fn generate(&mut self) {
        let Some(consent) = self.state.acknowledgement().copied() else {
            self.state.navigate(View::Consent);
            return;
        };

        let today = (self.today)();
        let result = self
            .state
            .form
            .to_request_input(&consent, today)
            .and_then(|input| render(&input).map_err(FormError::from));

        match result {
            Ok(emails) => {
                tracing::info!(
                    follow_ups = emails.follow_up_count(),
                    "Generated document request"
                );
                self.state.output = Some(OutputState::new(emails));
                self.state.navigate(View::Output);
            }
            Err(err) => {
                tracing::debug!("Request rejected: {err}");
                self.state.form.focus_error(&err);
                self.push_error(err.to_string());
            }
        }
    }

    /// Store the current deadline and follow-up choice as preferences
    fn save_defaults(&mut self) {
        let defaults = self.state.form.current_defaults();
        self.config.remember(defaults);
        self.state.form.set_defaults(defaults);
        match self.config.save() {
            Ok(()) => {
                tracing::info!("Saved form defaults");
                self.status_message = Some("Saved deadline and follow-up defaults".to_string());
            }
            Err(e) => self.push_error(format!("Failed to save defaults: {e}")),
        }
    }

    fn copy(&mut self, target: CopyTarget) {
        let Some(text) = self.state.output.as_ref().map(|o| o.copy_text(target)) else {
            return;
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                tracing::info!("Copied {} to clipboard", target.label());
                self.status_message = Some(format!("Copied {}", target.label()));
            }
            Err(e) => self.push_error(format!("Failed to copy to clipboard: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboardSink;
    use crate::email::{EmailKind, DOCUMENT_CATALOG};
    use crate::state::DeadlineChoice;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
    }

    fn app_with(clipboard: MockClipboardSink) -> App {
        App::with_clipboard(GeneratorConfig::default(), Box::new(clipboard), fixed_today)
    }

    fn app() -> App {
        app_with(MockClipboardSink::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Accept consent and land on the form
    fn unlocked(mut app: App) -> App {
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        app
    }

    /// Fill Rahul / MSc Data Analytics with one document
    fn fill_form(app: &mut App) {
        type_text(app, "Rahul");
        press(app, KeyCode::Tab);
        type_text(app, "MSc Data Analytics");
        app.state.form.active_field = RequestField::Documents;
        press(app, KeyCode::Down);
        press(app, KeyCode::Enter);
    }

    mod consent {
        use super::*;

        #[test]
        fn test_enter_without_tick_stays() {
            let mut app = app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::Consent);
            assert!(app.status_message.is_some());
        }

        #[test]
        fn test_tick_and_enter_opens_form() {
            let app = unlocked(app());
            assert_eq!(app.state.current_view, View::Form);
        }

        #[test]
        fn test_q_quits() {
            let mut app = app();
            assert!(!app.should_quit());
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_generate_unreachable_before_consent() {
            let mut app = app();
            app.generate();
            assert_eq!(app.state.current_view, View::Consent);
            assert!(app.state.output.is_none());
        }
    }

    mod form {
        use super::*;

        #[test]
        fn test_typing_fills_fields() {
            let mut app = unlocked(app());
            fill_form(&mut app);
            assert_eq!(app.state.form.forename.as_text(), "Rahul");
            assert_eq!(app.state.form.programme.as_text(), "MSc Data Analytics");
            assert_eq!(
                app.state.form.documents.selected_labels(),
                vec![DOCUMENT_CATALOG[1].to_string()]
            );
        }

        #[test]
        fn test_space_in_text_field_is_typed() {
            let mut app = unlocked(app());
            type_text(&mut app, "Mary Ann");
            assert_eq!(app.state.form.forename.as_text(), "Mary Ann");
        }

        #[test]
        fn test_arrows_cycle_deadline() {
            let mut app = unlocked(app());
            app.state.form.active_field = RequestField::Deadline;
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.form.deadline_choice, DeadlineChoice::PickDate);
        }

        #[test]
        fn test_ctrl_g_generates() {
            let mut app = unlocked(app());
            fill_form(&mut app);
            ctrl(&mut app, 'g');
            assert_eq!(app.state.current_view, View::Output);
            let output = app.state.output.as_ref().unwrap();
            assert_eq!(
                output.emails.primary.subject,
                "[IMP] Additional Documents Required – MSc Data Analytics @ TUS"
            );
            assert!(output.emails.primary.body.contains("14 March 2025"));
        }

        #[test]
        fn test_enter_on_generate_button() {
            let mut app = unlocked(app());
            fill_form(&mut app);
            app.state.form.active_field = RequestField::Generate;
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::Output);
        }

        #[test]
        fn test_missing_documents_shows_error() {
            let mut app = unlocked(app());
            type_text(&mut app, "Rahul");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "MSc");
            ctrl(&mut app, 'g');
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(
                app.state.current_error(),
                Some("Please select at least one document.")
            );
        }

        #[test]
        fn test_missing_programme_focuses_programme() {
            let mut app = unlocked(app());
            fill_form(&mut app);
            app.state.form.programme.clear();
            ctrl(&mut app, 'g');
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.active_field, RequestField::Programme);
        }

        #[test]
        fn test_error_dialog_is_modal() {
            let mut app = unlocked(app());
            ctrl(&mut app, 'g');
            assert!(app.state.has_errors());
            type_text(&mut app, "x");
            assert_eq!(app.state.form.forename.as_text(), "");
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_invalid_picked_date_shows_error() {
            let mut app = unlocked(app());
            fill_form(&mut app);
            app.state.form.deadline_choice = DeadlineChoice::PickDate;
            app.state.form.active_field = RequestField::DeadlineDate;
            app.state.form.deadline_date.clear();
            type_text(&mut app, "soon");
            ctrl(&mut app, 'g');
            assert!(app.state.current_error().unwrap().contains("soon"));
            assert!(app.state.output.is_none());
        }

        #[test]
        fn test_ctrl_u_clears_focused_field() {
            let mut app = unlocked(app());
            type_text(&mut app, "Rahul");
            ctrl(&mut app, 'u');
            assert_eq!(app.state.form.forename.as_text(), "");
        }

        #[test]
        fn test_ctrl_n_clears_form() {
            let mut app = unlocked(app());
            fill_form(&mut app);
            ctrl(&mut app, 'n');
            assert_eq!(app.state.form.forename.as_text(), "");
            assert_eq!(app.state.form.documents.selected_count(), 0);
        }

        #[test]
        fn test_follow_ups_rendered_when_enabled() {
            let mut app = unlocked(app());
            fill_form(&mut app);
            app.state.form.active_field = RequestField::EnableFollowUps;
            press(&mut app, KeyCode::Char(' '));
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Char(' '));
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Char(' '));
            ctrl(&mut app, 'g');
            let output = app.state.output.as_ref().unwrap();
            assert_eq!(output.tab_count(), 3);
        }
    }

    mod output {
        use super::*;

        fn generated(clipboard: MockClipboardSink) -> App {
            let mut app = unlocked(app_with(clipboard));
            fill_form(&mut app);
            ctrl(&mut app, 'g');
            app
        }

        #[test]
        fn test_copy_subject() {
            let mut clipboard = MockClipboardSink::new();
            clipboard
                .expect_set_text()
                .withf(|text| {
                    text == "[IMP] Additional Documents Required – MSc Data Analytics @ TUS"
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = generated(clipboard);
            press(&mut app, KeyCode::Char('s'));
            assert_eq!(app.status_message.as_deref(), Some("Copied subject"));
        }

        #[test]
        fn test_copy_body() {
            let mut clipboard = MockClipboardSink::new();
            clipboard
                .expect_set_text()
                .withf(|text| text.starts_with("Hello Rahul,") && text.contains("• Consolidated"))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = generated(clipboard);
            press(&mut app, KeyCode::Char('b'));
        }

        #[test]
        fn test_copy_failure_shows_error() {
            let mut clipboard = MockClipboardSink::new();
            clipboard
                .expect_set_text()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("no display")));
            let mut app = generated(clipboard);
            press(&mut app, KeyCode::Char('a'));
            assert_eq!(
                app.state.current_error(),
                Some("Failed to copy to clipboard: no display")
            );
        }

        #[test]
        fn test_esc_returns_to_form_with_values() {
            let mut app = generated(MockClipboardSink::new());
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(app.state.form.forename.as_text(), "Rahul");
        }

        #[test]
        fn test_new_request_clears_everything() {
            let mut app = generated(MockClipboardSink::new());
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.current_view, View::Form);
            assert!(app.state.output.is_none());
            assert_eq!(app.state.form.forename.as_text(), "");
        }

        #[test]
        fn test_tab_keys_with_single_email() {
            let mut app = generated(MockClipboardSink::new());
            press(&mut app, KeyCode::Tab);
            let output = app.state.output.as_ref().unwrap();
            assert_eq!(output.selected_email().0, EmailKind::Primary);
        }

        #[test]
        fn test_scroll_keys() {
            let mut app = generated(MockClipboardSink::new());
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('k'));
            assert_eq!(app.state.output.as_ref().unwrap().scroll_offset, 1);
        }
    }
}
