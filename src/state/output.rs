//! Generated output view state

use crate::email::{EmailKind, RenderedEmail, RenderedEmails};

/// What part of the selected email to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Subject,
    Body,
    Both,
}

impl CopyTarget {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Body => "body",
            Self::Both => "subject and body",
        }
    }
}

/// Rendered emails plus which one is on screen
#[derive(Debug, Clone)]
pub struct OutputState {
    pub emails: RenderedEmails,
    pub selected: usize,
    pub scroll_offset: u16,
}

impl OutputState {
    pub fn new(emails: RenderedEmails) -> Self {
        Self {
            emails,
            selected: 0,
            scroll_offset: 0,
        }
    }

    pub fn tab_count(&self) -> usize {
        self.emails.entries().len()
    }

    pub fn next_tab(&mut self) {
        self.selected = (self.selected + 1) % self.tab_count();
        self.scroll_offset = 0;
    }

    pub fn prev_tab(&mut self) {
        let count = self.tab_count();
        self.selected = (self.selected + count - 1) % count;
        self.scroll_offset = 0;
    }

    /// The email currently on screen
    pub fn selected_email(&self) -> (EmailKind, &RenderedEmail) {
        let entries = self.emails.entries();
        entries
            .get(self.selected)
            .copied()
            .unwrap_or((EmailKind::Primary, &self.emails.primary))
    }

    pub fn scroll_down(&mut self) {
        let max = self.selected_email().1.body.lines().count() as u16;
        if self.scroll_offset < max {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Text placed on the clipboard for a copy action
    pub fn copy_text(&self, target: CopyTarget) -> String {
        let (_, email) = self.selected_email();
        match target {
            CopyTarget::Subject => email.subject.clone(),
            CopyTarget::Body => email.body.clone(),
            CopyTarget::Both => format!("{}\n\n{}", email.subject, email.body),
        }
    }
}
