//! Clipboard access behind a trait so copy actions can be tested

use anyhow::Result;

/// Destination for copied email text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened fresh for every copy
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
