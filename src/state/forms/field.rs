//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: FieldValue,
    /// Hint shown while a text field is empty
    pub placeholder: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            placeholder: None,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(label: &str, value: String) -> Self {
        Self {
            value: FieldValue::Text(value),
            ..Self::text(label)
        }
    }

    /// Create a new checkbox field
    pub fn toggle(label: &str, checked: bool) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Toggle(checked),
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Get the text value (returns empty string for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Toggle(_) => "",
        }
    }

    /// Whether a checkbox is ticked (false for text fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(true))
    }

    /// Flip a checkbox; text fields are left alone
    pub fn toggle_value(&mut self) {
        if let FieldValue::Toggle(checked) = &mut self.value {
            *checked = !*checked;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Toggle(checked) => *checked = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Toggle(checked) => {
                let mark = if *checked { "[x]" } else { "[ ]" };
                format!("{mark} {}", self.label)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("Forename");
        field.push_char('A');
        field.push_char('b');
        assert_eq!(field.as_text(), "Ab");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("Forename");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_unicode_backspace_removes_whole_char() {
        let mut field = FormField::text_with_value("Forename", "Zoë".to_string());
        field.pop_char();
        assert_eq!(field.as_text(), "Zo");
    }

    #[test]
    fn test_toggle_ignores_text_input() {
        let mut field = FormField::toggle("Enable", false);
        field.push_char('x');
        assert!(!field.is_checked());
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_toggle_value_flips() {
        let mut field = FormField::toggle("Enable", false);
        field.toggle_value();
        assert!(field.is_checked());
        field.toggle_value();
        assert!(!field.is_checked());
    }

    #[test]
    fn test_toggle_value_on_text_is_noop() {
        let mut field = FormField::text_with_value("Name", "x".to_string());
        field.toggle_value();
        assert_eq!(field.as_text(), "x");
    }

    #[test]
    fn test_clear_unticks_checkbox() {
        let mut field = FormField::toggle("Enable", true);
        field.clear();
        assert!(!field.is_checked());
    }

    #[test]
    fn test_display_value_checkbox() {
        let field = FormField::toggle("Include follow-ups", true);
        assert_eq!(field.display_value(), "[x] Include follow-ups");
    }

    #[test]
    fn test_placeholder() {
        let field = FormField::text("Forename").with_placeholder("e.g., Rahul");
        assert_eq!(field.placeholder.as_deref(), Some("e.g., Rahul"));
    }
}
