//! Form field value objects

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub is_multiline: bool,
    pub required: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str, placeholder: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            placeholder: placeholder.to_string(),
            is_multiline: false,
            required,
        }
    }

    /// Create a new multiline text field
    pub fn multiline(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            placeholder: placeholder.to_string(),
            is_multiline: true,
            required: false,
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Whether the field currently holds no text (presence only, no trimming)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Label with a required marker for rendering
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text("email", "Email Address", "john@example.com", true);
        assert_eq!(field.name, "email");
        assert_eq!(field.label, "Email Address");
        assert_eq!(field.as_text(), "");
        assert!(field.required);
        assert!(!field.is_multiline);
    }

    #[test]
    fn test_multiline_field_is_optional() {
        let field = FormField::multiline("message", "Message", "Tell us more...");
        assert!(field.is_multiline);
        assert!(!field.required);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("phone", "Phone Number", "", true);
        field.push_char('5');
        field.push_char('5');
        field.push_char('5');
        assert_eq!(field.as_text(), "555");
        field.pop_char();
        assert_eq!(field.as_text(), "55");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("company", "Company Name", "", false);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text("name", "Full Name", "", true);
        for c in "Ann Lee".chars() {
            field.push_char(c);
        }
        assert!(!field.is_empty());
        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut field = FormField::text("name", "Full Name", "", true);
        field.push_char(' ');
        assert!(!field.is_empty());
    }

    #[test]
    fn test_display_label_marks_required() {
        let required = FormField::text("email", "Email Address", "", true);
        let optional = FormField::text("company", "Company Name", "", false);
        assert_eq!(required.display_label(), "Email Address *");
        assert_eq!(optional.display_label(), "Company Name");
    }
}
