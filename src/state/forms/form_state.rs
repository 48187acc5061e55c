//! Form state management and the lead form struct

use super::field::FormField;
use crate::state::DraftLead;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The contact form backing the Draft Lead record
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub full_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub company: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Send, 1=Clear)
    pub selected_button: usize,
}

impl LeadForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("fullName", "Full Name", "John Doe", true),
            email: FormField::text("email", "Email Address", "john@example.com", true),
            phone: FormField::text("phone", "Phone Number", "+91 98765 43210", true),
            company: FormField::text("company", "Company Name", "Your Company", false),
            message: FormField::multiline(
                "message",
                "Message",
                "Tell us about your project or inquiry...",
            ),
            active_field_index: 0,
            selected_button: 0, // Default to "Send" button
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == 5
    }

    /// Returns true if the currently active field accepts newlines
    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Snapshot the current field values as a Draft Lead record
    pub fn to_draft(&self) -> DraftLead {
        DraftLead {
            full_name: self.full_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            company: self.company.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }

    /// Reset all fields to the empty state and return focus to the first one
    pub fn clear(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.phone.clear();
        self.company.clear();
        self.message.clear();
        self.active_field_index = 0;
        self.selected_button = 0;
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        6 // fullName, email, phone, company, message, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(5);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.full_name,
            1 => &mut self.email,
            2 => &mut self.phone,
            3 => &mut self.company,
            // For buttons row (index 5), return message as dummy (won't be used for text input)
            _ => &mut self.message,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.full_name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.company),
            4 => Some(&self.message),
            // Index 5 is buttons row, no FormField for it
            _ => None,
        }
    }
}
