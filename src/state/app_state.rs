//! Application state definitions

use crate::state::LeadForm;
use std::time::{Duration, Instant};

/// Inline message shown when a required field is empty at submit time
pub const VALIDATION_ERROR_MSG: &str = "Please fill Full Name, Email and Phone.";

/// Generic message shown for any failed submission
pub const SUBMIT_FAILED_MSG: &str = "Something went wrong. Please try again.";

/// Banner shown after a confirmed successful submission
pub const SUBMITTED_BANNER_MSG: &str =
    "Thank you! Your message has been submitted successfully. We'll be in touch soon.";

/// How long the success banner stays visible
pub const SUBMITTED_DISPLAY_WINDOW: Duration = Duration::from_millis(3000);

/// The in-progress, unsaved lead record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftLead {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl DraftLead {
    /// Presence check for the three required fields. Whitespace is not
    /// trimmed; a lone space counts as filled.
    pub fn has_required(&self) -> bool {
        !self.full_name.is_empty() && !self.email.is_empty() && !self.phone.is_empty()
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    /// The contact form holding the Draft Lead fields
    pub form: LeadForm,
    /// Inline error message (validation or submission failure)
    pub error_message: Option<String>,
    /// When the success banner was raised; cleared after the display window
    pub submitted_at: Option<Instant>,
    /// True only while a submission request is in flight
    pub loading: bool,
}

impl AppState {
    /// Whether the success banner is currently visible
    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    /// Raise the success banner. A second success before the window elapses
    /// simply restarts it; there is never more than one pending clear.
    pub fn mark_submitted(&mut self) {
        self.submitted_at = Some(Instant::now());
    }

    /// Drop the success banner once its display window has elapsed.
    /// Called once per event-loop tick.
    pub fn update_submitted_banner(&mut self) {
        if let Some(raised_at) = self.submitted_at {
            if raised_at.elapsed() >= SUBMITTED_DISPLAY_WINDOW {
                self.submitted_at = None;
            }
        }
    }

    /// Clear any previous error and success banner ahead of a new attempt
    pub fn clear_feedback(&mut self) {
        self.error_message = None;
        self.submitted_at = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(full_name: &str, email: &str, phone: &str) -> DraftLead {
        DraftLead {
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    mod draft_lead {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_has_required_all_present() {
            assert!(draft("Ann Lee", "ann@x.com", "555-1000").has_required());
        }

        #[test]
        fn test_has_required_missing_name() {
            assert!(!draft("", "ann@x.com", "555-1000").has_required());
        }

        #[test]
        fn test_has_required_missing_email() {
            assert!(!draft("Ann Lee", "", "555-1000").has_required());
        }

        #[test]
        fn test_has_required_missing_phone() {
            assert!(!draft("Ann Lee", "ann@x.com", "").has_required());
        }

        #[test]
        fn test_has_required_whitespace_counts() {
            // Presence only, not format: whitespace is not trimmed
            assert!(draft(" ", " ", " ").has_required());
        }

        #[test]
        fn test_optional_fields_may_be_empty() {
            let d = draft("Ann Lee", "ann@x.com", "555-1000");
            assert_eq!(d.company, "");
            assert_eq!(d.message, "");
            assert!(d.has_required());
        }
    }

    mod submitted_banner {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_not_submitted() {
            let state = AppState::default();
            assert!(!state.is_submitted());
        }

        #[test]
        fn test_mark_submitted_raises_banner() {
            let mut state = AppState::default();
            state.mark_submitted();
            assert!(state.is_submitted());
        }

        #[test]
        fn test_banner_survives_within_window() {
            let mut state = AppState::default();
            state.mark_submitted();
            state.update_submitted_banner();
            assert!(state.is_submitted());
        }

        #[test]
        fn test_banner_clears_after_window() {
            let mut state = AppState::default();
            state.submitted_at = Some(Instant::now() - SUBMITTED_DISPLAY_WINDOW);
            state.update_submitted_banner();
            assert!(!state.is_submitted());
        }

        #[test]
        fn test_second_success_restarts_window() {
            let mut state = AppState::default();
            // An almost-expired banner followed by a fresh success must not
            // be cleared by the earlier window elapsing.
            state.submitted_at = Some(Instant::now() - SUBMITTED_DISPLAY_WINDOW);
            state.mark_submitted();
            state.update_submitted_banner();
            assert!(state.is_submitted());
        }
    }

    mod feedback {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_clear_feedback_resets_error_and_banner() {
            let mut state = AppState::default();
            state.set_error(VALIDATION_ERROR_MSG);
            state.mark_submitted();
            state.clear_feedback();
            assert_eq!(state.error_message, None);
            assert!(!state.is_submitted());
        }

        #[test]
        fn test_set_error() {
            let mut state = AppState::default();
            state.set_error(SUBMIT_FAILED_MSG);
            assert_eq!(state.error_message.as_deref(), Some(SUBMIT_FAILED_MSG));
        }
    }
}
