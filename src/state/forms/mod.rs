//! Form domain layer
//!
//! Type-safe field handling for the contact form.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, LeadForm};
