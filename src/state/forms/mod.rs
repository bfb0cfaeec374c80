//! Form domain layer
//!
//! The contact form is a plain value: every edit consumes the current form
//! and returns the next one.

mod contact_form;
mod field;

pub use contact_form::{ContactForm, Form, SubmissionStatus};
pub use field::ContactField;
