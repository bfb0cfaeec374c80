//! Contact form state and submission status

use super::field::ContactField;

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
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Sending...",
            Self::Success => "Sent",
            Self::Error => "Failed",
        }
    }
}

/// Index of the Send button row, after the four inputs
const SEND_BUTTON_INDEX: usize = 4;

/// Contact form values plus UI focus.
///
/// Edits never validate. A form in `Success` or `Error` goes back to `Idle`
/// on the next edit and keeps what was typed. While `Submitting` the form is
/// locked so the values on screen match the snapshot being sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: SubmissionStatus,
    /// Required fields flagged by the last rejected submit
    pub missing: Vec<ContactField>,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    /// Replace one field's value
    pub fn update_field(mut self, field: ContactField, value: impl Into<String>) -> Self {
        if self.is_submitting() {
            tracing::debug!("Ignoring edit to {field} while a message is being sent");
            return self;
        }

        let value = value.into();
        if !value.is_empty() {
            self.missing.retain(|f| *f != field);
        }
        *self.slot_mut(field) = value;

        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.status = SubmissionStatus::Idle;
        }
        self
    }

    /// Required fields that are still empty, in display order
    pub fn validate(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.value(*f).is_empty())
            .collect()
    }

    /// Empty form, status `Idle`
    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Highlight required fields that blocked a submit
    pub fn with_missing(mut self, missing: Vec<ContactField>) -> Self {
        self.missing = missing;
        self
    }

    /// Enter `Submitting`
    pub fn begin_submit(mut self) -> Self {
        self.missing.clear();
        self.status = SubmissionStatus::Submitting;
        self
    }

    /// The message was accepted. Values stay until `reset` is applied.
    pub fn complete_success(mut self) -> Self {
        self.status = SubmissionStatus::Success;
        self
    }

    pub fn is_sent(&self) -> bool {
        self.status == SubmissionStatus::Success
    }

    /// The message was not delivered: keep every value for a retry
    pub fn complete_failure(mut self) -> Self {
        self.status = SubmissionStatus::Error;
        self
    }

    /// Leave `Submitting` without a delivery outcome
    pub fn cancel_submit(mut self) -> Self {
        if self.status == SubmissionStatus::Submitting {
            self.status = SubmissionStatus::Idle;
        }
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_missing(&self, field: ContactField) -> bool {
        self.missing.contains(&field)
    }

    /// Focused input, `None` when the Send button row is focused
    pub fn focused_field(&self) -> Option<ContactField> {
        ContactField::from_index(self.active_field_index)
    }

    pub fn is_send_button_active(&self) -> bool {
        self.active_field_index == SEND_BUTTON_INDEX
    }

    /// Type a character into the focused input
    pub fn push_char(self, c: char) -> Self {
        match self.focused_field() {
            Some(field) => {
                let mut value = self.value(field).to_string();
                value.push(c);
                self.update_field(field, value)
            }
            None => self,
        }
    }

    /// Delete the last character of the focused input
    pub fn pop_char(self) -> Self {
        match self.focused_field() {
            Some(field) => {
                let mut value = self.value(field).to_string();
                value.pop();
                self.update_field(field, value)
            }
            None => self,
        }
    }

    /// Line break, only meaningful in the multiline message input
    pub fn push_newline(self) -> Self {
        match self.focused_field() {
            Some(field) if field.is_multiline() => self.push_char('\n'),
            _ => self,
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, phone, message, send button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SEND_BUTTON_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::new()
            .update_field(ContactField::Name, "Ada")
            .update_field(ContactField::Email, "ada@x.com")
            .update_field(ContactField::Message, "Hi")
    }

    mod update_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_replaces_only_the_given_field() {
            let form = filled().update_field(ContactField::Email, "ada@y.com");
            assert_eq!(form.name, "Ada");
            assert_eq!(form.email, "ada@y.com");
            assert_eq!(form.phone, "");
            assert_eq!(form.message, "Hi");
        }

        #[test]
        fn test_does_not_validate() {
            let form = ContactForm::new().update_field(ContactField::Name, "");
            assert_eq!(form.status, SubmissionStatus::Idle);
            assert!(form.missing.is_empty());
        }

        #[test]
        fn test_edit_after_success_returns_to_idle() {
            let mut form = filled();
            form.status = SubmissionStatus::Success;
            let form = form.update_field(ContactField::Phone, "555");
            assert_eq!(form.status, SubmissionStatus::Idle);
            assert_eq!(form.name, "Ada");
        }

        #[test]
        fn test_edit_after_error_keeps_values() {
            let form = filled()
                .begin_submit()
                .complete_failure()
                .update_field(ContactField::Message, "Hi again");
            assert_eq!(form.status, SubmissionStatus::Idle);
            assert_eq!(form.name, "Ada");
            assert_eq!(form.email, "ada@x.com");
            assert_eq!(form.message, "Hi again");
        }

        #[test]
        fn test_ignored_while_submitting() {
            let form = filled().begin_submit();
            let after = form.clone().update_field(ContactField::Name, "Grace");
            assert_eq!(after, form);
        }

        #[test]
        fn test_filling_missing_field_clears_flag() {
            let form = ContactForm::new()
                .with_missing(vec![ContactField::Name, ContactField::Email])
                .update_field(ContactField::Name, "A");
            assert_eq!(form.missing, vec![ContactField::Email]);
        }
    }

    mod validate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_all_required() {
            assert_eq!(
                ContactForm::new().validate(),
                vec![ContactField::Name, ContactField::Email, ContactField::Message]
            );
        }

        #[test]
        fn test_filled_form_is_valid() {
            assert!(filled().validate().is_empty());
        }

        #[test]
        fn test_phone_never_required() {
            let form = filled().update_field(ContactField::Phone, "");
            assert!(form.validate().is_empty());
        }

        #[test]
        fn test_each_required_field_detected() {
            for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
                let form = filled().update_field(field, "");
                assert_eq!(form.validate(), vec![field]);
            }
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_empty_and_idle() {
            let form = ContactForm::new();
            assert_eq!(form.name, "");
            assert_eq!(form.email, "");
            assert_eq!(form.phone, "");
            assert_eq!(form.message, "");
            assert_eq!(form.status, SubmissionStatus::Idle);
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = filled().update_field(ContactField::Phone, "555-1234");
            form.status = SubmissionStatus::Error;
            form.active_field_index = 3;
            assert_eq!(form.reset(), ContactForm::new());
        }

        #[test]
        fn test_success_then_reset() {
            let sent = filled().begin_submit().complete_success();
            assert_eq!(sent.status, SubmissionStatus::Success);
            assert!(sent.is_sent());
            assert_eq!(sent.name, "Ada");

            let form = sent.reset();
            assert_eq!(form.status, SubmissionStatus::Idle);
            assert_eq!(form, ContactForm::new());
        }

        #[test]
        fn test_failure_keeps_values() {
            let before = filled();
            let after = before.clone().begin_submit().complete_failure();
            assert_eq!(after.status, SubmissionStatus::Error);
            assert_eq!(after.name, before.name);
            assert_eq!(after.email, before.email);
            assert_eq!(after.phone, before.phone);
            assert_eq!(after.message, before.message);
        }

        #[test]
        fn test_begin_submit_clears_missing() {
            let form = filled()
                .with_missing(vec![ContactField::Email])
                .begin_submit();
            assert!(form.missing.is_empty());
            assert!(form.is_submitting());
        }

        #[test]
        fn test_cancel_submit_only_leaves_submitting() {
            let form = filled().begin_submit().cancel_submit();
            assert_eq!(form.status, SubmissionStatus::Idle);

            let failed = filled().begin_submit().complete_failure().cancel_submit();
            assert_eq!(failed.status, SubmissionStatus::Error);
        }
    }

    mod keystrokes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_and_pop_char_edit_focused_field() {
            let mut form = ContactForm::new();
            form.set_active_field(1);
            let form = form.push_char('a').push_char('b').pop_char();
            assert_eq!(form.email, "a");
            assert_eq!(form.name, "");
        }

        #[test]
        fn test_keystrokes_ignored_on_send_button() {
            let mut form = filled();
            form.set_active_field(4);
            let after = form.clone().push_char('x').pop_char();
            assert_eq!(after, form);
        }

        #[test]
        fn test_newline_only_in_message() {
            let form = ContactForm::new().push_newline();
            assert_eq!(form.name, "");

            let mut form = ContactForm::new();
            form.set_active_field(3);
            let form = form.push_char('a').push_newline().push_char('b');
            assert_eq!(form.message, "a\nb");
        }

        #[test]
        fn test_keystroke_after_error_returns_to_idle() {
            let form = filled().begin_submit().complete_failure().push_char('!');
            assert_eq!(form.status, SubmissionStatus::Idle);
            assert_eq!(form.name, "Ada!");
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count() {
            assert_eq!(ContactForm::new().field_count(), 5);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_wraps_to_send_button() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_send_button_active());
            assert_eq!(form.focused_field(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 4);
        }

        #[test]
        fn test_focused_field_follows_index() {
            let mut form = ContactForm::new();
            form.set_active_field(2);
            assert_eq!(form.focused_field(), Some(ContactField::Phone));
        }
    }
}
