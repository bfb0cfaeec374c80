//! Template parameters sent with each contact message

use crate::state::ContactForm;
use serde::Serialize;

/// Stand-in for an empty phone number
pub const PHONE_NOT_PROVIDED: &str = "Not Provided";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactPayload {
    pub fn from_form(form: &ContactForm) -> Self {
        let phone = if form.phone.is_empty() {
            PHONE_NOT_PROVIDED.to_string()
        } else {
            form.phone.clone()
        };

        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone,
            message: form.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactField;
    use pretty_assertions::assert_eq;

    fn form(phone: &str) -> ContactForm {
        ContactForm::new()
            .update_field(ContactField::Name, "Ada")
            .update_field(ContactField::Email, "ada@x.com")
            .update_field(ContactField::Phone, phone)
            .update_field(ContactField::Message, "Hi")
    }

    #[test]
    fn test_empty_phone_becomes_not_provided() {
        let payload = ContactPayload::from_form(&form(""));
        assert_eq!(
            payload,
            ContactPayload {
                name: "Ada".to_string(),
                email: "ada@x.com".to_string(),
                phone: "Not Provided".to_string(),
                message: "Hi".to_string(),
            }
        );
    }

    #[test]
    fn test_phone_passes_through_unchanged() {
        let payload = ContactPayload::from_form(&form("555-1234"));
        assert_eq!(payload.phone, "555-1234");
    }

    #[test]
    fn test_serializes_with_template_keys() {
        let json = serde_json::to_value(ContactPayload::from_form(&form(""))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@x.com",
                "phone": "Not Provided",
                "message": "Hi"
            })
        );
    }
}
