//! Contact form field identifiers

use std::fmt;

/// One input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// All inputs in display order
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "you@example.com",
            Self::Phone => "Optional phone",
            Self::Message => "Write your message...",
        }
    }

    /// Phone is the only optional input
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Phone)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Field at a position in display order
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_phone_is_optional() {
        let optional: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(|f| !f.is_required())
            .collect();
        assert_eq!(optional, vec![ContactField::Phone]);
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(ContactField::Message.is_multiline());
        assert!(!ContactField::Name.is_multiline());
        assert!(!ContactField::Email.is_multiline());
        assert!(!ContactField::Phone.is_multiline());
    }

    #[test]
    fn test_from_index() {
        assert_eq!(ContactField::from_index(0), Some(ContactField::Name));
        assert_eq!(ContactField::from_index(3), Some(ContactField::Message));
        assert_eq!(ContactField::from_index(4), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ContactField::Email.to_string(), "Email");
    }
}
