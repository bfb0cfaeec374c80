//! Dispatch error taxonomy

use crate::config::ConfigError;
use crate::state::ContactField;
use thiserror::Error;

/// Failure reported by the notification transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("notification service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Why a submit attempt did not deliver the message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Required fields were empty; nothing was sent
    #[error("missing required fields: {}", list_fields(.0))]
    Validation(Vec<ContactField>),

    /// Service settings are incomplete; nothing was sent
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("message could not be delivered: {0}")]
    Transport(#[from] TransportError),
}

/// Outcome of one submit attempt
pub type DispatchResult = Result<(), DispatchError>;

fn list_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_labels() {
        let err = DispatchError::Validation(vec![ContactField::Name, ContactField::Message]);
        assert_eq!(err.to_string(), "missing required fields: Name, Message");
    }

    #[test]
    fn test_configuration_is_transparent() {
        let err: DispatchError = ConfigError::Missing(vec!["EMAILJS_PUBLIC_KEY"]).into();
        assert_eq!(
            err.to_string(),
            "missing dispatch configuration: EMAILJS_PUBLIC_KEY"
        );
    }

    #[test]
    fn test_transport_message_includes_cause() {
        let err: DispatchError = TransportError::Rejected {
            status: 400,
            body: "The Public Key is invalid".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "message could not be delivered: notification service rejected the message (400): The Public Key is invalid"
        );
    }
}
