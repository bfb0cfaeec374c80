//! Trait abstraction for the notification service to enable mocking in tests

use super::{ContactPayload, TransportError};
use crate::config::DispatchConfig;
use async_trait::async_trait;

/// Delivers a contact payload to the external notification service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    /// Send one message. Resolves once the service has accepted or refused it.
    async fn send(
        &self,
        config: &DispatchConfig,
        payload: &ContactPayload,
    ) -> Result<(), TransportError>;
}
