//! Validate, build the payload, send

use super::{ContactPayload, DispatchError, DispatchResult, NotificationTransport};
use crate::config::{ConfigError, DispatchConfig};
use crate::state::ContactForm;
use std::sync::Arc;

/// Sends contact form snapshots through a notification transport.
///
/// The configuration is checked once, when the dispatcher is built. A
/// dispatcher with incomplete configuration refuses every submit without
/// touching the transport.
#[derive(Clone)]
pub struct SubmissionDispatcher {
    config: Result<DispatchConfig, ConfigError>,
    transport: Arc<dyn NotificationTransport>,
}

impl SubmissionDispatcher {
    pub fn new(
        config: Result<DispatchConfig, ConfigError>,
        transport: Arc<dyn NotificationTransport>,
    ) -> Self {
        match &config {
            Ok(config) => tracing::info!(
                "Contact form ready (service {}, template {})",
                config.service_id,
                config.template_id
            ),
            Err(err) => tracing::error!("Contact form unavailable: {err}"),
        }
        Self { config, transport }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_ok()
    }

    /// Deliver one form snapshot. Does not modify the form.
    pub async fn submit(&self, form: &ContactForm) -> DispatchResult {
        let missing = form.validate();
        if !missing.is_empty() {
            tracing::debug!("Submit blocked, missing fields: {missing:?}");
            return Err(DispatchError::Validation(missing));
        }

        let config = match &self.config {
            Ok(config) => config,
            Err(err) => {
                tracing::error!("Cannot send contact message: {err}");
                return Err(err.clone().into());
            }
        };

        let payload = ContactPayload::from_form(form);
        tracing::info!("Sending contact message via {}", config.endpoint);

        match self.transport.send(config, &payload).await {
            Ok(()) => {
                tracing::info!("Contact message accepted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Contact message failed: {err}");
                Err(err.into())
            }
        }
    }
}
