//! EmailJS REST client
//!
//! Posts each message to the `email/send` endpoint. The EmailJS account has
//! to allow API calls from non-browser applications for this to be accepted.

use super::{ContactPayload, NotificationTransport, TransportError};
use crate::config::DispatchConfig;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Request body expected by `email/send`
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    /// The public key travels as `user_id`
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// HTTP transport for the EmailJS service
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: Client,
}

impl EmailJsClient {
    pub fn new() -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http })
    }
}

#[async_trait]
impl NotificationTransport for EmailJsClient {
    async fn send(
        &self,
        config: &DispatchConfig,
        payload: &ContactPayload,
    ) -> Result<(), TransportError> {
        let body = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: payload,
        };

        let mut request = self.http.post(&config.endpoint).json(&body);
        if let Some(timeout) = config.request_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
