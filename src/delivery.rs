//! Outbound webhook delivery.
//!
//! The formatted payload is POSTed as JSON to an externally configured URL.
//! Delivery has no retry policy of its own; transport failures and non-2xx
//! responses surface as [`EngineError::DeliveryFailed`] for the caller to
//! log or propagate.

use reqwest::Client;

use crate::error::{EngineError, EngineResult};
use crate::payload::WebhookPayload;

/// Sends webhook payloads to a fixed delivery target.
#[derive(Debug, Clone)]
pub struct WebhookSender {
    client: Client,
    url: String,
}

impl WebhookSender {
    /// Creates a sender for the given webhook URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Returns the delivery target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// POSTs the payload as a JSON body to the webhook URL.
    ///
    /// An empty payload (no notifications in either category) is still a
    /// valid send; consumers receive `{"notifications": []}`.
    pub async fn send(&self, payload: &WebhookPayload) -> EngineResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| EngineError::DeliveryFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::DeliveryFailed {
                message: format!("webhook returned {}", status),
            });
        }

        Ok(())
    }
}
