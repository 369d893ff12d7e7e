//! Outbound webhook delivery.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tracing::debug;

use super::job::DispatchJob;
use crate::error::DispatchError;

/// Delivers a single job. The result is only ever logged by the queue.
#[async_trait]
pub trait OutboundSender: Send + Sync {
    /// Perform one delivery attempt, returning the HTTP status on success.
    async fn send(&self, job: DispatchJob) -> Result<u16, DispatchError>;
}

/// Posts jobs to `{url_base}{destination key}` as JSON.
pub struct WebhookSender {
    url_base: String,
    client: reqwest::Client,
}

impl WebhookSender {
    pub fn new(url_base: impl Into<String>) -> Self {
        Self {
            url_base: url_base.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, job: &DispatchJob) -> String {
        format!("{}{}", self.url_base, job.destination.secret().expose_secret())
    }
}

#[async_trait]
impl OutboundSender for WebhookSender {
    async fn send(&self, job: DispatchJob) -> Result<u16, DispatchError> {
        let resp = self
            .client
            .post(self.url_for(&job))
            .json(&job.payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(DispatchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(job_id = %job.id, status = status.as_u16(), body = %body, "Webhook accepted item");
        Ok(status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::job::{DestinationKey, WebhookPayload};

    #[test]
    fn url_appends_destination_key() {
        let sender = WebhookSender::new("https://maker.ifttt.com/trigger/list/with/key/");
        let job = DispatchJob::new(WebhookPayload::for_item("eggs"), DestinationKey::new("abc123"));
        assert_eq!(
            sender.url_for(&job),
            "https://maker.ifttt.com/trigger/list/with/key/abc123"
        );
    }
}
