//! Dispatch job model.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shopping::classify;

/// IFTTT Maker webhook body: three positional value slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Item text (the card title on the board).
    pub value1: String,
    /// Comma-joined tag labels.
    pub value2: String,
    /// Reserved, always empty.
    pub value3: String,
}

impl WebhookPayload {
    /// Build the payload for one shopping item, tagging it on the way.
    pub fn for_item(item: &str) -> Self {
        Self {
            value1: item.to_string(),
            value2: classify(item),
            value3: String::new(),
        }
    }
}

/// Opaque per-user webhook key the job is delivered with.
#[derive(Debug)]
pub struct DestinationKey(SecretString);

impl DestinationKey {
    pub fn new(key: impl Into<String>) -> Self {
        let key: String = key.into();
        Self(SecretString::from(key))
    }

    pub fn secret(&self) -> &SecretString {
        &self.0
    }
}

impl Clone for DestinationKey {
    fn clone(&self) -> Self {
        Self::new(self.0.expose_secret())
    }
}

/// One item waiting to be sent.
#[derive(Debug)]
pub struct DispatchJob {
    pub id: Uuid,
    pub payload: WebhookPayload,
    pub destination: DestinationKey,
    pub enqueued_at: DateTime<Utc>,
}

impl DispatchJob {
    pub fn new(payload: WebhookPayload, destination: DestinationKey) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload,
            destination,
            enqueued_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_for_item() {
        let payload = WebhookPayload::for_item("2% Milk");
        assert_eq!(payload.value1, "2% Milk");
        assert_eq!(payload.value2, "Frozen Refrigerated Dairy");
        assert_eq!(payload.value3, "");
    }

    #[test]
    fn payload_serializes_value_slots() {
        let json = serde_json::to_value(WebhookPayload::for_item("bread")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"value1": "bread", "value2": "Dry Goods", "value3": ""})
        );
    }

    #[test]
    fn destination_key_is_redacted_in_debug() {
        let job = DispatchJob::new(WebhookPayload::for_item("eggs"), DestinationKey::new("s3cret"));
        assert_eq!(job.destination.secret().expose_secret(), "s3cret");
        assert!(!format!("{job:?}").contains("s3cret"));
    }
}
