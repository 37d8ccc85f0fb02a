//! Queue message formats.
//!
//! A Vault Spark message carries attributes (the triggering event and an
//! optional session id) and a list of record ids. It may arrive bare, wrapped
//! as `{"message": {...}}`, or inside a queue delivery envelope
//! `{"Records": [{"messageId": "...", "body": "<json>"}]}` whose body is the
//! wrapped message serialized as a string.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{QuoteEvent, RecordId, SessionToken};
use crate::error::{Result, VaultError};

/// Attributes set by the Vault record action or trigger.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageAttributes {
    #[serde(default)]
    pub event: String,
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
}

/// A Vault Spark message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparkMessage {
    #[serde(default)]
    pub attributes: MessageAttributes,
    pub items: Vec<String>,
}

impl SparkMessage {
    #[must_use]
    pub fn event(&self) -> QuoteEvent {
        QuoteEvent::from_label(&self.attributes.event)
    }

    #[must_use]
    pub fn record_ids(&self) -> Vec<RecordId> {
        self.items.iter().map(|id| RecordId::new(id.as_str())).collect()
    }

    /// Session passed along with the message, if it is non-empty.
    #[must_use]
    pub fn session(&self) -> Option<SessionToken> {
        self.attributes
            .session_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(SessionToken::new)
    }
}

/// One delivered message, with the queue's message id when available.
#[derive(Debug, Clone)]
pub struct QueueMessage {
    pub message_id: Option<String>,
    pub message: SparkMessage,
}

impl QueueMessage {
    /// Parse any of the accepted message shapes.
    ///
    /// Only the first record of a queue delivery envelope is used.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, an empty `Records` array, a
    /// record without a body, or a payload with neither `message` nor
    /// `items`.
    pub fn parse(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    pub fn from_value(mut value: Value) -> Result<Self> {
        let mut message_id = None;

        if let Some(records) = value.get_mut("Records") {
            let record = records
                .as_array_mut()
                .and_then(|records| records.first_mut())
                .map(Value::take)
                .ok_or_else(|| VaultError::InvalidMessage("no records in delivery".into()))?;

            message_id = record
                .get("messageId")
                .and_then(Value::as_str)
                .map(str::to_string);

            value = match record.get("body") {
                Some(Value::String(body)) => serde_json::from_str(body)?,
                Some(body @ Value::Object(_)) => body.clone(),
                _ => {
                    return Err(VaultError::InvalidMessage("record has no body".into()).into());
                }
            };
        }

        if let Some(inner) = value.get_mut("message") {
            value = inner.take();
        } else if value.get("items").is_none() {
            return Err(
                VaultError::InvalidMessage("payload has neither message nor items".into()).into(),
            );
        }

        let message: SparkMessage = serde_json::from_value(value)?;
        Ok(Self {
            message_id,
            message,
        })
    }
}
