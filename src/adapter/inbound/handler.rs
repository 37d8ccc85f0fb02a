//! Queue message handler.
//!
//! Unpacks one message into record ids and an event, obtains a Vault session
//! and runs the quote sync loop. The response envelope keeps the
//! `200 / "Function processed"` contract by default; the final processed
//! status is always reported in `outcome`, and mapped onto the status code
//! when `report_failures` is enabled.

use serde::Serialize;
use tracing::{error, info, warn};

use super::message::QueueMessage;
use crate::adapter::outbound::vault::VaultConfig;
use crate::application::{QuoteSync, SyncReport};
use crate::domain::{ProcessedStatus, SessionToken};
use crate::error::{ConfigError, Result};
use crate::port::VaultApi;

/// Body returned for every handled message.
pub const RESPONSE_BODY: &str = "Function processed";

/// Response envelope returned to the queue runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    pub outcome: ProcessedStatus,
}

impl HandlerResponse {
    #[must_use]
    pub fn new(outcome: ProcessedStatus, report_failures: bool) -> Self {
        let status_code = match (report_failures, outcome) {
            (false, _) | (true, ProcessedStatus::Success) => 200,
            (true, ProcessedStatus::BurstBreach) => 429,
            (true, ProcessedStatus::Failure) => 502,
        };
        Self {
            status_code,
            body: RESPONSE_BODY.to_string(),
            outcome,
        }
    }
}

/// Handles queue messages against one Vault.
pub struct QuoteHandler<V: VaultApi> {
    vault: V,
    config: VaultConfig,
    report_failures: bool,
}

impl<V: VaultApi> QuoteHandler<V> {
    pub fn new(vault: V, config: VaultConfig) -> Self {
        Self {
            vault,
            config,
            report_failures: false,
        }
    }

    /// Map non-success outcomes onto non-200 status codes.
    #[must_use]
    pub fn report_failures(mut self, enabled: bool) -> Self {
        self.report_failures = enabled;
        self
    }

    /// The underlying Vault client.
    pub fn vault(&self) -> &V {
        &self.vault
    }

    /// Handle one message. Never fails: every problem is logged and folded
    /// into the response outcome.
    pub async fn handle(&self, delivery: &QueueMessage) -> HandlerResponse {
        if let Some(message_id) = &delivery.message_id {
            info!(message_id = %message_id, "Handling queue message");
        }

        let outcome = match self.process(delivery).await {
            Ok(report) => report.status,
            Err(err) => {
                error!(error = %err, "Quote processing aborted");
                ProcessedStatus::Failure
            }
        };

        HandlerResponse::new(outcome, self.report_failures)
    }

    async fn process(&self, delivery: &QueueMessage) -> Result<SyncReport> {
        let message = &delivery.message;
        let ids = message.record_ids();
        let event = message.event();
        info!(
            event = %message.attributes.event,
            items = ids.len(),
            "Processing loan quote batch"
        );
        if let Some(object) = message.attributes.object.as_deref() {
            if object != self.config.object {
                warn!(
                    message_object = %object,
                    configured_object = %self.config.object,
                    "Message names a different object, updating the configured one"
                );
            }
        }

        if ids.is_empty() {
            return Ok(SyncReport::default());
        }

        let session = self.session(delivery).await?;
        QuoteSync::new(&self.vault, &self.config.object, self.config.page_limit)
            .run(&ids, &event, &session)
            .await
    }

    async fn session(&self, delivery: &QueueMessage) -> Result<SessionToken> {
        if let Some(session) = delivery.message.session() {
            info!(session = %session, "Using session from message");
            return Ok(session);
        }

        let credentials = self.config.credentials().ok_or(ConfigError::MissingField {
            field: "VAULT_PASSWORD",
        })?;
        self.vault.authenticate(&credentials).await
    }
}
