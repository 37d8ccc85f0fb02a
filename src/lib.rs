//! vault-quote-sync - loan quote generation for Vault records.
//!
//! A queue message names a batch of loan approval records. For each batch the
//! crate queries the records page by page, computes a quote per record and
//! bulk-updates the quotes back onto the records, stopping early when a call
//! fails or the Vault burst limit runs low.
//!
//! # Architecture
//!
//! - [`domain`] - Records, quotes, query pages and the processed status signal
//! - [`port`] - The [`port::VaultApi`] contract used by the sync loop
//! - [`application`] - Quote arithmetic and the paginated sync loop
//! - [`adapter`] - Queue message handler, CLI and the Vault REST client
//! - [`infrastructure`] - Configuration loading and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use vault_quote_sync::adapter::inbound::{QueueMessage, QuoteHandler};
//! use vault_quote_sync::adapter::outbound::vault::VaultClient;
//! use vault_quote_sync::infrastructure::config::settings::Config;
//!
//! # async fn run() -> vault_quote_sync::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let client = VaultClient::from_config(&config.vault, &config.http)?;
//! let handler = QuoteHandler::new(client, config.vault.clone());
//!
//! let message = QueueMessage::parse(r#"{"attributes": {"event": "Loan re-quote"}, "items": ["V6A01"]}"#)?;
//! let response = handler.handle(&message).await;
//! println!("{}", response.outcome);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
