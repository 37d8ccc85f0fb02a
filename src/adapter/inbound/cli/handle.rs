//! Handler for the `handle` command.

use std::io::Read;

use tracing::info;

use crate::adapter::inbound::cli::command::HandleArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::handler::QuoteHandler;
use crate::adapter::inbound::message::QueueMessage;
use crate::adapter::outbound::vault::VaultClient;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Process one message and print the response envelope as JSON.
pub async fn execute(args: &HandleArgs, log_level: Option<&str>) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.init_logging(log_level);

    let raw = match &args.message {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let message = QueueMessage::parse(&raw)?;

    let client = VaultClient::from_config(&config.vault, &config.http)?;
    let handler = QuoteHandler::new(client, config.vault.clone())
        .report_failures(config.boundary.report_failures);

    let response = handler.handle(&message).await;
    info!(outcome = %response.outcome, status_code = response.status_code, "Message handled");

    output::json_output(&serde_json::to_value(&response)?);
    Ok(())
}
