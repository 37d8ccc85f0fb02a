//! Configuration validation command handler.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, ENV_PASSWORD, ENV_USER};

/// Validate the configuration file and environment without calling Vault.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;
    let vault = &config.vault;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Vault");
    output::field("Base URL", vault.normalized_base_url());
    output::field("Client ID", &vault.client_id);
    output::field("Object", &vault.object);
    output::field("Page limit", vault.page_limit);
    output::field("Burst cutoff", vault.burst_limit_cutoff);
    if output::verbosity() > 0 {
        output::field("Timeout (ms)", config.http.timeout_ms);
        output::field("Log level", &config.logging.level);
    }
    output::field("Report failures", config.boundary.report_failures);

    if vault.credentials().is_some() {
        output::success("Vault credentials detected");
    } else {
        output::warning("Vault credentials not configured");
        if vault.username.is_none() {
            output::field("Missing", ENV_USER);
        }
        if vault.password.is_none() {
            output::field("Missing", ENV_PASSWORD);
        }
        output::hint("messages without a sessionId will fail to authenticate");
    }

    output::success("Configuration check complete");

    Ok(())
}
