//! Path utilities.

use std::path::PathBuf;

/// Environment variable pointing at the configuration file.
pub const CONFIG_ENV: &str = "VAULT_QUOTE_SYNC_CONFIG";

/// Returns the default config file path.
///
/// `VAULT_QUOTE_SYNC_CONFIG` when set, otherwise `config.toml` in the working
/// directory.
pub fn default_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}
