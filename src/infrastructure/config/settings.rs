//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file, then overridden from the
//! environment, then validated. The Vault password is only ever read from
//! `VAULT_PASSWORD`.
//!
//! # Example
//!
//! ```no_run
//! use vault_quote_sync::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(None);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::vault::{VaultConfig, VaultHttpConfig};
use crate::error::{ConfigError, Result};

/// Largest page size the Vault query API accepts.
pub const MAX_PAGE_LIMIT: u32 = 1000;

pub const ENV_BASE_URL: &str = "VAULT_REST_API_BASE_URL";
pub const ENV_USER: &str = "VAULT_USER";
pub const ENV_PASSWORD: &str = "VAULT_PASSWORD";
pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
pub const ENV_BURST_LIMIT_CUTOFF: &str = "VAULT_API_BURST_LIMIT_CUTOFF";
pub const ENV_PAGE_LIMIT: &str = "VAULT_VQL_PAGE_LIMIT";

/// Response envelope behaviour.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundaryConfig {
    /// Map failed or throttled runs onto non-200 status codes.
    ///
    /// Off by default: the handler always answers 200.
    #[serde(default)]
    pub report_failures: bool,
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Vault connection and query settings.
    #[serde(default)]
    pub vault: VaultConfig,

    /// HTTP client timeouts.
    #[serde(default)]
    pub http: VaultHttpConfig,

    /// Response envelope behaviour.
    #[serde(default)]
    pub boundary: BoundaryConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, an override cannot be
    /// parsed, or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment
    /// lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::parse_toml`].
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self, level_override: Option<&str>) {
        self.logging.init(level_override);
    }

    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vault = &mut self.vault;
        if let Some(base_url) = env(ENV_BASE_URL) {
            vault.base_url = base_url;
        }
        if let Some(username) = env(ENV_USER) {
            vault.username = Some(username);
        }
        vault.password = env(ENV_PASSWORD).filter(|p| !p.is_empty());
        if let Some(client_id) = env(ENV_CLIENT_ID) {
            vault.client_id = client_id;
        }
        if let Some(raw) = env(ENV_BURST_LIMIT_CUTOFF) {
            vault.burst_limit_cutoff = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_BURST_LIMIT_CUTOFF,
                reason: format!("expected a non-negative integer, got {raw:?}"),
            })?;
        }
        if let Some(raw) = env(ENV_PAGE_LIMIT) {
            vault.page_limit = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_PAGE_LIMIT,
                reason: format!("expected a positive integer, got {raw:?}"),
            })?;
        }
        Ok(())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        let vault = &self.vault;
        if vault.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        let url = url::Url::parse(&vault.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported scheme {:?}", url.scheme()),
            }
            .into());
        }
        if vault.client_id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "client_id" }.into());
        }
        if vault.object.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "object" }.into());
        }
        if vault.page_limit == 0 || vault.page_limit > MAX_PAGE_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "page_limit",
                reason: format!("must be between 1 and {MAX_PAGE_LIMIT}"),
            }
            .into());
        }
        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    const MINIMAL: &str = r#"
[vault]
base_url = "https://myvault.veevavault.com/api/v24.1/"
client_id = "acme-quote-sync"
"#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::parse_toml_with_env(MINIMAL, no_env).unwrap();

        assert_eq!(config.vault.object, "vsdk_loan_approval__c");
        assert_eq!(config.vault.burst_limit_cutoff, 200);
        assert_eq!(config.vault.page_limit, 200);
        assert!(config.vault.password.is_none());
        assert!(!config.boundary.report_failures);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.http.timeout_ms, 30_000);
    }

    #[test]
    fn environment_overrides_file_values() {
        let env = env_from(&[
            (ENV_BASE_URL, "https://other.veevavault.com/api/v23.3/"),
            (ENV_USER, "svc@example.com"),
            (ENV_PASSWORD, "s3cret"),
            (ENV_CLIENT_ID, "env-client"),
            (ENV_BURST_LIMIT_CUTOFF, "150"),
            (ENV_PAGE_LIMIT, "500"),
        ]);

        let config = Config::parse_toml_with_env(MINIMAL, env).unwrap();

        assert_eq!(config.vault.base_url, "https://other.veevavault.com/api/v23.3/");
        assert_eq!(config.vault.client_id, "env-client");
        assert_eq!(config.vault.burst_limit_cutoff, 150);
        assert_eq!(config.vault.page_limit, 500);
        let credentials = config.vault.credentials().unwrap();
        assert_eq!(credentials.username, "svc@example.com");
        assert_eq!(credentials.password, "s3cret");
    }

    #[test]
    fn password_in_file_is_ignored() {
        let toml = format!("{MINIMAL}username = \"svc\"\npassword = \"from-file\"\n");
        let config = Config::parse_toml_with_env(&toml, no_env).unwrap();
        assert!(config.vault.password.is_none());
        assert!(config.vault.credentials().is_none());
    }

    #[test]
    fn rejects_missing_base_url() {
        let result = Config::parse_toml_with_env("[vault]\nclient_id = \"x\"\n", no_env);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "base_url" }))
        ));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let toml = "[vault]\nbase_url = \"not a url\"\nclient_id = \"x\"\n";
        let result = Config::parse_toml_with_env(toml, no_env);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "base_url", .. }))
        ));
    }

    #[test]
    fn rejects_missing_client_id() {
        let toml = "[vault]\nbase_url = \"https://v.example.com/api/v24.1/\"\n";
        let result = Config::parse_toml_with_env(toml, no_env);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "client_id" }))
        ));
    }

    #[test]
    fn rejects_page_limit_out_of_range() {
        for limit in ["0", "1001"] {
            let env = env_from(&[(ENV_PAGE_LIMIT, limit)]);
            let result = Config::parse_toml_with_env(MINIMAL, env);
            assert!(
                matches!(
                    result,
                    Err(Error::Config(ConfigError::InvalidValue { field: "page_limit", .. }))
                ),
                "limit {limit} should be rejected"
            );
        }

        let env = env_from(&[(ENV_PAGE_LIMIT, "1000")]);
        assert!(Config::parse_toml_with_env(MINIMAL, env).is_ok());
    }

    #[test]
    fn rejects_unparseable_cutoff() {
        let env = env_from(&[(ENV_BURST_LIMIT_CUTOFF, "two hundred")]);
        let result = Config::parse_toml_with_env(MINIMAL, env);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: ENV_BURST_LIMIT_CUTOFF,
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Config::parse_toml_with_env("[vault\n", no_env);
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
