//! Vault connection configuration.

use serde::Deserialize;

use crate::port::Credentials;

/// HTTP settings for Vault REST calls.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    30_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    10_000
}

impl Default for VaultHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}

/// Vault REST API configuration.
///
/// The password is loaded from `VAULT_PASSWORD` at runtime (never from the
/// config file).
#[derive(Clone, Deserialize)]
pub struct VaultConfig {
    /// Versioned API base URL, e.g. `https://myvault.veevavault.com/api/v24.1/`.
    #[serde(default)]
    pub base_url: String,
    /// Integration user name.
    #[serde(default)]
    pub username: Option<String>,
    /// Integration user password, from `VAULT_PASSWORD`.
    #[serde(skip)]
    pub password: Option<String>,
    /// Client ID used to identify calls in Vault API logs.
    #[serde(default)]
    pub client_id: String,
    /// Object holding the loan approval records.
    #[serde(default = "default_object")]
    pub object: String,
    /// Stop processing once the remaining burst budget is at or below this.
    #[serde(default = "default_burst_limit_cutoff")]
    pub burst_limit_cutoff: u64,
    /// Records per query page (VQL `LIMIT`), at most 1000.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

fn default_object() -> String {
    "vsdk_loan_approval__c".to_string()
}

const fn default_burst_limit_cutoff() -> u64 {
    200
}

const fn default_page_limit() -> u32 {
    200
}

impl VaultConfig {
    /// Credentials for password authentication, when both parts are present.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) if !username.is_empty() => Some(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    /// Base URL with a guaranteed trailing slash.
    #[must_use]
    pub fn normalized_base_url(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            username: None,
            password: None,
            client_id: String::new(),
            object: default_object(),
            burst_limit_cutoff: default_burst_limit_cutoff(),
            page_limit: default_page_limit(),
        }
    }
}

impl std::fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("client_id", &self.client_id)
            .field("object", &self.object)
            .field("burst_limit_cutoff", &self.burst_limit_cutoff)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}
