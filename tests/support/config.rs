use std::io::Write;

use tempfile::NamedTempFile;
use vault_quote_sync::adapter::outbound::vault::VaultConfig;

pub const BASE_URL: &str = "https://myvault.veevavault.com/api/v24.1/";

pub const VALID_TOML: &str = r#"
[vault]
base_url = "https://myvault.veevavault.com/api/v24.1/"
client_id = "acme-quote-sync"
username = "integration@acme.com"
object = "vsdk_loan_approval__c"
burst_limit_cutoff = 200
page_limit = 200

[boundary]
report_failures = false

[logging]
level = "warn"
format = "pretty"
"#;

/// Vault configuration with credentials, as loaded from file and environment.
pub fn vault_config() -> VaultConfig {
    VaultConfig {
        base_url: BASE_URL.to_string(),
        username: Some("integration@acme.com".to_string()),
        password: Some("hunter2".to_string()),
        client_id: "acme-quote-sync".to_string(),
        ..Default::default()
    }
}

pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("vault-quote-sync-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}
