//! Vault REST API client.
//!
//! Implements [`VaultApi`] over `reqwest`. Each call derives a
//! [`ProcessedStatus`] from two signals: the `responseStatus` field of the
//! body and the `X-VaultAPI-BurstLimitRemaining` response header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::dto::{AuthResponse, BulkUpdateResponse, Enveloped, QueryResponse, QuoteUpdate};
use super::settings::{VaultConfig, VaultHttpConfig};
use crate::domain::{PageResult, PageToken, ProcessedStatus, Quote, SessionToken};
use crate::error::{Result, VaultError};
use crate::port::{Credentials, VaultApi};

/// Response header carrying the remaining burst-limit budget.
pub const BURST_LIMIT_HEADER: &str = "X-VaultAPI-BurstLimitRemaining";

/// Request header identifying the calling integration in Vault logs.
pub const CLIENT_ID_HEADER: &str = "X-VaultAPI-ClientID";

/// Outcome of one HTTP exchange with Vault.
struct Call<T> {
    body: Option<T>,
    status: ProcessedStatus,
    burst_remaining: Option<u64>,
}

/// HTTP client for the Vault REST API.
pub struct VaultClient {
    http: HttpClient,
    /// Versioned API base URL, always ending in `/`.
    base_url: String,
    client_id: String,
    object: String,
    burst_limit_cutoff: u64,
}

impl VaultClient {
    /// Create a client with default HTTP settings.
    #[must_use]
    pub fn new(config: &VaultConfig) -> Self {
        Self::with_http(config, HttpClient::new())
    }

    /// Create a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &VaultConfig, http: &VaultHttpConfig) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(Duration::from_millis(http.timeout_ms))
            .connect_timeout(Duration::from_millis(http.connect_timeout_ms))
            .build()?;
        Ok(Self::with_http(config, client))
    }

    /// Create a client around an existing `reqwest` client.
    #[must_use]
    pub fn with_http(config: &VaultConfig, http: HttpClient) -> Self {
        Self {
            http,
            base_url: config.normalized_base_url(),
            client_id: config.client_id.clone(),
            object: config.object.clone(),
            burst_limit_cutoff: config.burst_limit_cutoff,
        }
    }

    fn authorized(&self, request: RequestBuilder, session: &SessionToken) -> RequestBuilder {
        request
            .header("Authorization", session.expose())
            .header(CLIENT_ID_HEADER, &self.client_id)
            .header("Accept", "application/json")
    }

    /// Send a request and classify the response.
    ///
    /// Transport errors and unreadable bodies become `Failure`; they are logged
    /// here and never returned as errors.
    async fn execute<T>(&self, method: &'static str, url: &str, request: RequestBuilder) -> Call<T>
    where
        T: DeserializeOwned + Enveloped,
    {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(method, url = %url, error = %err, "Vault request failed");
                return Call {
                    body: None,
                    status: ProcessedStatus::Failure,
                    burst_remaining: None,
                };
            }
        };

        let burst_remaining = burst_remaining(response.headers());
        let http_status = response.status();
        let body = match response.json::<T>().await {
            Ok(body) => body,
            Err(err) => {
                warn!(
                    method,
                    url = %url,
                    http_status = %http_status,
                    error = %err,
                    "Unreadable Vault response"
                );
                return Call {
                    body: None,
                    status: ProcessedStatus::Failure,
                    burst_remaining,
                };
            }
        };

        let envelope = body.envelope();
        let ok = envelope.is_success();
        if !ok {
            warn!(
                method,
                url = %url,
                http_status = %http_status,
                error = %envelope.error_message(),
                "Vault call failed"
            );
        } else if burst_remaining.is_none() {
            debug!(method, url = %url, "No burst limit header in response");
        }

        let status = ProcessedStatus::evaluate(ok, burst_remaining, self.burst_limit_cutoff);
        if status == ProcessedStatus::BurstBreach {
            warn!(
                url = %url,
                remaining = ?burst_remaining,
                cutoff = self.burst_limit_cutoff,
                "Vault burst limit cutoff reached"
            );
        }

        Call {
            body: Some(body),
            status,
            burst_remaining,
        }
    }

    fn page_from(call: Call<QueryResponse>) -> PageResult {
        let Some(body) = call.body else {
            return PageResult {
                burst_remaining: call.burst_remaining,
                ..PageResult::failed()
            };
        };

        PageResult {
            records: body.data.into_iter().map(Into::into).collect(),
            next_page: body.response_details.next_page.map(PageToken::new),
            status: call.status,
            burst_remaining: call.burst_remaining,
        }
    }
}

fn burst_remaining(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(BURST_LIMIT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Resolve a next-page cursor against the API base URL.
///
/// Vault returns cursors as absolute API paths (`/api/v24.1/query/...`); the
/// part from `query` onwards is appended to the configured versioned base URL.
#[must_use]
pub fn resolve_next_page(base_url: &str, token: &str) -> String {
    match token.find("query") {
        Some(index) => format!("{base_url}{}", &token[index..]),
        None if token.starts_with("http://") || token.starts_with("https://") => token.to_string(),
        None => format!("{base_url}{}", token.trim_start_matches('/')),
    }
}

#[async_trait]
impl VaultApi for VaultClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken> {
        let url = format!("{}auth", self.base_url);
        info!(url = %url, username = %credentials.username, "Authenticating with Vault");

        let response = self
            .http
            .post(&url)
            .header(CLIENT_ID_HEADER, &self.client_id)
            .header("Accept", "application/json")
            .form(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
                ("client_id", self.client_id.as_str()),
            ])
            .send()
            .await
            .map_err(|err| {
                warn!(url = %url, error = %err, "Vault authentication request failed");
                VaultError::AuthenticationFailed {
                    url: url.clone(),
                    message: err.to_string(),
                }
            })?;

        let http_status = response.status();
        let response: AuthResponse = response.json().await.map_err(|err| {
            warn!(
                url = %url,
                http_status = %http_status,
                error = %err,
                "Unreadable Vault authentication response"
            );
            VaultError::AuthenticationFailed {
                url: url.clone(),
                message: format!("unreadable response ({http_status}): {err}"),
            }
        })?;

        let session_id = match response.session_id {
            Some(ref session_id) if response.envelope.is_success() && !session_id.is_empty() => {
                session_id.clone()
            }
            _ => {
                let message = response.envelope.error_message();
                warn!(url = %url, error = %message, "Vault authentication failed");
                return Err(VaultError::AuthenticationFailed { url, message }.into());
            }
        };

        let session = SessionToken::new(session_id);
        info!(session = %session, "Logged in to Vault");
        Ok(session)
    }

    async fn query(&self, session: &SessionToken, vql: &str) -> PageResult {
        let url = format!("{}query", self.base_url);
        let request = self.authorized(self.http.post(&url), session).form(&[("q", vql)]);
        Self::page_from(self.execute("POST", &url, request).await)
    }

    async fn fetch_page(&self, session: &SessionToken, token: &PageToken) -> PageResult {
        let url = resolve_next_page(&self.base_url, token.as_str());
        debug!(url = %url, "Fetching next query page");
        let request = self.authorized(self.http.get(&url), session);
        Self::page_from(self.execute("GET", &url, request).await)
    }

    async fn bulk_update(&self, session: &SessionToken, quotes: &[Quote]) -> ProcessedStatus {
        let url = format!("{}vobjects/{}", self.base_url, self.object);
        let body: Vec<QuoteUpdate<'_>> = quotes.iter().map(QuoteUpdate::from).collect();
        let request = self
            .authorized(self.http.put(&url), session)
            .query(&[("client_id", self.client_id.as_str())])
            .json(&body);

        let call: Call<BulkUpdateResponse> = self.execute("PUT", &url, request).await;
        if let Some(body) = &call.body {
            let failed: Vec<_> = body
                .data
                .iter()
                .filter(|row| !row.envelope.is_success())
                .collect();
            if let Some(first) = failed.first() {
                warn!(
                    url = %url,
                    failed = failed.len(),
                    total = body.data.len(),
                    error = %first.envelope.error_message(),
                    "Some records were not updated"
                );
            }
        }
        call.status
    }
}
