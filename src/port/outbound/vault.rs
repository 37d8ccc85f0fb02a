//! Vault REST API port.
//!
//! Defines the remote-client contract used by the sync loop. Implementations
//! issue the actual HTTP calls; the loop only sees records and status values.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{PageResult, PageToken, ProcessedStatus, Quote, SessionToken};
use crate::error::Result;

/// Username and password for a Vault integration user.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for the Vault REST API.
///
/// Apart from [`authenticate`](Self::authenticate), operations never fail with
/// an error: remote failures, transport failures and burst-limit exhaustion are
/// reported through [`ProcessedStatus`] so the caller can gate further work on
/// the returned value. Implementations log every failure with the URL and the
/// remote error message.
#[async_trait]
pub trait VaultApi: Send + Sync {
    /// Open a session for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::AuthenticationFailed`](crate::error::VaultError::AuthenticationFailed)
    /// if Vault rejects the credentials or cannot be reached.
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken>;

    /// Run a VQL query and return its first page.
    async fn query(&self, session: &SessionToken, vql: &str) -> PageResult;

    /// Fetch a subsequent page by its cursor.
    async fn fetch_page(&self, session: &SessionToken, token: &PageToken) -> PageResult;

    /// Write quotes back to their records in one bulk update.
    async fn bulk_update(&self, session: &SessionToken, quotes: &[Quote]) -> ProcessedStatus;
}
