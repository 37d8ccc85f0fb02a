use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use vault_quote_sync::domain::{PageResult, PageToken, ProcessedStatus, Quote, SessionToken};
use vault_quote_sync::error::{Result, VaultError};
use vault_quote_sync::port::{Credentials, VaultApi};

/// One call observed by [`ScriptedVault`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Authenticate { username: String },
    Query { session: String, vql: String },
    FetchPage { session: String, token: String },
    BulkUpdate { session: String, quotes: Vec<Quote> },
}

/// In-memory Vault that replays scripted pages and write-back statuses.
///
/// Queries and page fetches pop from the same page script; an exhausted
/// script yields a failed page. Write-backs pop from their own script and
/// default to `Success`.
#[derive(Default)]
pub struct ScriptedVault {
    pages: Mutex<VecDeque<PageResult>>,
    updates: Mutex<VecDeque<ProcessedStatus>>,
    reject_auth: bool,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(mut self, pages: impl IntoIterator<Item = PageResult>) -> Self {
        self.pages = Mutex::new(pages.into_iter().collect());
        self
    }

    pub fn with_updates(mut self, updates: impl IntoIterator<Item = ProcessedStatus>) -> Self {
        self.updates = Mutex::new(updates.into_iter().collect());
        self
    }

    pub fn rejecting_auth(mut self) -> Self {
        self.reject_auth = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("lock vault calls").clone()
    }

    pub fn bulk_updates(&self) -> Vec<Vec<Quote>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::BulkUpdate { quotes, .. } => Some(quotes),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("lock vault calls").push(call);
    }

    fn next_page(&self) -> PageResult {
        self.pages
            .lock()
            .expect("lock vault pages")
            .pop_front()
            .unwrap_or_else(PageResult::failed)
    }
}

#[async_trait]
impl VaultApi for ScriptedVault {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken> {
        self.record(Call::Authenticate {
            username: credentials.username.clone(),
        });
        if self.reject_auth {
            return Err(VaultError::AuthenticationFailed {
                url: "scripted://auth".to_string(),
                message: "INVALID_SESSION_ID".to_string(),
            }
            .into());
        }
        Ok(SessionToken::new("fresh-session"))
    }

    async fn query(&self, session: &SessionToken, vql: &str) -> PageResult {
        self.record(Call::Query {
            session: session.expose().to_string(),
            vql: vql.to_string(),
        });
        self.next_page()
    }

    async fn fetch_page(&self, session: &SessionToken, token: &PageToken) -> PageResult {
        self.record(Call::FetchPage {
            session: session.expose().to_string(),
            token: token.as_str().to_string(),
        });
        self.next_page()
    }

    async fn bulk_update(&self, session: &SessionToken, quotes: &[Quote]) -> ProcessedStatus {
        self.record(Call::BulkUpdate {
            session: session.expose().to_string(),
            quotes: quotes.to_vec(),
        });
        self.updates
            .lock()
            .expect("lock vault updates")
            .pop_front()
            .unwrap_or(ProcessedStatus::Success)
    }
}
