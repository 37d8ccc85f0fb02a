//! One page of query results.

use super::ids::PageToken;
use super::record::QueryRecord;
use super::status::ProcessedStatus;

/// A page returned by the Vault query API.
///
/// Transient: one per fetched page, consumed by the sync loop.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub records: Vec<QueryRecord>,
    pub next_page: Option<PageToken>,
    pub status: ProcessedStatus,
    /// Value of the burst-limit-remaining header, when present.
    pub burst_remaining: Option<u64>,
}

impl PageResult {
    /// A page for a call that failed before any data could be read.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            records: Vec::new(),
            next_page: None,
            status: ProcessedStatus::Failure,
            burst_remaining: None,
        }
    }
}
