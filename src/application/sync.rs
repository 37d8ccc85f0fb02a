//! Paginated fetch / quote / write-back loop.
//!
//! The loop walks the query result pages for one batch of record ids:
//!
//! ```text
//! Fetching ──▶ Processing ──▶ Advancing ──▶ Fetching ...
//!                   │
//!                   └──▶ Done | Failed | Throttled   (no next page)
//! ```
//!
//! Processing a page means generating quotes and bulk-updating them. Once any
//! fetch or write-back yields `Failure` or `BurstBreach` the loop stops
//! processing for the rest of the run but keeps draining next-page cursors,
//! and the halting status is the one reported.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::quote;
use crate::domain::{
    LoanQuery, PageResult, PageToken, ProcessedStatus, QuoteEvent, RecordId, SessionToken,
};
use crate::error::Result;
use crate::port::VaultApi;

/// Source of the timestamp stamped on each page's quotes.
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Summary of one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Final status: the first halting status, or the last healthy one.
    pub status: ProcessedStatus,
    pub pages_fetched: usize,
    pub pages_processed: usize,
    pub quotes_sent: usize,
}

impl Default for SyncReport {
    fn default() -> Self {
        Self {
            status: ProcessedStatus::Success,
            pages_fetched: 0,
            pages_processed: 0,
            quotes_sent: 0,
        }
    }
}

enum Stage {
    Fetching(Option<PageToken>),
    Processing(PageResult),
    Advancing(PageToken),
    Done,
    Failed,
    Throttled,
}

impl Stage {
    fn terminal(status: ProcessedStatus) -> Self {
        match status {
            ProcessedStatus::Success => Self::Done,
            ProcessedStatus::Failure => Self::Failed,
            ProcessedStatus::BurstBreach => Self::Throttled,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetching(_) => "fetching",
            Self::Processing(_) => "processing",
            Self::Advancing(_) => "advancing",
            Self::Done => "done",
            Self::Failed => "failed",
            Self::Throttled => "throttled",
        };
        f.write_str(name)
    }
}

/// Drives quote generation and write-back across query result pages.
pub struct QuoteSync<'a, V: VaultApi + ?Sized> {
    vault: &'a V,
    object: &'a str,
    page_limit: u32,
    clock: Clock,
}

impl<'a, V: VaultApi + ?Sized> QuoteSync<'a, V> {
    pub fn new(vault: &'a V, object: &'a str, page_limit: u32) -> Self {
        Self {
            vault,
            object,
            page_limit,
            clock: Box::new(Utc::now),
        }
    }

    /// Replace the wall clock, e.g. with a fixed instant in tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Run the loop for one batch of record ids.
    ///
    /// An empty batch issues no remote calls and reports `Success`.
    ///
    /// # Errors
    ///
    /// Only a malformed record aborts the run; remote failures and throttling
    /// are reported through [`SyncReport::status`].
    pub async fn run(
        &self,
        ids: &[RecordId],
        event: &QuoteEvent,
        session: &SessionToken,
    ) -> Result<SyncReport> {
        let mut report = SyncReport::default();
        if ids.is_empty() {
            info!("No record ids in batch, nothing to sync");
            return Ok(report);
        }

        let vql = LoanQuery::new(self.object, ids, self.page_limit).to_vql();
        debug!(vql = %vql, "Built loan query");

        let mut halted: Option<ProcessedStatus> = None;
        let mut stage = Stage::Fetching(None);

        loop {
            stage = match stage {
                Stage::Fetching(cursor) => {
                    let page = match &cursor {
                        None => self.vault.query(session, &vql).await,
                        Some(token) => self.vault.fetch_page(session, token).await,
                    };
                    report.pages_fetched += 1;
                    debug!(
                        page = report.pages_fetched,
                        records = page.records.len(),
                        status = %page.status,
                        burst_remaining = ?page.burst_remaining,
                        "Fetched page"
                    );
                    Stage::Processing(page)
                }
                Stage::Processing(page) => {
                    let mut status = page.status;
                    if halted.is_none() && status.is_healthy() {
                        status = self.process(&page, event, session, &mut report).await?;
                    } else {
                        debug!(
                            page = report.pages_fetched,
                            "Skipping page, processing halted"
                        );
                    }

                    if halted.is_none() && !status.is_healthy() {
                        warn!(
                            page = report.pages_fetched,
                            status = %status,
                            "Halting quote processing for remaining pages"
                        );
                        halted = Some(status);
                    }
                    report.status = halted.unwrap_or(status);

                    match page.next_page {
                        Some(token) => Stage::Advancing(token),
                        None => Stage::terminal(report.status),
                    }
                }
                Stage::Advancing(token) => Stage::Fetching(Some(token)),
                terminal @ (Stage::Done | Stage::Failed | Stage::Throttled) => {
                    info!(
                        stage = %terminal,
                        status = %report.status,
                        pages_fetched = report.pages_fetched,
                        pages_processed = report.pages_processed,
                        quotes_sent = report.quotes_sent,
                        "Quote sync finished"
                    );
                    return Ok(report);
                }
            };
        }
    }

    async fn process(
        &self,
        page: &PageResult,
        event: &QuoteEvent,
        session: &SessionToken,
        report: &mut SyncReport,
    ) -> Result<ProcessedStatus> {
        let quotes = quote::generate(&page.records, event, (self.clock)())?;
        report.pages_processed += 1;

        if quotes.is_empty() {
            debug!("Page has no records, skipping write-back");
            return Ok(page.status);
        }

        let status = self.vault.bulk_update(session, &quotes).await;
        report.quotes_sent += quotes.len();
        debug!(count = quotes.len(), status = %status, "Wrote quotes");
        Ok(status)
    }
}
