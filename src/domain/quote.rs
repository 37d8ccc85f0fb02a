//! Derived loan quotes.

use std::fmt;

use chrono::{DateTime, Utc};

use super::ids::RecordId;

/// Event label sent by the Vault record action that requests a re-quote.
pub const REQUOTE_EVENT: &str = "Loan re-quote";

/// Loan amount above which a quote is rejected.
pub const APPROVAL_LIMIT: i64 = 100_000;

/// The Vault event that triggered a quote run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteEvent {
    /// A re-quote of an existing loan approval; discounted rate.
    Requote,
    /// Any other event, such as a record insert trigger.
    Other(String),
}

impl QuoteEvent {
    /// Classify an event label. Only the exact re-quote label is recognised.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == REQUOTE_EVENT {
            Self::Requote
        } else {
            Self::Other(label.to_string())
        }
    }

    /// Annual interest rate in whole percent.
    #[must_use]
    pub const fn annual_rate_percent(&self) -> u32 {
        match self {
            Self::Requote => 12,
            Self::Other(_) => 15,
        }
    }
}

/// Approval decision attached to a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Vault picklist value.
    #[must_use]
    pub const fn as_picklist(self) -> &'static str {
        match self {
            Self::Approved => "approved__c",
            Self::Rejected => "rejected__c",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => f.write_str("approved"),
            Self::Rejected => f.write_str("rejected"),
        }
    }
}

/// A loan quote derived from exactly one [`QueryRecord`](super::QueryRecord).
///
/// Created once per record per run and never mutated; it is dropped after the
/// write-back call regardless of its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Id of the record this quote was derived from.
    pub id: RecordId,
    pub reference_number: String,
    pub received_at: DateTime<Utc>,
    pub annual_rate_percent: u32,
    pub monthly_payment: i64,
    pub total_repayable: i64,
    pub approval_status: ApprovalStatus,
    pub quote_count: u32,
}

impl Quote {
    /// Received timestamp in Vault's datetime format, second precision.
    #[must_use]
    pub fn received_date(&self) -> String {
        self.received_at.format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
    }

    /// Annual rate as a percentage label, e.g. `"15%"`.
    #[must_use]
    pub fn interest_rate_label(&self) -> String {
        format!("{}%", self.annual_rate_percent)
    }
}
