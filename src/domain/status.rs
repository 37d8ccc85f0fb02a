//! Processed status: the control signal for the fetch / write-back loop.

use std::fmt;

use serde::Serialize;

/// Outcome of a single Vault API call.
///
/// Status values flow through the sync loop by value; they are never raised
/// as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessedStatus {
    /// The call succeeded and burst budget remains.
    Success,
    /// Vault reported a non-success response, or the call never completed.
    Failure,
    /// The call succeeded but the remaining burst budget is at or below the cutoff.
    BurstBreach,
}

impl ProcessedStatus {
    /// Combine the response status and the burst-limit counter.
    ///
    /// A failed response is always `Failure`, whatever the counter says.
    /// A missing counter is not treated as throttling.
    #[must_use]
    pub fn evaluate(response_ok: bool, burst_remaining: Option<u64>, cutoff: u64) -> Self {
        if !response_ok {
            return Self::Failure;
        }
        match burst_remaining {
            Some(remaining) if remaining <= cutoff => Self::BurstBreach,
            _ => Self::Success,
        }
    }

    /// True unless the status is `Failure` or `BurstBreach`.
    #[must_use]
    pub const fn is_healthy(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Wire name used in logs and response envelopes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::BurstBreach => "BURST_BREACH",
        }
    }
}

impl fmt::Display for ProcessedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
