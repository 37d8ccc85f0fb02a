//! Domain validation errors for core domain types.
//!
//! These errors are raised when a fetched record cannot be turned into a
//! quote without corrupting it. They are surfaced to the caller instead of
//! being silently defaulted.
//!
//! # Examples
//!
//! ```
//! use vault_quote_sync::domain::error::DomainError;
//! use vault_quote_sync::domain::LoanPeriod;
//!
//! let result = LoanPeriod::parse("six months");
//! assert!(matches!(result, Err(DomainError::MalformedRecord { field: "loan_period_months__c", .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record field could not be interpreted.
    #[error("malformed record {id}: {field} {reason}")]
    MalformedRecord {
        /// Identifier of the offending record, when known.
        id: String,
        /// Vault field name that failed to parse.
        field: &'static str,
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl DomainError {
    /// Attach a record identifier to an error raised before the id was known.
    #[must_use]
    pub fn for_record(self, record_id: &str) -> Self {
        match self {
            Self::MalformedRecord { field, reason, .. } => Self::MalformedRecord {
                id: record_id.to_string(),
                field,
                reason,
            },
        }
    }
}
