//! Vault-agnostic domain types: records, quotes, pages and status signals.

pub mod error;

mod ids;
mod page;
mod query;
mod quote;
mod record;
mod status;

pub use ids::{PageToken, RecordId, SessionToken};
pub use page::PageResult;
pub use query::{LoanQuery, LOAN_FIELDS};
pub use quote::{ApprovalStatus, Quote, QuoteEvent, APPROVAL_LIMIT, REQUOTE_EVENT};
pub use record::{LoanPeriod, QueryRecord, LOAN_AMOUNT_FIELD};
pub use status::ProcessedStatus;
