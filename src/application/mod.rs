//! Application services (use cases).
//!
//! Quote generation is pure; the sync loop coordinates it with the Vault
//! port.

pub mod quote;
pub mod sync;

pub use sync::{Clock, QuoteSync, SyncReport};
