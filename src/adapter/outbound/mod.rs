//! Outbound adapters (driven side).

pub mod vault;
