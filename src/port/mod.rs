//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   queue message ──▶ adapter::inbound ──▶ application ──▶ port::VaultApi
//!                                                              ▲
//!                                          adapter::outbound::vault
//! ```

pub mod outbound;

pub use outbound::vault::{Credentials, VaultApi};
