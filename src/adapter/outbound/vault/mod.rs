//! Vault REST API adapter.
//!
//! - [`client`] - `reqwest` implementation of [`VaultApi`](crate::port::VaultApi)
//! - [`dto`] - wire formats of the auth, query and bulk update endpoints
//! - [`settings`] - connection configuration

pub mod client;
pub mod dto;
pub mod settings;

pub use client::{resolve_next_page, VaultClient, BURST_LIMIT_HEADER, CLIENT_ID_HEADER};
pub use settings::{VaultConfig, VaultHttpConfig};
