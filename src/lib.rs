// src/lib.rs

//! Client facade for Tron-style networks.
//!
//! Configures the full node, solidity node and event server endpoints,
//! manages the optional default signing key and the address derived from it,
//! validates user-supplied identifiers (addresses, block references, URLs,
//! private keys), and exposes connectivity introspection. Request building
//! and transport live in the layers above this crate.

// Re-export commonly used types
pub use url::Url;

// Re-export modules
pub mod client;
pub mod config;
pub mod crypto;

pub use client::{
    is_valid_provider, BlockInput, ClientError, DefaultBlock, EventServerInput, HttpProvider,
    NodeKind, ProviderInput, Providers, TronClient,
};
pub use config::Config;
pub use crypto::{Address, PrivateKey};
