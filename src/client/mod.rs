// src/client/mod.rs

// Re-export the context module with the client facade
pub mod context;
pub use context::TronClient;

// Re-export other modules
pub mod models;
pub mod provider;

// Re-export commonly used types
pub use models::{BlockInput, ClientError, DefaultBlock, NodeKind, Providers};
pub use provider::{is_valid_provider, EventServerInput, HttpProvider, ProviderInput};
