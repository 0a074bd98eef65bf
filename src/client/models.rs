// src/client/models.rs
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::client::provider::HttpProvider;

/// Which node endpoint a provider operation was targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Full,
    Solidity,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Full => f.write_str("full"),
            NodeKind::Solidity => f.write_str("solidity"),
        }
    }
}

// --- Error types for client configuration ---

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid {node} node configuration: {source}")]
    InvalidProviderConfig {
        node: NodeKind,
        #[source]
        source: Box<ClientError>,
    },
    #[error("invalid event server configuration: {source}")]
    InvalidEventServerConfig {
        #[source]
        source: Box<ClientError>,
    },
    #[error("invalid private key provided")]
    InvalidPrivateKey,
    #[error("invalid block ID provided: {0}")]
    InvalidBlockId(String),
    #[error("invalid address provided: {0}")]
    InvalidAddress(String),
    #[error("invalid {0} node provided")]
    InvalidProviderType(NodeKind),
    #[error("invalid URL provided to HTTP provider: {0}")]
    InvalidProviderUrl(String),
    #[error("invalid URL provided for event server")]
    InvalidEventServerUrl,
}

/// Block reference that read operations fall back to when none is given per
/// call. An unset default is represented as `Option::None` on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultBlock {
    Earliest,
    Latest,
    Number(u64),
}

/// Loose input for `set_default_block`: an integer, or a string holding an
/// integer or one of the `earliest`/`latest` tags.
#[derive(Debug, Clone)]
pub enum BlockInput {
    Int(i64),
    Str(String),
}

impl From<i64> for BlockInput {
    fn from(value: i64) -> Self {
        BlockInput::Int(value)
    }
}

impl From<i32> for BlockInput {
    fn from(value: i32) -> Self {
        BlockInput::Int(value.into())
    }
}

impl From<&str> for BlockInput {
    fn from(value: &str) -> Self {
        BlockInput::Str(value.to_string())
    }
}

impl From<String> for BlockInput {
    fn from(value: String) -> Self {
        BlockInput::Str(value)
    }
}

/// Snapshot of the currently configured endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Providers {
    pub full_node: HttpProvider,
    pub solidity_node: HttpProvider,
    pub event_server: Option<Url>,
}
