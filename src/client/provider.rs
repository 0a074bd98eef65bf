// src/client/provider.rs

//! HTTP endpoint providers and the loose inputs they are resolved from.
//!
//! Node endpoints arrive either as already-constructed providers, as URL
//! strings, or as raw JSON values read from configuration. Everything is
//! normalized at this boundary so the client context only ever stores
//! validated providers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::client::models::{ClientError, NodeKind};

/// HTTP provider for a node endpoint.
///
/// Wraps a validated absolute URL; the URL is checked once at construction
/// so every stored provider is usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpProvider {
    host: Url,
}

impl HttpProvider {
    /// Create a provider from a host URL string.
    pub fn new(host: &str) -> Result<Self, ClientError> {
        let url =
            Url::parse(host).map_err(|_| ClientError::InvalidProviderUrl(host.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidProviderUrl(host.to_string()));
        }
        Ok(Self { host: url })
    }

    /// The validated host URL.
    pub fn host(&self) -> &Url {
        &self.host
    }
}

/// True iff `candidate` is a provider-shaped value: an object exposing a
/// `host` string that is itself a valid provider URL. Reachability is not
/// checked, and no input ever makes this fail.
pub fn is_valid_provider(candidate: &Value) -> bool {
    candidate
        .as_object()
        .and_then(|object| object.get("host"))
        .and_then(Value::as_str)
        .map(|host| HttpProvider::new(host).is_ok())
        .unwrap_or(false)
}

/// Loose node endpoint argument: a URL string, an existing provider, or a
/// raw JSON value.
#[derive(Debug, Clone)]
pub enum ProviderInput {
    Url(String),
    Provider(HttpProvider),
    Raw(Value),
}

impl ProviderInput {
    /// Resolve into a normalized provider for the given node.
    pub(crate) fn resolve(self, node: NodeKind) -> Result<HttpProvider, ClientError> {
        match self {
            ProviderInput::Url(host) => HttpProvider::new(&host),
            ProviderInput::Provider(provider) => Ok(provider),
            ProviderInput::Raw(Value::String(host)) => HttpProvider::new(&host),
            ProviderInput::Raw(value) => {
                if let Some(host) = value.get("host").and_then(Value::as_str) {
                    if let Ok(provider) = HttpProvider::new(host) {
                        return Ok(provider);
                    }
                }
                Err(ClientError::InvalidProviderType(node))
            }
        }
    }
}

impl From<&str> for ProviderInput {
    fn from(value: &str) -> Self {
        ProviderInput::Url(value.to_string())
    }
}

impl From<String> for ProviderInput {
    fn from(value: String) -> Self {
        ProviderInput::Url(value)
    }
}

impl From<HttpProvider> for ProviderInput {
    fn from(value: HttpProvider) -> Self {
        ProviderInput::Provider(value)
    }
}

impl From<&HttpProvider> for ProviderInput {
    fn from(value: &HttpProvider) -> Self {
        ProviderInput::Provider(value.clone())
    }
}

impl From<Value> for ProviderInput {
    fn from(value: Value) -> Self {
        ProviderInput::Raw(value)
    }
}

impl From<&Value> for ProviderInput {
    fn from(value: &Value) -> Self {
        ProviderInput::Raw(value.clone())
    }
}

/// Loose event server argument: a URL string, an already-validated URL, or a
/// raw JSON value (`false` meaning "no event server").
#[derive(Debug, Clone)]
pub enum EventServerInput {
    Url(String),
    Server(Url),
    Raw(Value),
}

impl EventServerInput {
    /// Resolve into the stored form; `Ok(None)` means "cleared".
    pub(crate) fn resolve(self) -> Result<Option<Url>, ClientError> {
        match self {
            EventServerInput::Url(host) => parse_event_url(&host).map(Some),
            EventServerInput::Server(url) => Ok(Some(url)),
            EventServerInput::Raw(Value::Bool(false)) => Ok(None),
            EventServerInput::Raw(Value::String(host)) => parse_event_url(&host).map(Some),
            EventServerInput::Raw(_) => Err(ClientError::InvalidEventServerUrl),
        }
    }
}

fn parse_event_url(host: &str) -> Result<Url, ClientError> {
    let url = Url::parse(host).map_err(|_| ClientError::InvalidEventServerUrl)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidEventServerUrl);
    }
    Ok(url)
}

impl From<&str> for EventServerInput {
    fn from(value: &str) -> Self {
        EventServerInput::Url(value.to_string())
    }
}

impl From<String> for EventServerInput {
    fn from(value: String) -> Self {
        EventServerInput::Url(value)
    }
}

impl From<Url> for EventServerInput {
    fn from(value: Url) -> Self {
        EventServerInput::Server(value)
    }
}

impl From<bool> for EventServerInput {
    fn from(value: bool) -> Self {
        EventServerInput::Raw(Value::Bool(value))
    }
}

impl From<Value> for EventServerInput {
    fn from(value: Value) -> Self {
        EventServerInput::Raw(value)
    }
}

impl From<&Value> for EventServerInput {
    fn from(value: &Value) -> Self {
        EventServerInput::Raw(value.clone())
    }
}
