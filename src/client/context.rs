// src/client/context.rs

//! The client context: configured endpoints plus the default signing key,
//! address and block reference that request builders fall back to.

use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::client::models::{BlockInput, ClientError, DefaultBlock, NodeKind, Providers};
use crate::client::provider::{EventServerInput, HttpProvider, ProviderInput};
use crate::config::Config;
use crate::crypto::{Address, PrivateKey};

/// Timeout applied to the event server reachability probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Client context for a Tron-style network.
///
/// Holds the full node and solidity node providers, the optional event
/// server, and the session-wide defaults. All mutators validate eagerly and
/// leave the context untouched on failure; if a default private key is set,
/// the default address is always the one derived from it.
#[derive(Debug, Clone)]
pub struct TronClient {
    full_node: HttpProvider,
    solidity_node: HttpProvider,
    event_server: Option<Url>,
    default_private_key: Option<PrivateKey>,
    default_address: Option<Address>,
    default_block: Option<DefaultBlock>,
}

impl TronClient {
    /// Create a context from the two required node endpoints.
    pub fn new<F, S>(full_node: F, solidity_node: S) -> Result<Self, ClientError>
    where
        F: Into<ProviderInput>,
        S: Into<ProviderInput>,
    {
        let full_node = full_node.into().resolve(NodeKind::Full).map_err(|source| {
            ClientError::InvalidProviderConfig {
                node: NodeKind::Full,
                source: Box::new(source),
            }
        })?;
        let solidity_node = solidity_node
            .into()
            .resolve(NodeKind::Solidity)
            .map_err(|source| ClientError::InvalidProviderConfig {
                node: NodeKind::Solidity,
                source: Box::new(source),
            })?;

        Ok(Self {
            full_node,
            solidity_node,
            event_server: None,
            default_private_key: None,
            default_address: None,
            default_block: None,
        })
    }

    /// Attach an event server endpoint at construction time.
    pub fn with_event_server<E>(mut self, event_server: E) -> Result<Self, ClientError>
    where
        E: Into<EventServerInput>,
    {
        self.event_server = event_server.into().resolve().map_err(|source| {
            ClientError::InvalidEventServerConfig {
                source: Box::new(source),
            }
        })?;
        Ok(self)
    }

    /// Attach a default signing key at construction time.
    pub fn with_private_key(mut self, private_key: &str) -> Result<Self, ClientError> {
        self.set_private_key(private_key)?;
        Ok(self)
    }

    /// Build a context from the process configuration.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let mut client = Self::new(
            config.full_node_url.as_str(),
            config.solidity_node_url.as_str(),
        )?;
        if let Some(event_server) = &config.event_server_url {
            client = client.with_event_server(event_server.as_str())?;
        }
        if let Some(private_key) = &config.private_key {
            client = client.with_private_key(private_key)?;
        }
        if let Some(block) = &config.default_block {
            client.set_default_block(Some(block.as_str()))?;
        }
        Ok(client)
    }

    // --- Accessors ---

    pub fn full_node(&self) -> &HttpProvider {
        &self.full_node
    }

    pub fn solidity_node(&self) -> &HttpProvider {
        &self.solidity_node
    }

    pub fn event_server(&self) -> Option<&Url> {
        self.event_server.as_ref()
    }

    pub fn default_private_key(&self) -> Option<&PrivateKey> {
        self.default_private_key.as_ref()
    }

    pub fn default_address(&self) -> Option<&Address> {
        self.default_address.as_ref()
    }

    pub fn default_block(&self) -> Option<DefaultBlock> {
        self.default_block
    }

    /// Snapshot of the configured endpoints.
    pub fn current_providers(&self) -> Providers {
        Providers {
            full_node: self.full_node.clone(),
            solidity_node: self.solidity_node.clone(),
            event_server: self.event_server.clone(),
        }
    }

    /// Alias of [`TronClient::current_providers`], kept for compatibility.
    pub fn current_provider(&self) -> Providers {
        self.current_providers()
    }

    // --- Mutators ---

    /// Set or clear the default block reference.
    ///
    /// Negative numbers are stored as their absolute value rather than
    /// rejected; block `0` is valid and distinct from a cleared default.
    pub fn set_default_block<B>(&mut self, block: Option<B>) -> Result<(), ClientError>
    where
        B: Into<BlockInput>,
    {
        let Some(block) = block else {
            self.default_block = None;
            return Ok(());
        };
        self.default_block = Some(parse_block(block.into())?);
        Ok(())
    }

    /// Set the default address from either display form.
    ///
    /// An explicitly assigned address wins over the configured private key:
    /// if the key no longer derives the new address, the key is cleared.
    pub fn set_address(&mut self, address: &str) -> Result<(), ClientError> {
        let address: Address = address.parse()?;
        if let Some(key) = &self.default_private_key {
            if key.address() != address {
                warn!("default address no longer matches the configured private key, clearing the key");
                self.default_private_key = None;
            }
        }
        self.default_address = Some(address);
        Ok(())
    }

    /// Set the default signing key; the default address becomes the address
    /// derived from it.
    pub fn set_private_key(&mut self, private_key: &str) -> Result<(), ClientError> {
        let key = PrivateKey::from_hex(private_key)?;
        self.default_address = Some(key.address());
        self.default_private_key = Some(key);
        Ok(())
    }

    /// Replace the full node provider.
    pub fn set_full_node<P>(&mut self, provider: P) -> Result<(), ClientError>
    where
        P: Into<ProviderInput>,
    {
        self.full_node = provider.into().resolve(NodeKind::Full)?;
        Ok(())
    }

    /// Replace the solidity node provider.
    pub fn set_solidity_node<P>(&mut self, provider: P) -> Result<(), ClientError>
    where
        P: Into<ProviderInput>,
    {
        self.solidity_node = provider.into().resolve(NodeKind::Solidity)?;
        Ok(())
    }

    /// Replace or clear the event server endpoint.
    pub fn set_event_server<E>(&mut self, event_server: Option<E>) -> Result<(), ClientError>
    where
        E: Into<EventServerInput>,
    {
        self.event_server = match event_server {
            None => None,
            Some(input) => input.into().resolve()?,
        };
        Ok(())
    }

    // --- Connectivity ---

    /// Probe the configured event server.
    ///
    /// Never fails: a missing configuration, connection error, timeout or
    /// non-success status all collapse to `false`.
    pub async fn is_event_server_connected(&self) -> bool {
        let Some(event_server) = &self.event_server else {
            return false;
        };
        let Ok(url) = event_server.join("healthcheck") else {
            return false;
        };
        let request = reqwest::Client::new().get(url).send();
        match tokio::time::timeout(PROBE_TIMEOUT, request).await {
            Ok(Ok(response)) => response.status().is_success(),
            Ok(Err(error)) => {
                debug!("event server probe failed: {error}");
                false
            }
            Err(_) => {
                debug!("event server probe timed out");
                false
            }
        }
    }
}

fn parse_block(input: BlockInput) -> Result<DefaultBlock, ClientError> {
    match input {
        BlockInput::Int(n) => Ok(DefaultBlock::Number(n.unsigned_abs())),
        BlockInput::Str(s) => {
            match s.as_str() {
                "earliest" => return Ok(DefaultBlock::Earliest),
                "latest" => return Ok(DefaultBlock::Latest),
                _ => {}
            }
            if let Ok(n) = s.parse::<i64>() {
                return Ok(DefaultBlock::Number(n.unsigned_abs()));
            }
            Err(ClientError::InvalidBlockId(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_normalizes_sign() {
        assert_eq!(
            parse_block(BlockInput::Int(-2)).unwrap(),
            DefaultBlock::Number(2)
        );
        assert_eq!(
            parse_block(BlockInput::Str("-7".to_string())).unwrap(),
            DefaultBlock::Number(7)
        );
    }

    #[test]
    fn test_parse_block_rejects_fractions() {
        assert!(matches!(
            parse_block(BlockInput::Str("10.2".to_string())),
            Err(ClientError::InvalidBlockId(_))
        ));
    }
}
