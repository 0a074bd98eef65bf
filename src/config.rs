// src/config.rs

use std::env;

use anyhow::{Context, Result};

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Node endpoints
    pub full_node_url: String,
    pub solidity_node_url: String,
    pub event_server_url: Option<String>,

    // Signing defaults
    pub private_key: Option<String>,

    // Read defaults
    pub default_block: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Only presence is checked here; endpoint and key validation happens
    /// when the client context is built from this configuration.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        Ok(Config {
            full_node_url: env::var("TRON_FULL_NODE")
                .context("TRON_FULL_NODE must be set to the full node URL")?,
            solidity_node_url: env::var("TRON_SOLIDITY_NODE")
                .context("TRON_SOLIDITY_NODE must be set to the solidity node URL")?,
            event_server_url: env::var("TRON_EVENT_SERVER").ok(),
            private_key: env::var("TRON_PRIVATE_KEY").ok(),
            default_block: env::var("TRON_DEFAULT_BLOCK").ok(),
        })
    }
}
