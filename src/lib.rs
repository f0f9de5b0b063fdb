// src/lib.rs

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod etherscan;
pub mod mcp;
pub mod tools;
pub mod utils;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<config::Config>,
    /// Adapter for the Etherscan REST endpoint
    pub etherscan: Arc<etherscan::EtherscanClient>,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Self, etherscan::EtherscanError> {
        let etherscan = etherscan::EtherscanClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            etherscan: Arc::new(etherscan),
        })
    }
}
