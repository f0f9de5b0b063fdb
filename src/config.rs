// src/config.rs

use std::env;

use anyhow::{bail, Context, Result};
use secrecy::SecretString;
use url::Url;

/// Default Etherscan v2 endpoint. The chain is selected per call via `chainid`.
pub const DEFAULT_ETHERSCAN_API_URL: &str = "https://api.etherscan.io/v2/api";

/// How the tool host is exposed to the agent process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerMode {
    /// Newline-delimited JSON-RPC on stdin/stdout.
    Stdio,
    /// JSON-RPC and REST-style tool routes over HTTP.
    Http,
}

// A struct to hold all configuration, loaded once at startup from the environment / .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub port: u16,
    pub mode: ServerMode,

    /// Etherscan credential. Absence is reported on each tool call, not at startup.
    pub etherscan_api_key: Option<SecretString>,
    pub etherscan_api_url: String,
    /// Chain used when a tool call does not pass `chainid`.
    pub default_chain_id: String,
    /// Upper bound for a single upstream round trip.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            mode: ServerMode::Stdio,
            etherscan_api_key: None,
            etherscan_api_url: DEFAULT_ETHERSCAN_API_URL.to_string(),
            default_chain_id: "1".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Returns true when an API key is available for upstream calls.
    pub fn has_api_key(&self) -> bool {
        self.etherscan_api_key.is_some()
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        // An empty key is treated the same as a missing one
        let etherscan_api_key = env::var("ETHERSCAN_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(SecretString::new);

        let etherscan_api_url =
            env::var("ETHERSCAN_API_URL").unwrap_or(defaults.etherscan_api_url);
        Url::parse(&etherscan_api_url).context("ETHERSCAN_API_URL must be a valid URL")?;

        let default_chain_id = env::var("ETHERSCAN_DEFAULT_CHAIN_ID")
            .map(|raw| crate::utils::normalize_chain_id(&raw))
            .unwrap_or(defaults.default_chain_id);

        let request_timeout_secs = match env::var("ETHERSCAN_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("ETHERSCAN_TIMEOUT_SECS must be a valid number of seconds")?,
            Err(_) => defaults.request_timeout_secs,
        };
        if request_timeout_secs == 0 {
            bail!("ETHERSCAN_TIMEOUT_SECS must be greater than zero");
        }

        let mode = match env::var("MCP_TRANSPORT") {
            Ok(raw) => parse_mode(&raw)?,
            Err(_) => defaults.mode,
        };

        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .context("PORT must be a valid number")?,
            mode,
            etherscan_api_key,
            etherscan_api_url,
            default_chain_id,
            request_timeout_secs,
        })
    }
}

fn parse_mode(raw: &str) -> Result<ServerMode> {
    match raw.trim().to_lowercase().as_str() {
        "" | "stdio" => Ok(ServerMode::Stdio),
        "http" => Ok(ServerMode::Http),
        other => bail!("MCP_TRANSPORT must be 'stdio' or 'http', got '{}'", other),
    }
}
