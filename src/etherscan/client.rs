//! HTTP adapter for the Etherscan v2 REST endpoint.
//!
//! Every tool call ends up here: one GET with the assembled query string,
//! followed by envelope normalization. There are no retries; the only bound
//! on a call is the configured request timeout.

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::error::EtherscanError;
use super::models::{QueryParams, UpstreamEnvelope};
use crate::config::Config;

/// Longest slice of an error body quoted back to the caller.
const BODY_EXCERPT_LEN: usize = 200;

#[derive(Clone)]
pub struct EtherscanClient {
    http: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl EtherscanClient {
    /// Build a client from configuration. The credential is captured here but
    /// only checked when a call is made.
    pub fn new(config: &Config) -> Result<Self, EtherscanError> {
        let base_url = Url::parse(&config.etherscan_api_url).map_err(|e| {
            EtherscanError::Configuration(format!(
                "invalid Etherscan URL '{}': {}",
                config.etherscan_api_url, e
            ))
        })?;

        // Idle connections are not kept, so concurrent calls never share one.
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .pool_max_idle_per_host(0)
            .user_agent(concat!("etherscan-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                EtherscanError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url,
            api_key: config.etherscan_api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn api_key(&self) -> Result<&SecretString, EtherscanError> {
        self.api_key.as_ref().ok_or_else(|| {
            EtherscanError::Configuration(
                "ETHERSCAN_API_KEY environment variable is not set".to_string(),
            )
        })
    }

    /// Fails with a configuration error when no API key was provided.
    pub fn ensure_api_key(&self) -> Result<(), EtherscanError> {
        self.api_key().map(|_| ())
    }

    /// URL without the credential; safe to log.
    fn endpoint_for(&self, params: &QueryParams) -> Url {
        let mut url = self.base_url.clone();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.present());
        }
        url
    }

    /// Full request URL: present parameters in order, then `apikey`.
    pub fn request_url(&self, params: &QueryParams) -> Result<Url, EtherscanError> {
        let key = self.api_key()?;
        let mut url = self.endpoint_for(params);
        url.query_pairs_mut()
            .append_pair("apikey", key.expose_secret());
        Ok(url)
    }

    /// Fetch and normalize one upstream reply.
    pub async fn fetch(&self, params: &QueryParams) -> Result<Value, EtherscanError> {
        let url = self.request_url(params)?;
        debug!("Etherscan GET {}", self.endpoint_for(params));

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            warn!("Etherscan returned HTTP {}", status);
            return Err(EtherscanError::Transport(format!(
                "upstream returned HTTP {}: {}",
                status,
                excerpt(&body)
            )));
        }

        let json: Value = serde_json::from_str(&body).map_err(|e| {
            EtherscanError::Transport(format!(
                "invalid JSON response ({}): {}",
                e,
                excerpt(&body)
            ))
        })?;
        if !json.is_object() {
            warn!("Etherscan returned a non-object JSON body");
            return Err(EtherscanError::Transport(format!(
                "unexpected response shape: {}",
                excerpt(&body)
            )));
        }

        let envelope = UpstreamEnvelope::from_value(json);
        if envelope.is_failure() {
            warn!(
                "Etherscan reported failure: {}",
                envelope.message.as_deref().unwrap_or("<no message>")
            );
        }
        envelope.into_result()
    }

    /// Fetch and render the result as indented JSON text for the tool host.
    pub async fn call(&self, params: &QueryParams) -> Result<String, EtherscanError> {
        let value = self.fetch(params).await?;
        serde_json::to_string_pretty(&value)
            .map_err(|e| EtherscanError::Transport(format!("failed to render result: {}", e)))
    }
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_key(key: Option<&str>) -> EtherscanClient {
        let config = Config {
            etherscan_api_key: key.map(|k| SecretString::new(k.to_string())),
            ..Config::default()
        };
        EtherscanClient::new(&config).unwrap()
    }

    #[test]
    fn apikey_is_appended_last() {
        let client = client_with_key(Some("KEY"));
        let mut params = QueryParams::for_action("account", "balance");
        params.push("address", "0xabc");
        params.push("chainid", "1");

        let url = client.request_url(&params).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.first().unwrap(), &("module".to_string(), "account".to_string()));
        assert_eq!(pairs.last().unwrap(), &("apikey".to_string(), "KEY".to_string()));
        assert_eq!(url.path(), "/v2/api");
    }

    #[test]
    fn unset_parameters_never_reach_the_query() {
        let client = client_with_key(Some("KEY"));
        let mut params = QueryParams::for_action("proxy", "eth_estimateGas");
        params.push_opt("value", None);
        params.push_opt("gas", Some("0x5f5e0ff".into()));

        let url = client.request_url(&params).unwrap();
        let query = url.query().unwrap();
        assert!(!query.contains("value="));
        assert!(query.contains("gas=0x5f5e0ff"));
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let client = client_with_key(None);
        let params = QueryParams::for_action("stats", "ethprice");
        assert!(matches!(
            client.request_url(&params),
            Err(EtherscanError::Configuration(_))
        ));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let long = "é".repeat(BODY_EXCERPT_LEN + 10);
        assert_eq!(excerpt(&long).chars().count(), BODY_EXCERPT_LEN);
        assert_eq!(excerpt("short"), "short");
    }
}
