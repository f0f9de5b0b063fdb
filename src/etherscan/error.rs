use thiserror::Error;

/// Failure classes of a single upstream call.
#[derive(Error, Debug)]
pub enum EtherscanError {
    /// Missing credential or an unusable client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Network failure, timeout, non-2xx status or a body that is not JSON.
    #[error("HTTP request failed: {0}")]
    Transport(String),
    /// Etherscan answered with `status: "0"` for a real failure.
    #[error("Etherscan API error: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for EtherscanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EtherscanError::Transport(format!("request timed out: {}", err))
        } else {
            EtherscanError::Transport(err.to_string())
        }
    }
}
