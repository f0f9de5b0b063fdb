// src/etherscan/mod.rs

pub mod client;
pub mod error;
pub mod models;

pub use client::EtherscanClient;
pub use error::EtherscanError;
pub use models::{QueryParams, UpstreamEnvelope, NO_TRANSACTIONS_FOUND};
