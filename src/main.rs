// src/main.rs

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use etherscan_mcp_server::{
    api,
    config::{Config, ServerMode},
    mcp::stdio::run_stdio,
    tools, AppState,
};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// --- HTTP Server Logic ---
async fn run_http_server(state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], state.config.port));
    let app = api::create_router(state);

    info!("🚀 HTTP Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("HTTP server error")
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Load configuration
    let mut config = Config::from_env().context("failed to load configuration")?;

    if args.iter().any(|a| a == "--list-tools") {
        print!("{}", tools::render_markdown(&config.default_chain_id));
        return Ok(());
    }
    if args.iter().any(|a| a == "--http") {
        config.mode = ServerMode::Http;
    }

    // Missing key is not fatal: every tool call reports it instead
    if !config.has_api_key() {
        warn!("ETHERSCAN_API_KEY environment variable not set");
    }

    let mode = config.mode;
    let state = AppState::new(config).context("failed to initialize Etherscan client")?;
    info!(
        "Serving {} Etherscan tools against {}",
        tools::catalogue().len(),
        state.etherscan.base_url()
    );

    match mode {
        ServerMode::Stdio => run_stdio(state).await,
        ServerMode::Http => run_http_server(state).await,
    }
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout is the protocol channel
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "etherscan_mcp_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        error!("❌ {:#}", e);
        std::process::exit(1);
    }
}
