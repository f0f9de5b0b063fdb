//! Newline-delimited JSON-RPC over stdin/stdout.
//!
//! Each request runs on its own task so a slow upstream call does not hold
//! up the rest of the session. Responses go through a single writer task,
//! which keeps output lines from interleaving.

use anyhow::{Context, Result};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::mcp::{
    handler::handle_mcp_request,
    protocol::{error_codes, Request, Response},
};
use crate::AppState;

/// Serve the MCP session on the process's stdin/stdout until EOF.
pub async fn run_stdio(state: AppState) -> Result<()> {
    info!("🚀 Starting MCP server on stdin/stdout...");
    serve(BufReader::new(io::stdin()), io::stdout(), state).await?;
    info!("MCP server shutting down");
    Ok(())
}

/// Serve one session over arbitrary streams. Returns the writer once every
/// in-flight request has been answered.
pub async fn serve<R, W>(reader: R, writer: W, state: AppState) -> Result<W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<Response>();
    let writer_task = tokio::spawn(write_responses(rx, writer));

    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("EOF received, shutting down MCP server");
                break;
            }
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!("Received: {}", line);

        match parse_line(line) {
            Ok(request) => {
                let state = state.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    if let Some(response) = handle_mcp_request(request, state).await {
                        // The writer only goes away after every sender is dropped
                        let _ = tx.send(response);
                    }
                });
            }
            Err(response) => {
                let _ = tx.send(response);
            }
        }
    }

    // Close our sender; the writer drains whatever in-flight tasks still produce.
    drop(tx);
    writer_task.await.context("response writer task failed")
}

/// Decode one input line. Malformed JSON is a parse error; well-formed JSON
/// that is not a request is an invalid request and keeps its id when it has one.
fn parse_line(line: &str) -> std::result::Result<Request, Response> {
    let value: Value = serde_json::from_str(line).map_err(|e| {
        error!("JSON parse error: {}", e);
        Response::error(
            Value::Null,
            error_codes::PARSE_ERROR,
            format!("Parse error: {}", e),
        )
    })?;
    let id = value.get("id").cloned().unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| {
        error!("Invalid request: {}", e);
        Response::error(
            id,
            error_codes::INVALID_REQUEST,
            format!("Invalid Request: {}", e),
        )
    })
}

async fn write_responses<W>(mut rx: mpsc::UnboundedReceiver<Response>, mut writer: W) -> W
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                continue;
            }
        };
        debug!("Sending: {}", line);
        line.push('\n');

        if let Err(e) = writer.write_all(line.as_bytes()).await {
            error!("Failed to write response: {}", e);
            break;
        }
        if let Err(e) = writer.flush().await {
            error!("Failed to flush response: {}", e);
            break;
        }
    }
    writer
}
