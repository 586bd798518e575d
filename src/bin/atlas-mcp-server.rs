// ABOUTME: Server binary: stdio JSON-RPC transport over the tool registry
// ABOUTME: Bootstraps logging, configuration, catalog store, and the COROS client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Atlas MCP Server Binary
//!
//! Speaks MCP over stdio: newline-delimited JSON-RPC requests on stdin,
//! responses on stdout. Logs go to stderr so the protocol stream stays
//! clean.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

use atlas_mcp_server::catalog::store::{CatalogStore, FileSnapshotStorage};
use atlas_mcp_server::config::environment::ServerConfig;
use atlas_mcp_server::constants::service;
use atlas_mcp_server::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use atlas_mcp_server::logging::LoggingConfig;
use atlas_mcp_server::mcp::schema::ServerInfo;
use atlas_mcp_server::providers::coros::CorosClient;
use atlas_mcp_server::tools::{ToolExecutionContext, ToolRegistry, ToolResult};

#[derive(Parser)]
#[command(name = "atlas-mcp-server")]
#[command(about = "Atlas - compose COROS strength workouts from natural-language exercise names")]
struct Args {
    /// Override the catalog snapshot path
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env().init()?;

    let mut config = ServerConfig::from_env();
    if let Some(catalog) = args.catalog {
        config.catalog.snapshot_path = catalog;
    }
    let config = Arc::new(config);

    let store = Arc::new(CatalogStore::new(Box::new(FileSnapshotStorage::new(
        config.catalog.snapshot_candidates(),
    ))));
    let client = Arc::new(CorosClient::new(&config.coros));
    let registry = ToolRegistry::with_default_tools();
    let context = ToolExecutionContext::new(store, client, Arc::clone(&config));

    info!(tools = registry.len(), "{} ready on stdio", service::NAME);

    serve(&registry, &context).await
}

/// Read newline-delimited JSON-RPC requests from stdin until EOF.
async fn serve(registry: &ToolRegistry, context: &ToolExecutionContext) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(request) => {
                // Notifications get no response
                if request.id.is_none() {
                    continue;
                }
                handle_request(registry, context, request).await
            }
            Err(e) => {
                warn!("Unparseable request line: {e}");
                JsonRpcResponse::error(None, error_codes::PARSE_ERROR, format!("parse error: {e}"))
            }
        };

        let mut out = serde_json::to_string(&response)?;
        out.push('\n');
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

async fn handle_request(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    request: JsonRpcRequest,
) -> JsonRpcResponse {
    let id = request.id.clone();
    match request.method.as_str() {
        "initialize" => JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": "2024-11-05",
                "serverInfo": ServerInfo {
                    name: service::NAME.to_owned(),
                    version: env!("CARGO_PKG_VERSION").to_owned(),
                },
                "capabilities": { "tools": {} },
            }),
        ),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => JsonRpcResponse::success(
            id,
            json!({ "tools": registry.tool_schemas() }),
        ),
        "tools/call" => handle_tool_call(registry, context, id, request.params).await,
        other => JsonRpcResponse::error(
            id,
            error_codes::METHOD_NOT_FOUND,
            format!("method not found: {other}"),
        ),
    }
}

async fn handle_tool_call(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    id: Option<Value>,
    params: Option<Value>,
) -> JsonRpcResponse {
    let params = params.unwrap_or_default();
    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(
            id,
            error_codes::INVALID_PARAMS,
            "tools/call requires a tool name",
        );
    };
    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    // Every pipeline failure is recovered into a structured tool result
    // rather than a protocol-level fault, so the agent can read it.
    let result = match registry.execute(name, args, context).await {
        Ok(result) => result,
        Err(error) => {
            error!(tool = name, %error, "Tool execution failed");
            ToolResult::from(error)
        }
    };

    JsonRpcResponse::success(id, tool_response(&result))
}

fn tool_response(result: &ToolResult) -> Value {
    let text = serde_json::to_string_pretty(&result.content)
        .unwrap_or_else(|_| result.content.to_string());
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": result.is_error,
        "structuredContent": result.content,
    })
}
