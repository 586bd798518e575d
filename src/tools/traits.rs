// ABOUTME: Defines the McpTool trait and ToolCapabilities for the tool layer
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # MCP Tool Trait and Capabilities

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use crate::errors::AppResult;
use crate::mcp::schema::JsonSchema;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool calls the remote service and needs credentials
        const REQUIRES_AUTH = 0b0000_0001;
        /// Tool reads catalog or remote data
        const READS_DATA = 0b0000_0010;
        /// Tool writes remote or on-disk state
        const WRITES_DATA = 0b0000_0100;
        /// Tool operates on the exercise catalog
        const CATALOG = 0b0000_1000;
    }
}

impl ToolCapabilities {
    /// Check if the tool requires COROS credentials
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        self.contains(Self::REQUIRES_AUTH)
    }

    /// Check if the tool writes state
    #[must_use]
    pub const fn writes_data(self) -> bool {
        self.contains(Self::WRITES_DATA)
    }
}

/// The trait every tool implements.
///
/// Tools are `Send + Sync` for safe sharing across async tasks; `name()`
/// returns `&'static str` for zero-allocation registry lookup.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique identifier for the tool (e.g. `search_exercises`)
    fn name(&self) -> &'static str;

    /// Human-readable description for LLM consumption
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters, returned in `tools/list`
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags for filtering and validation
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool with the given arguments and context
    ///
    /// # Errors
    ///
    /// Returns `AppError` for validation failures, auth issues, or
    /// execution errors; the transport recovers these into a structured
    /// failure result.
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}
