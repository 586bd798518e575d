// ABOUTME: Defines ToolResult, the structured outcome of one tool execution
// ABOUTME: Converts AppError into a structured failure result at the protocol boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Tool Result Types

use serde_json::Value;

use crate::errors::AppError;

/// Result returned by tool execution.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The result value to return to the client
    pub content: Value,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result with content
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create an error result
    #[must_use]
    pub const fn error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }

    /// Create a text result
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self::ok(Value::String(message.into()))
    }
}

/// Errors are recovered into structured failure results at this
/// boundary; nothing in the pipeline crashes the process.
impl From<AppError> for ToolResult {
    fn from(error: AppError) -> Self {
        Self::error(serde_json::json!({
            "code": error.code,
            "message": error.message,
            "details": error.details,
        }))
    }
}
