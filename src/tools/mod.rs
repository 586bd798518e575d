// ABOUTME: Tool-registration layer: trait, registry, context, result, and implementations
// ABOUTME: Wraps the catalog and workout pipeline as named, schema-validated MCP callables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Tool Layer
//!
//! Exposes each catalog and orchestrator operation as a named,
//! schema-validated callable. The tools are stateless I/O wrappers over
//! the plain function contracts in [`crate::catalog`] and
//! [`crate::workouts`]; all engineering risk stays in those modules.

pub mod context;
pub mod implementations;
pub mod registry;
pub mod result;
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
