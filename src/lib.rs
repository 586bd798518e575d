// ABOUTME: Main library entry point for the Atlas strength-workout MCP server
// ABOUTME: Exercise catalog resolution and COROS workout creation for AI agents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

#![deny(unsafe_code)]

//! # Atlas MCP Server
//!
//! A Model Context Protocol (MCP) server that lets AI agents compose
//! COROS strength workouts using natural-language exercise names. The
//! remote training-plan service speaks an internal, numerically-coded,
//! ~40-field-per-exercise wire format; this crate maintains a searchable,
//! human-readable mirror of that taxonomy and translates agent requests
//! into the exact payloads the service expects.
//!
//! ## Architecture
//!
//! - **Catalog**: code tables, snapshot store, builder, and refresh —
//!   the human-readable mirror of the codified exercise taxonomy
//! - **Workouts**: the payload compiler and the two-phase
//!   calculate-then-persist orchestrator
//! - **Providers**: the COROS training-plan client behind the
//!   `WorkoutService` trait seam
//! - **Tools**: each operation exposed as a named, schema-validated
//!   MCP callable
//!
//! ## Quick Start
//!
//! 1. Export `COROS_ACCESS_TOKEN` and `COROS_USER_ID`
//! 2. Start the server with `atlas-mcp-server`
//! 3. Connect from Claude or any other MCP client over stdio

/// Exercise catalog: code tables, snapshot store, builder, and refresh
pub mod catalog;

/// Configuration management and environment parsing
pub mod config;

/// Application constants organized by domain
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Unified JSON-RPC 2.0 foundation for the stdio transport
pub mod jsonrpc;

/// Structured logging configuration
pub mod logging;

/// Model Context Protocol schema types
pub mod mcp;

/// Domain models for the catalog and the strength-workout wire format
pub mod models;

/// Remote service clients behind the `WorkoutService` seam
pub mod providers;

/// Tool-registration layer wrapping the pipeline as MCP callables
pub mod tools;

/// Utility functions and helpers
pub mod utils;

/// Payload compilation and the workout-creation orchestrator
pub mod workouts;
