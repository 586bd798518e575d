// ABOUTME: Model Context Protocol surface: schema types for the tool-registration layer
// ABOUTME: The stdio transport lives in the binary; this module owns the shared types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Model Context Protocol support

pub mod schema;
