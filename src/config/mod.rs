// ABOUTME: Configuration management for deployment-specific settings
// ABOUTME: Environment-variable driven, with sensible defaults for local use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Configuration management

pub mod environment;

pub use environment::{CatalogConfig, CorosConfig, ServerConfig};
