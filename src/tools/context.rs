// ABOUTME: Execution context handed to every tool: catalog store, remote client, config
// ABOUTME: One context is built at startup and shared across tool invocations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Tool Execution Context

use std::sync::Arc;

use crate::catalog::store::CatalogStore;
use crate::config::environment::ServerConfig;
use crate::providers::coros::CorosClient;

/// Shared resources available to every tool execution.
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// The exercise catalog store
    pub store: Arc<CatalogStore>,
    /// The remote COROS client
    pub client: Arc<CorosClient>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ToolExecutionContext {
    /// Context over the given shared resources
    #[must_use]
    pub fn new(store: Arc<CatalogStore>, client: Arc<CorosClient>, config: Arc<ServerConfig>) -> Self {
        Self {
            store,
            client,
            config,
        }
    }
}
