// ABOUTME: Catalog maintenance tool: refresh_exercise_catalog
// ABOUTME: Rebuilds the snapshot from both upstream feeds and reports drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Catalog Maintenance Tools

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use crate::catalog::refresh;
use crate::constants::tools;
use crate::errors::AppResult;
use crate::mcp::schema::JsonSchema;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Tool that refreshes the exercise catalog from the upstream feeds.
pub struct RefreshExerciseCatalogTool;

#[async_trait]
impl McpTool for RefreshExerciseCatalogTool {
    fn name(&self) -> &'static str {
        tools::REFRESH_EXERCISE_CATALOG
    }

    fn description(&self) -> &'static str {
        "Rebuild the exercise catalog from the remote exercise feed and locale table, \
         replacing the local snapshot and reporting added/removed/untranslated entries"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(HashMap::new(), vec![])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_AUTH
            | ToolCapabilities::CATALOG
            | ToolCapabilities::WRITES_DATA
    }

    async fn execute(&self, _args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let report = refresh::refresh(&ctx.store, ctx.client.as_ref()).await?;

        Ok(ToolResult::ok(json!({
            "total": report.total,
            "added": report.added,
            "removed": report.removed,
            "untranslated": report.untranslated,
            "refreshedAt": Utc::now().to_rfc3339(),
        })))
    }
}
