// ABOUTME: Tool registry: registration, lookup, schema listing, and dispatch
// ABOUTME: Owns the default tool set wired at server startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Tool Registry

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::context::ToolExecutionContext;
use super::implementations::{
    CreateStrengthWorkoutTool, GetExerciseTool, ListWorkoutsTool, RefreshExerciseCatalogTool,
    SearchExercisesTool,
};
use super::result::ToolResult;
use super::traits::McpTool;
use crate::errors::{AppError, AppResult};
use crate::mcp::schema::ToolSchema;

/// Registry of all callable tools, keyed by name.
pub struct ToolRegistry {
    tools: HashMap<&'static str, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry with the default tool set
    #[must_use]
    pub fn with_default_tools() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SearchExercisesTool));
        registry.register(Box::new(GetExerciseTool));
        registry.register(Box::new(CreateStrengthWorkoutTool));
        registry.register(Box::new(ListWorkoutsTool));
        registry.register(Box::new(RefreshExerciseCatalogTool));
        registry
    }

    /// Register a tool, replacing any tool of the same name
    pub fn register(&mut self, tool: Box<dyn McpTool>) {
        debug!(tool = tool.name(), "Registering tool");
        self.tools.insert(tool.name(), tool);
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Schemas of every registered tool, sorted by name for a stable
    /// `tools/list` response
    #[must_use]
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Execute a tool by name.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an unknown tool name; tool execution errors
    /// propagate unchanged.
    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| AppError::invalid_input(format!("unknown tool: {name}")))?;
        debug!(tool = name, "Executing tool");
        tool.execute(args, context).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_default_tools()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::constants::tools;

    #[test]
    fn test_default_registry_exposes_all_tools() {
        let registry = ToolRegistry::with_default_tools();
        assert_eq!(registry.len(), 5);

        let names: Vec<String> = registry
            .tool_schemas()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            vec![
                tools::CREATE_STRENGTH_WORKOUT,
                tools::GET_EXERCISE,
                tools::LIST_WORKOUTS,
                tools::REFRESH_EXERCISE_CATALOG,
                tools::SEARCH_EXERCISES,
            ]
        );
    }
}
