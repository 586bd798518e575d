// ABOUTME: Workout tools: create_strength_workout and list_workouts
// ABOUTME: Wraps the orchestrator's two-phase creation protocol and the remote query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Workout Tools

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::{tools, wire};
use crate::errors::{AppError, AppResult};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::{CreateWorkoutRequest, WorkoutQuery};
use crate::providers::WorkoutService;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};
use crate::workouts::orchestrator::WorkoutOrchestrator;

// ============================================================================
// CreateStrengthWorkoutTool
// ============================================================================

/// Tool for creating and persisting one strength workout.
pub struct CreateStrengthWorkoutTool;

#[async_trait]
impl McpTool for CreateStrengthWorkoutTool {
    fn name(&self) -> &'static str {
        tools::CREATE_STRENGTH_WORKOUT
    }

    fn description(&self) -> &'static str {
        "Create a COROS strength workout from exercise names with optional per-exercise \
         sets/reps/duration/rest/weight overrides, calculate its metrics remotely, and save it"
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "name".to_owned(),
            PropertySchema::new("string", "Workout name"),
        );
        properties.insert(
            "overview".to_owned(),
            PropertySchema::new("string", "Optional workout description"),
        );
        properties.insert(
            "exercises".to_owned(),
            PropertySchema::new(
                "array",
                "Ordered exercises; each item has name (required) plus optional sets, reps, \
                 duration_seconds, rest_seconds, weight_kg, weight_grams. When both reps and \
                 duration_seconds are given, reps wins.",
            ),
        );
        JsonSchema::object(properties, vec!["name".to_owned(), "exercises".to_owned()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_AUTH | ToolCapabilities::WRITES_DATA
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let request: CreateWorkoutRequest = serde_json::from_value(args)
            .map_err(|e| AppError::invalid_input(format!("invalid workout request: {e}")))?;

        let service: Arc<dyn WorkoutService> = ctx.client.clone();
        let orchestrator = WorkoutOrchestrator::new(Arc::clone(&ctx.store), service);
        let summary = orchestrator.create_workout(&request).await?;

        Ok(ToolResult::ok(json!({
            "summary": summary,
            "text": summary.to_string(),
        })))
    }
}

// ============================================================================
// ListWorkoutsTool
// ============================================================================

/// Tool for listing saved workouts from the remote service.
pub struct ListWorkoutsTool;

#[async_trait]
impl McpTool for ListWorkoutsTool {
    fn name(&self) -> &'static str {
        tools::LIST_WORKOUTS
    }

    fn description(&self) -> &'static str {
        "List strength workouts saved on the COROS account, optionally filtered by name"
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "name".to_owned(),
            PropertySchema::new("string", "Optional name substring filter"),
        );
        properties.insert(
            "page".to_owned(),
            PropertySchema::new("integer", "1-based page number (default: 1)"),
        );
        properties.insert(
            "size".to_owned(),
            PropertySchema::new("integer", "Page size (default: 20)"),
        );
        JsonSchema::object(properties, vec![])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_AUTH | ToolCapabilities::READS_DATA
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let mut query = WorkoutQuery {
            name: args.get("name").and_then(Value::as_str).map(String::from),
            sport_type: Some(wire::SPORT_TYPE_STRENGTH),
            ..WorkoutQuery::default()
        };
        if let Some(page) = args.get("page").and_then(Value::as_u64) {
            query.page_number = page as u32;
        }
        if let Some(size) = args.get("size").and_then(Value::as_u64) {
            query.page_size = size as u32;
        }

        let workouts = ctx.client.query(&query).await?;

        Ok(ToolResult::ok(json!({
            "workouts": workouts,
            "count": workouts.len(),
            "retrievedAt": Utc::now().to_rfc3339(),
        })))
    }
}
