// ABOUTME: Exercise catalog tools: search_exercises and get_exercise
// ABOUTME: Read-only lookups over the catalog store's current snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Exercise Catalog Tools

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use crate::catalog::store::SearchFilter;
use crate::constants::{limits, tools};
use crate::errors::{AppError, AppResult};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::CatalogEntry;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

fn entry_summary(entry: &CatalogEntry) -> Value {
    json!({
        "id": entry.id,
        "name": entry.name,
        "bodyParts": entry.body_part_text,
        "muscles": entry.muscle_text,
        "equipment": entry.equipment_text,
        "defaultSets": entry.sets,
        "defaultTarget": {
            "type": entry.target_type,
            "value": entry.target_value,
        },
        "defaultRestSeconds": entry.rest_value,
    })
}

fn entry_detail(entry: &CatalogEntry) -> Value {
    json!({
        "id": entry.id,
        "name": entry.name,
        "description": entry.desc,
        "bodyParts": entry.body_part_text,
        "primaryMuscle": entry.main_muscle_text,
        "secondaryMuscles": entry.vice_muscle_text,
        "equipment": entry.equipment_text,
        "defaultSets": entry.sets,
        "defaultTarget": {
            "type": entry.target_type,
            "value": entry.target_value,
        },
        "defaultRestSeconds": entry.rest_value,
        "thumbnailUrl": entry.thumbnail_url,
        "videoUrl": entry.video_url,
    })
}

// ============================================================================
// SearchExercisesTool
// ============================================================================

/// Tool for searching the exercise catalog with optional filters.
pub struct SearchExercisesTool;

#[async_trait]
impl McpTool for SearchExercisesTool {
    fn name(&self) -> &'static str {
        tools::SEARCH_EXERCISES
    }

    fn description(&self) -> &'static str {
        "Search the strength exercise catalog by name keywords, muscle, body part, or equipment; all filters combine"
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "query".to_owned(),
            PropertySchema::new(
                "string",
                "Name keywords; every word must appear in the exercise name",
            ),
        );
        properties.insert(
            "muscle".to_owned(),
            PropertySchema::new("string", "Muscle filter (e.g. chest, triceps, glutes)"),
        );
        properties.insert(
            "body_part".to_owned(),
            PropertySchema::new("string", "Body part filter (e.g. core, back, legs)"),
        );
        properties.insert(
            "equipment".to_owned(),
            PropertySchema::new(
                "string",
                "Equipment filter (e.g. bodyweight, dumbbells, kettlebell)",
            ),
        );
        properties.insert(
            "limit".to_owned(),
            PropertySchema::new("integer", "Maximum number of results (default: 20)"),
        );
        JsonSchema::object(properties, vec![])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::CATALOG
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let filter = SearchFilter {
            query: args.get("query").and_then(Value::as_str).map(String::from),
            muscle: args.get("muscle").and_then(Value::as_str).map(String::from),
            body_part: args
                .get("body_part")
                .and_then(Value::as_str)
                .map(String::from),
            equipment: args
                .get("equipment")
                .and_then(Value::as_str)
                .map(String::from),
        };
        let limit = args
            .get("limit")
            .and_then(Value::as_u64)
            .map_or(limits::DEFAULT_SEARCH_LIMIT, |l| l as usize);

        let matches = ctx.store.search(&filter)?;
        let total = matches.len();
        let results: Vec<Value> = matches.iter().take(limit).map(entry_summary).collect();

        Ok(ToolResult::ok(json!({
            "exercises": results,
            "matched": total,
            "returned": results.len(),
            "retrievedAt": Utc::now().to_rfc3339(),
        })))
    }
}

// ============================================================================
// GetExerciseTool
// ============================================================================

/// Tool for fetching one catalog entry by exact name.
pub struct GetExerciseTool;

#[async_trait]
impl McpTool for GetExerciseTool {
    fn name(&self) -> &'static str {
        tools::GET_EXERCISE
    }

    fn description(&self) -> &'static str {
        "Get full details for one exercise by its exact name (case-insensitive)"
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "name".to_owned(),
            PropertySchema::new("string", "Exact exercise name"),
        );
        JsonSchema::object(properties, vec!["name".to_owned()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::CATALOG
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let name = args
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::invalid_input("name is required"))?;

        let Some(entry) = ctx.store.find_by_name(name)? else {
            return Ok(ToolResult::error(json!({
                "error": format!("exercise not found: {name}"),
            })));
        };

        Ok(ToolResult::ok(entry_detail(&entry)))
    }
}
