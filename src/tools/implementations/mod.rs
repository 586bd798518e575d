// ABOUTME: Tool implementations grouped by domain
// ABOUTME: Exercise catalog search, workout creation/listing, and catalog refresh
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Tool implementations

mod catalog;
mod exercises;
mod workouts;

pub use catalog::RefreshExerciseCatalogTool;
pub use exercises::{GetExerciseTool, SearchExercisesTool};
pub use workouts::{CreateStrengthWorkoutTool, ListWorkoutsTool};
