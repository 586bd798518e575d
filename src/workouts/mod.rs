// ABOUTME: Workout pipeline: payload compilation and the two-phase creation orchestrator
// ABOUTME: Translates catalog entries plus user overrides into remote wire payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Workout Pipeline
//!
//! [`compiler`] turns one catalog entry plus optional user overrides into
//! the exact wire record the remote service expects; [`orchestrator`]
//! sequences exercise resolution, the remote calculate call, and the
//! remote persist call for one workout-creation request.

pub mod compiler;
pub mod orchestrator;

pub use compiler::compile;
pub use orchestrator::WorkoutOrchestrator;
