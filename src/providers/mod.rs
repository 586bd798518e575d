// ABOUTME: Remote service boundary: the WorkoutService trait and the COROS client
// ABOUTME: Everything that crosses the network lives behind this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Remote Service Providers
//!
//! The [`WorkoutService`] trait is the seam between the workout
//! orchestrator and the wire: production uses [`coros::CorosClient`],
//! tests substitute an in-process fake. No retry lives at this layer;
//! the remote add operation's idempotency is not guaranteed, so blind
//! retry is deliberately avoided.

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{SavedWorkout, WorkoutMetrics, WorkoutPayload, WorkoutQuery};

pub mod coros;

pub use coros::{CorosClient, CorosCredentials};

/// The remote workout operations the orchestrator depends on.
#[async_trait]
pub trait WorkoutService: Send + Sync {
    /// Submit the assembled workout for server-side metric calculation.
    /// The remote service, not this client, is the source of truth for
    /// derived training-load arithmetic.
    async fn calculate(&self, workout: &WorkoutPayload) -> AppResult<WorkoutMetrics>;

    /// Persist the workout with the calculated metrics folded in; the
    /// remote side performs the durable save and implicit device sync
    async fn add(&self, workout: &WorkoutPayload, metrics: &WorkoutMetrics) -> AppResult<()>;

    /// List saved workouts matching the filter
    async fn query(&self, query: &WorkoutQuery) -> AppResult<Vec<SavedWorkout>>;
}
