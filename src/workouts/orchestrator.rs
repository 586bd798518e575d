// ABOUTME: Sequences one workout-creation request: resolve, calculate, persist, summarize
// ABOUTME: Fails fast on unresolved names and never retries the remote calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Workout Orchestrator
//!
//! Strictly sequential pipeline per workout-creation request:
//! resolve every exercise name against the catalog, submit the assembled
//! payload to the remote calculate operation, persist with the
//! calculated metrics folded in, and return a human-readable summary.
//!
//! Failure semantics: any unresolved name rejects the entire request
//! before a single remote call, with every unresolved name reported
//! together. A remote failure at calculate or persist aborts the whole
//! request; the add operation's idempotency is not guaranteed, so this
//! layer never retries — re-submission is an explicit caller decision.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::catalog::store::CatalogStore;
use crate::constants::{limits, wire};
use crate::errors::{AppError, AppResult};
use crate::models::{
    CatalogEntry, CreateWorkoutRequest, ExerciseOverride, ExercisePayload, ExerciseRecap,
    WorkoutMetrics, WorkoutPayload, WorkoutSummary,
};
use crate::providers::WorkoutService;
use crate::workouts::compiler;

/// Drives the two-phase creation protocol against the remote service.
pub struct WorkoutOrchestrator {
    store: Arc<CatalogStore>,
    service: Arc<dyn WorkoutService>,
}

impl WorkoutOrchestrator {
    /// Orchestrator over the given catalog store and remote service
    #[must_use]
    pub fn new(store: Arc<CatalogStore>, service: Arc<dyn WorkoutService>) -> Self {
        Self { store, service }
    }

    /// Create and persist one strength workout.
    ///
    /// # Errors
    ///
    /// `ExerciseNotFound` listing every unresolved name when any exercise
    /// is absent from the catalog; `RemoteServiceError` when the remote
    /// calculate or add call fails; `InvalidInput` for an empty request.
    #[instrument(skip(self, request), fields(workout = %request.name, exercises = request.exercises.len()))]
    pub async fn create_workout(&self, request: &CreateWorkoutRequest) -> AppResult<WorkoutSummary> {
        if request.exercises.is_empty() {
            return Err(AppError::invalid_input(
                "a workout needs at least one exercise",
            ));
        }

        let resolved = self.resolve(&request.exercises)?;

        let payloads: Vec<ExercisePayload> = resolved
            .iter()
            .enumerate()
            .map(|(index, (entry, overrides))| {
                compiler::compile(entry, index as i32 + 1, overrides)
            })
            .collect();

        let workout = WorkoutPayload::new(
            request.name.clone(),
            request.overview.clone().unwrap_or_default(),
            payloads,
        );

        let metrics = self.service.calculate(&workout).await?;
        info!(
            duration = metrics.duration,
            total_sets = metrics.total_sets,
            training_load = metrics.training_load,
            "Remote metrics calculated"
        );

        self.service.add(&workout, &metrics).await?;

        Ok(build_summary(&request.name, &resolved, &workout, metrics))
    }

    /// Resolve every requested name, aborting with the full unresolved
    /// list when any name is absent — no partial workout
    fn resolve<'a>(
        &self,
        exercises: &'a [ExerciseOverride],
    ) -> AppResult<Vec<(CatalogEntry, &'a ExerciseOverride)>> {
        let mut unresolved = Vec::new();
        let mut resolved = Vec::with_capacity(exercises.len());

        for overrides in exercises {
            match self.store.find_by_name(&overrides.name)? {
                Some(entry) => resolved.push((entry, overrides)),
                None => unresolved.push(overrides.name.clone()),
            }
        }

        if unresolved.is_empty() {
            Ok(resolved)
        } else {
            Err(AppError::exercises_not_found(&unresolved))
        }
    }
}

fn target_text(payload: &ExercisePayload) -> String {
    if payload.target_type == wire::TARGET_TYPE_DURATION {
        format!("{} s", payload.target_value)
    } else {
        format!("{} reps", payload.target_value)
    }
}

fn weight_text(payload: &ExercisePayload) -> Option<String> {
    if payload.intensity_type != wire::INTENSITY_TYPE_WEIGHT {
        return None;
    }
    let grams = payload.intensity_value;
    if grams % limits::GRAMS_PER_KILOGRAM == 0 {
        Some(format!("{} kg", grams / limits::GRAMS_PER_KILOGRAM))
    } else {
        Some(format!(
            "{} kg",
            grams as f64 / limits::GRAMS_PER_KILOGRAM as f64
        ))
    }
}

/// Build the summary from the original request plus the calculated
/// metrics — never from re-reading the remote state.
fn build_summary(
    name: &str,
    resolved: &[(CatalogEntry, &ExerciseOverride)],
    workout: &WorkoutPayload,
    metrics: WorkoutMetrics,
) -> WorkoutSummary {
    let exercises = resolved
        .iter()
        .zip(&workout.exercise_list)
        .map(|((entry, _), payload)| ExerciseRecap {
            name: entry.name.clone(),
            sets: payload.sets,
            target: target_text(payload),
            weight: weight_text(payload),
        })
        .collect();

    let half_minute = limits::SECONDS_PER_MINUTE / 2;
    WorkoutSummary {
        name: name.to_owned(),
        duration_minutes: (metrics.duration + half_minute) / limits::SECONDS_PER_MINUTE,
        total_sets: metrics.total_sets,
        training_load: metrics.training_load,
        exercises,
    }
}
