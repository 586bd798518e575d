// ABOUTME: Domain models for the exercise catalog and the strength-workout wire format
// ABOUTME: Defines CatalogEntry, ExerciseOverride, ExercisePayload, WorkoutPayload, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Data Models
//!
//! Canonical records for the exercise catalog plus the exact nested wire
//! records the COROS training-plan service expects. Catalog entries are
//! created wholesale by the catalog builder and never mutated in place;
//! payload records are derived per request by the payload compiler.

use serde::{Deserialize, Serialize};

use crate::constants::{limits, wire};

/// How one exercise's work is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// Work measured in seconds
    Duration,
    /// Work measured in repetitions
    Reps,
}

impl TargetType {
    /// Numeric code used on the wire
    #[must_use]
    pub const fn wire_code(self) -> i32 {
        match self {
            Self::Duration => wire::TARGET_TYPE_DURATION,
            Self::Reps => wire::TARGET_TYPE_REPS,
        }
    }
}

/// One exercise's canonical, taxonomy-resolved record.
///
/// Entries carry both the machine codes the remote service requires and
/// pre-computed human-text projections of each taxonomy association, so
/// search never re-resolves codes to labels. `name` is unique under
/// case-insensitive comparison within one catalog snapshot; lookup by
/// name relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Upstream numeric identifier
    pub id: i64,
    /// Opaque upstream code token (e.g. `T1004`), the locale-table key
    pub code_name: String,
    /// Resolved human-readable name
    pub name: String,
    /// Resolved description text, empty when the locale table has none
    #[serde(default)]
    pub desc: String,
    /// Locale key for the exercise overview
    #[serde(default)]
    pub overview: String,
    /// Body-region codes
    #[serde(default)]
    pub body_parts: Vec<i32>,
    /// Muscle codes in relevance order; the first is the primary muscle
    #[serde(default)]
    pub muscles: Vec<i32>,
    /// Equipment codes
    #[serde(default)]
    pub equipment: Vec<i32>,
    /// Default prescription: number of sets
    pub sets: i32,
    /// Default prescription: target type
    pub target_type: TargetType,
    /// Default prescription: target value (seconds or reps)
    pub target_value: i32,
    /// Default prescription: rest between sets, seconds
    pub rest_value: i32,
    /// Default intensity type code
    #[serde(default)]
    pub intensity_type: i32,
    /// Default intensity value (grams when the type is weight)
    #[serde(default)]
    pub intensity_value: i64,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail_url: String,
    /// Demonstration video URL
    #[serde(default)]
    pub video_url: String,
    /// Human text for `body_parts`
    #[serde(default)]
    pub body_part_text: String,
    /// Human text for all muscles, primary and secondary combined
    #[serde(default)]
    pub muscle_text: String,
    /// Human text for the primary muscle
    #[serde(default)]
    pub main_muscle_text: String,
    /// Human text for the secondary muscles
    #[serde(default)]
    pub vice_muscle_text: String,
    /// Human text for `equipment`
    #[serde(default)]
    pub equipment_text: String,
}

impl CatalogEntry {
    /// Primary muscle code, if the entry has any muscle association
    #[must_use]
    pub fn main_muscle(&self) -> Option<i32> {
        self.muscles.first().copied()
    }

    /// Secondary muscle codes: every code that is not the primary, even
    /// when the primary appears more than once in the relevance list
    #[must_use]
    pub fn vice_muscles(&self) -> Vec<i32> {
        self.main_muscle().map_or_else(Vec::new, |main| {
            self.muscles.iter().copied().filter(|&m| m != main).collect()
        })
    }
}

/// User-supplied per-exercise adjustment layered on top of catalog defaults.
///
/// At most one of `reps`/`duration_seconds` is meaningful; when both are
/// given, reps wins (a fixed, tested contract, not a user error).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseOverride {
    /// Exercise name to resolve against the catalog
    pub name: String,
    /// Override the number of sets
    pub sets: Option<i32>,
    /// Target in repetitions; takes precedence over `duration_seconds`
    pub reps: Option<i32>,
    /// Target in seconds
    pub duration_seconds: Option<i32>,
    /// Rest between sets, seconds
    pub rest_seconds: Option<i32>,
    /// Load in grams; takes precedence over `weight_kg`
    pub weight_grams: Option<i64>,
    /// Load in kilograms, scaled by exactly 1000 to grams
    pub weight_kg: Option<f64>,
}

impl ExerciseOverride {
    /// Override carrying only a name, leaving every default in place
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A workout-creation request as the agent supplies it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutRequest {
    /// Workout name
    pub name: String,
    /// Optional workout overview text
    #[serde(default)]
    pub overview: Option<String>,
    /// Ordered exercises, each a name plus optional overrides
    pub exercises: Vec<ExerciseOverride>,
}

/// The wire record for one exercise within a workout.
///
/// Field names and codes are exactly what the remote service expects;
/// unused metric slots are present with zero values because the service
/// rejects records with the fields absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePayload {
    /// Synthetic per-workout identifier, equal to `sort_no`
    pub id: i64,
    /// 1-based position within the workout
    pub sort_no: i32,
    /// Catalog identifier of the source exercise
    pub exercise_id: i64,
    /// Upstream code token
    pub name: String,
    /// Overview locale key
    pub overview: String,
    /// Description text
    pub describe: String,
    /// Body-region codes
    pub part: Vec<i32>,
    /// Human text for `part`
    pub part_text: String,
    /// All muscle codes in relevance order
    pub muscle: Vec<i32>,
    /// Human text for `muscle`
    pub muscle_text: String,
    /// Primary muscle code, zero when none
    pub main_muscle: i32,
    /// Human text for the primary muscle
    pub main_muscle_text: String,
    /// Secondary muscle codes
    pub vice_muscle: Vec<i32>,
    /// Human text for the secondary muscles
    pub vice_muscle_text: String,
    /// Equipment codes
    pub equipment: Vec<i32>,
    /// Human text for `equipment`
    pub equipment_text: String,
    /// Number of sets
    pub sets: i32,
    /// Target type wire code
    pub target_type: i32,
    /// Target value (seconds or reps)
    pub target_value: i32,
    /// Rest type wire code, always timed rest
    pub rest_type: i32,
    /// Rest between sets, seconds
    pub rest_value: i32,
    /// Intensity type wire code
    pub intensity_type: i32,
    /// Intensity value (grams when the type is weight)
    pub intensity_value: i64,
    /// Comma-joined cover image URLs
    pub cover_url_arr_str: String,
    /// Demonstration video URL
    pub video_url: String,
    /// Training mode slot, unused for strength
    pub train_type: i32,
    /// Unit system slot, unused for strength
    pub unit_type: i32,
    /// Distance metric slot, unused for strength
    pub distance_value: i32,
    /// Speed metric slot, unused for strength
    pub speed_value: i32,
    /// Pace metric slot, unused for strength
    pub pace_value: i32,
    /// Heart-rate metric slot, unused for strength
    pub hr_value: i32,
    /// Power metric slot, unused for strength
    pub power_value: i32,
    /// RPE metric slot, unused for strength
    pub rpe_value: i32,
    /// Calorie metric slot, unused for strength
    pub calories_value: i32,
    /// Per-exercise duration, filled by the remote calculate step
    pub duration: i64,
    /// Per-exercise training load, filled by the remote calculate step
    pub training_load: i64,
    /// Superset group number, unused for plain strength workouts
    pub group_no: i32,
}

/// The wire record for one workout.
///
/// `duration`, `total_sets`, and `training_load` start at zero and are
/// filled in from the remote calculate step before the add call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPayload {
    /// Workout name
    pub name: String,
    /// Workout overview text
    pub describe: String,
    /// Activity type, always the strength constant
    pub sport_type: i32,
    /// Ordered exercise records
    pub exercise_list: Vec<ExercisePayload>,
    /// Total duration in seconds, zero until calculated
    pub duration: i64,
    /// Total set count, zero until calculated
    pub total_sets: i32,
    /// Training load, zero until calculated
    pub training_load: i64,
}

impl WorkoutPayload {
    /// Assemble a workout payload with all computed metrics still zero
    #[must_use]
    pub fn new(name: String, describe: String, exercise_list: Vec<ExercisePayload>) -> Self {
        Self {
            name,
            describe,
            sport_type: wire::SPORT_TYPE_STRENGTH,
            exercise_list,
            duration: 0,
            total_sets: 0,
            training_load: 0,
        }
    }
}

/// Authoritative derived metrics returned by the remote calculate step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutMetrics {
    /// Total duration in seconds
    pub duration: i64,
    /// Total set count
    pub total_sets: i32,
    /// Training load
    pub training_load: i64,
}

/// A saved workout as returned by the remote query operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWorkout {
    /// Remote identifier
    pub id: i64,
    /// Workout name
    pub name: String,
    /// Activity type code
    #[serde(default)]
    pub sport_type: i32,
    /// Total duration in seconds
    #[serde(default)]
    pub duration: i64,
    /// Total set count
    #[serde(default)]
    pub total_sets: i32,
    /// Training load
    #[serde(default)]
    pub training_load: i64,
}

/// Filter for the remote saved-workout query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutQuery {
    /// Optional name substring filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional activity type filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_type: Option<i32>,
    /// 1-based page number
    pub page_number: u32,
    /// Page size
    pub page_size: u32,
}

impl Default for WorkoutQuery {
    fn default() -> Self {
        Self {
            name: None,
            sport_type: None,
            page_number: 1,
            page_size: limits::DEFAULT_QUERY_PAGE_SIZE,
        }
    }
}

/// Per-exercise recap line in a workout summary.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseRecap {
    /// Resolved exercise name
    pub name: String,
    /// Prescribed sets
    pub sets: i32,
    /// Prescribed target, e.g. `12 reps` or `45 s`
    pub target: String,
    /// Prescribed load, e.g. `20 kg`, absent when bodyweight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

/// Human-readable result of a successful workout creation.
///
/// Built from the original request plus the calculated metrics, never
/// from re-reading the remote state.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSummary {
    /// Workout name
    pub name: String,
    /// Total duration in minutes, rounded to the nearest minute
    pub duration_minutes: i64,
    /// Total set count
    pub total_sets: i32,
    /// Training load
    pub training_load: i64,
    /// Per-exercise recap in submission order
    pub exercises: Vec<ExerciseRecap>,
}

impl std::fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Created \"{}\": ~{} min, {} sets, training load {}",
            self.name, self.duration_minutes, self.total_sets, self.training_load
        )?;
        for recap in &self.exercises {
            match &recap.weight {
                Some(weight) => {
                    writeln!(f, "  {} - {}x{} @ {weight}", recap.name, recap.sets, recap.target)?;
                }
                None => writeln!(f, "  {} - {}x{}", recap.name, recap.sets, recap.target)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry_with_muscles(muscles: Vec<i32>) -> CatalogEntry {
        CatalogEntry {
            id: 1,
            code_name: "T1004".to_owned(),
            name: "Push-ups".to_owned(),
            desc: String::new(),
            overview: String::new(),
            body_parts: vec![2],
            muscles,
            equipment: vec![1],
            sets: 4,
            target_type: TargetType::Reps,
            target_value: 15,
            rest_value: 30,
            intensity_type: 0,
            intensity_value: 0,
            thumbnail_url: String::new(),
            video_url: String::new(),
            body_part_text: String::new(),
            muscle_text: String::new(),
            main_muscle_text: String::new(),
            vice_muscle_text: String::new(),
            equipment_text: String::new(),
        }
    }

    #[test]
    fn test_vice_muscles_exclude_every_primary_occurrence() {
        let entry = entry_with_muscles(vec![2, 4, 2, 1]);
        assert_eq!(entry.main_muscle(), Some(2));
        assert_eq!(entry.vice_muscles(), vec![4, 1]);
    }

    #[test]
    fn test_vice_muscles_empty_without_muscle_list() {
        let entry = entry_with_muscles(vec![]);
        assert_eq!(entry.main_muscle(), None);
        assert!(entry.vice_muscles().is_empty());
    }

    #[test]
    fn test_target_type_wire_codes() {
        assert_eq!(TargetType::Duration.wire_code(), 1);
        assert_eq!(TargetType::Reps.wire_code(), 2);
    }

    #[test]
    fn test_exercise_payload_serializes_camel_case() {
        let workout = WorkoutPayload::new("Push Day".to_owned(), String::new(), vec![]);
        let json = serde_json::to_value(&workout).unwrap();
        assert_eq!(json["sportType"], 402);
        assert_eq!(json["totalSets"], 0);
        assert_eq!(json["trainingLoad"], 0);
    }
}
