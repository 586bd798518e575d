// ABOUTME: Compiles one catalog entry plus optional user overrides into an exercise wire record
// ABOUTME: Pure function; applies override precedence and unit conversions, never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Payload Compiler
//!
//! Produces the exact nested record the remote service requires for one
//! exercise in a workout. Compilation is a pure function of the catalog
//! entry, the caller-assigned position, and the override set; the same
//! inputs always produce the same output, and compilation cannot fail
//! once given a valid entry.
//!
//! Override precedence, each rule independent:
//! - `sets`: override if given, else the entry default.
//! - target: `reps` is evaluated strictly before `duration_seconds`, so
//!   reps wins when both are supplied. This is a fixed policy choice,
//!   not a user error.
//! - rest: `rest_seconds` if given, else the entry default; the rest
//!   type is always timed rest.
//! - intensity: `weight_grams` before `weight_kg` (scaled by exactly
//!   1000), else the entry defaults.

use crate::catalog::code_tables::{BODY_PARTS, EQUIPMENT, MUSCLES};
use crate::constants::{limits, wire};
use crate::models::{CatalogEntry, ExerciseOverride, ExercisePayload};

fn resolve_target(entry: &CatalogEntry, overrides: &ExerciseOverride) -> (i32, i32) {
    if let Some(reps) = overrides.reps {
        return (wire::TARGET_TYPE_REPS, reps);
    }
    if let Some(duration) = overrides.duration_seconds {
        return (wire::TARGET_TYPE_DURATION, duration);
    }
    (entry.target_type.wire_code(), entry.target_value)
}

fn resolve_intensity(entry: &CatalogEntry, overrides: &ExerciseOverride) -> (i32, i64) {
    if let Some(grams) = overrides.weight_grams {
        return (wire::INTENSITY_TYPE_WEIGHT, grams);
    }
    if let Some(kg) = overrides.weight_kg {
        return (
            wire::INTENSITY_TYPE_WEIGHT,
            (kg * limits::GRAMS_PER_KILOGRAM as f64) as i64,
        );
    }
    (entry.intensity_type, entry.intensity_value)
}

fn text_or_derived(text: &str, codes: &[i32], table: &crate::catalog::code_tables::CodeTable) -> String {
    if text.is_empty() && !codes.is_empty() {
        table.labels_text(codes)
    } else {
        text.to_owned()
    }
}

/// Compile one catalog entry into its wire record at the given 1-based
/// position. The compiler does not choose the position; the caller
/// assigns it per exercise in submission order, and it doubles as the
/// payload's synthetic `id` within the workout.
#[must_use]
pub fn compile(entry: &CatalogEntry, position: i32, overrides: &ExerciseOverride) -> ExercisePayload {
    let sets = overrides.sets.unwrap_or(entry.sets);
    let (target_type, target_value) = resolve_target(entry, overrides);
    let rest_value = overrides.rest_seconds.unwrap_or(entry.rest_value);
    let (intensity_type, intensity_value) = resolve_intensity(entry, overrides);

    let main_muscle = entry.main_muscle();
    let vice_muscle = entry.vice_muscles();

    // Projections are precomputed by the catalog builder; deriving from
    // raw codes here covers entries from older snapshots that lack them.
    let muscle_text = text_or_derived(&entry.muscle_text, &entry.muscles, &MUSCLES);
    let main_muscle_text = match (&entry.main_muscle_text, main_muscle) {
        (text, Some(code)) if text.is_empty() => MUSCLES.labels_text(&[code]),
        (text, _) => text.clone(),
    };
    let vice_muscle_text = text_or_derived(&entry.vice_muscle_text, &vice_muscle, &MUSCLES);
    let part_text = text_or_derived(&entry.body_part_text, &entry.body_parts, &BODY_PARTS);
    let equipment_text = text_or_derived(&entry.equipment_text, &entry.equipment, &EQUIPMENT);

    ExercisePayload {
        id: i64::from(position),
        sort_no: position,
        exercise_id: entry.id,
        name: entry.code_name.clone(),
        overview: entry.overview.clone(),
        describe: entry.desc.clone(),
        part: entry.body_parts.clone(),
        part_text,
        muscle: entry.muscles.clone(),
        muscle_text,
        main_muscle: main_muscle.unwrap_or(0),
        main_muscle_text,
        vice_muscle,
        vice_muscle_text,
        equipment: entry.equipment.clone(),
        equipment_text,
        sets,
        target_type,
        target_value,
        rest_type: wire::REST_TYPE_TIMED,
        rest_value,
        intensity_type,
        intensity_value,
        cover_url_arr_str: entry.thumbnail_url.clone(),
        video_url: entry.video_url.clone(),
        train_type: 0,
        unit_type: 0,
        distance_value: 0,
        speed_value: 0,
        pace_value: 0,
        hr_value: 0,
        power_value: 0,
        rpe_value: 0,
        calories_value: 0,
        duration: 0,
        training_load: 0,
        group_no: 0,
    }
}
