// ABOUTME: Integration tests for the payload compiler
// ABOUTME: Pins override precedence, unit scaling, and verbatim field copying
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

mod common;

use atlas_mcp_server::models::ExerciseOverride;
use atlas_mcp_server::workouts::compile;

#[test]
fn test_entry_defaults_flow_through() {
    let entry = common::push_ups();
    let payload = compile(&entry, 1, &ExerciseOverride::named("Push-ups"));

    assert_eq!(payload.sets, 4);
    assert_eq!(payload.target_type, 2);
    assert_eq!(payload.target_value, 15);
    assert_eq!(payload.rest_value, 30);
    assert_eq!(payload.rest_type, 1);
    assert_eq!(payload.sort_no, 1);
    assert_eq!(payload.id, 1);
    assert_eq!(payload.exercise_id, 1004);
    assert_eq!(payload.name, "T1004");
    assert_eq!(payload.equipment_text, "Bodyweight");
    assert_eq!(payload.muscle_text, "Chest, Triceps, Deltoids");
}

#[test]
fn test_reps_override_wins_over_entry_defaults() {
    // Plank defaults to a 60 s duration target; a reps override replaces
    // both the value and the type.
    let entry = common::plank();
    let overrides = ExerciseOverride {
        reps: Some(20),
        ..ExerciseOverride::named("Plank")
    };
    let payload = compile(&entry, 1, &overrides);

    assert_eq!(payload.target_type, 2);
    assert_eq!(payload.target_value, 20);
}

#[test]
fn test_duration_override_alone_applies() {
    let entry = common::push_ups();
    let overrides = ExerciseOverride {
        duration_seconds: Some(45),
        ..ExerciseOverride::named("Push-ups")
    };
    let payload = compile(&entry, 1, &overrides);

    assert_eq!(payload.target_type, 1);
    assert_eq!(payload.target_value, 45);
}

#[test]
fn test_reps_beats_duration_when_both_are_supplied() {
    // Documented policy, not a user error: reps is evaluated first.
    let entry = common::push_ups();
    let overrides = ExerciseOverride {
        reps: Some(5),
        duration_seconds: Some(10),
        ..ExerciseOverride::named("Push-ups")
    };
    let payload = compile(&entry, 3, &overrides);

    assert_eq!(payload.target_type, 2);
    assert_eq!(payload.target_value, 5);
}

#[test]
fn test_weight_kg_scales_exactly_to_grams() {
    let entry = common::push_ups();
    let overrides = ExerciseOverride {
        weight_kg: Some(20.0),
        ..ExerciseOverride::named("Push-ups")
    };
    let payload = compile(&entry, 2, &overrides);

    assert_eq!(payload.intensity_type, 1);
    assert_eq!(payload.intensity_value, 20_000);
}

#[test]
fn test_fractional_kg_scales_cleanly() {
    let entry = common::push_ups();
    let overrides = ExerciseOverride {
        weight_kg: Some(22.5),
        ..ExerciseOverride::named("Push-ups")
    };
    assert_eq!(compile(&entry, 1, &overrides).intensity_value, 22_500);
}

#[test]
fn test_weight_grams_beats_weight_kg() {
    let entry = common::push_ups();
    let overrides = ExerciseOverride {
        weight_grams: Some(17_250),
        weight_kg: Some(99.0),
        ..ExerciseOverride::named("Push-ups")
    };
    let payload = compile(&entry, 1, &overrides);

    assert_eq!(payload.intensity_value, 17_250);
}

#[test]
fn test_entry_intensity_defaults_survive_without_override() {
    let entry = common::goblet_squat();
    let payload = compile(&entry, 1, &ExerciseOverride::named("Goblet Squat"));

    assert_eq!(payload.intensity_type, 1);
    assert_eq!(payload.intensity_value, 12_000);
}

#[test]
fn test_sets_and_rest_overrides_are_independent() {
    let entry = common::push_ups();
    let overrides = ExerciseOverride {
        sets: Some(5),
        rest_seconds: Some(90),
        ..ExerciseOverride::named("Push-ups")
    };
    let payload = compile(&entry, 1, &overrides);

    assert_eq!(payload.sets, 5);
    assert_eq!(payload.rest_value, 90);
    // Rest type is always timed rest regardless of overrides.
    assert_eq!(payload.rest_type, 1);
    // Target stays at entry defaults.
    assert_eq!(payload.target_value, 15);
}

#[test]
fn test_position_becomes_sort_no_and_id() {
    let entry = common::push_ups();
    for position in [1, 2, 7] {
        let payload = compile(&entry, position, &ExerciseOverride::named("Push-ups"));
        assert_eq!(payload.sort_no, position);
        assert_eq!(payload.id, i64::from(position));
    }
}

#[test]
fn test_missing_projections_are_derived_from_codes() {
    let mut entry = common::push_ups();
    entry.body_part_text = String::new();
    entry.muscle_text = String::new();
    entry.main_muscle_text = String::new();
    entry.vice_muscle_text = String::new();
    entry.equipment_text = String::new();

    let payload = compile(&entry, 1, &ExerciseOverride::named("Push-ups"));

    assert_eq!(payload.part_text, "Chest");
    assert_eq!(payload.muscle_text, "Chest, Triceps, Deltoids");
    assert_eq!(payload.main_muscle_text, "Chest");
    assert_eq!(payload.vice_muscle_text, "Triceps, Deltoids");
    assert_eq!(payload.equipment_text, "Bodyweight");
}

#[test]
fn test_compilation_is_deterministic() {
    let entry = common::goblet_squat();
    let overrides = ExerciseOverride {
        sets: Some(4),
        reps: Some(8),
        weight_kg: Some(16.0),
        ..ExerciseOverride::named("Goblet Squat")
    };

    assert_eq!(compile(&entry, 2, &overrides), compile(&entry, 2, &overrides));
}
