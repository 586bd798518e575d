// ABOUTME: Wire-format tests for the COROS payloads and the add-call quirk
// ABOUTME: Pins camelCase field names and the trainingLoad string re-encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

mod common;

use atlas_mcp_server::models::{
    ExerciseOverride, SavedWorkout, WorkoutMetrics, WorkoutPayload,
};
use atlas_mcp_server::providers::coros::fold_metrics_for_add;
use atlas_mcp_server::workouts::compile;
use serde_json::json;

fn workout() -> WorkoutPayload {
    let exercise = compile(&common::push_ups(), 1, &ExerciseOverride::named("Push-ups"));
    WorkoutPayload::new("Push Day".to_owned(), "Chest focus".to_owned(), vec![exercise])
}

#[test]
fn test_calculate_payload_keeps_numeric_metrics() {
    let value = serde_json::to_value(workout()).unwrap();

    assert_eq!(value["sportType"], 402);
    assert!(value["duration"].is_i64());
    assert!(value["totalSets"].is_i64());
    assert!(value["trainingLoad"].is_i64());
    assert_eq!(value["trainingLoad"], 0);
}

#[test]
fn test_add_payload_re_encodes_training_load_as_string() {
    let metrics = WorkoutMetrics {
        duration: 1830,
        total_sets: 11,
        training_load: 55,
    };
    let body = fold_metrics_for_add(&workout(), &metrics);

    // The add endpoint is inconsistent with calculate: trainingLoad goes
    // out as a string, the other two metrics stay numeric.
    assert_eq!(body["trainingLoad"], json!("55"));
    assert_eq!(body["duration"], json!(1830));
    assert_eq!(body["totalSets"], json!(11));

    // Everything else is untouched.
    assert_eq!(body["name"], json!("Push Day"));
    assert_eq!(body["exerciseList"].as_array().unwrap().len(), 1);
}

#[test]
fn test_exercise_payload_uses_remote_field_names() {
    let exercise = compile(&common::push_ups(), 1, &ExerciseOverride::named("Push-ups"));
    let value = serde_json::to_value(&exercise).unwrap();
    let object = value.as_object().unwrap();

    for field in [
        "sortNo",
        "exerciseId",
        "mainMuscle",
        "mainMuscleText",
        "viceMuscle",
        "viceMuscleText",
        "coverUrlArrStr",
        "videoUrl",
        "targetType",
        "targetValue",
        "restType",
        "restValue",
        "intensityType",
        "intensityValue",
    ] {
        assert!(object.contains_key(field), "missing wire field {field}");
    }

    // The unused metric slots ship as zeros rather than being omitted.
    assert_eq!(value["distanceValue"], 0);
    assert_eq!(value["hrValue"], 0);
    assert_eq!(value["groupNo"], 0);
}

#[test]
fn test_metrics_deserialize_from_calculate_response_shape() {
    let metrics: WorkoutMetrics = serde_json::from_value(json!({
        "duration": 2715,
        "totalSets": 14,
        "trainingLoad": 73
    }))
    .unwrap();

    assert_eq!(metrics.duration, 2715);
    assert_eq!(metrics.total_sets, 14);
    assert_eq!(metrics.training_load, 73);
}

#[test]
fn test_saved_workout_tolerates_sparse_query_rows() {
    let workout: SavedWorkout = serde_json::from_value(json!({
        "id": 31415,
        "name": "Leg Day"
    }))
    .unwrap();

    assert_eq!(workout.id, 31415);
    assert_eq!(workout.name, "Leg Day");
    assert_eq!(workout.duration, 0);
    assert_eq!(workout.total_sets, 0);
}
