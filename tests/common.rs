// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Catalog entry builders and in-memory stores seeded with known data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(dead_code)] // Each integration test binary uses a subset of these helpers

use atlas_mcp_server::catalog::store::{CatalogStore, InMemorySnapshotStorage};
use atlas_mcp_server::models::{CatalogEntry, TargetType};

/// The Push-ups fixture used across component tests.
#[must_use]
pub fn push_ups() -> CatalogEntry {
    CatalogEntry {
        id: 1004,
        code_name: "T1004".to_owned(),
        name: "Push-ups".to_owned(),
        desc: "Keep a rigid plank from shoulders to ankles.".to_owned(),
        overview: "T1004_overview".to_owned(),
        body_parts: vec![2],
        muscles: vec![2, 4, 1],
        equipment: vec![1],
        sets: 4,
        target_type: TargetType::Reps,
        target_value: 15,
        rest_value: 30,
        intensity_type: 0,
        intensity_value: 0,
        thumbnail_url: "https://static.coros.com/exercise/t1004_cover.jpg".to_owned(),
        video_url: "https://static.coros.com/exercise/t1004.mp4".to_owned(),
        body_part_text: "Chest".to_owned(),
        muscle_text: "Chest, Triceps, Deltoids".to_owned(),
        main_muscle_text: "Chest".to_owned(),
        vice_muscle_text: "Triceps, Deltoids".to_owned(),
        equipment_text: "Bodyweight".to_owned(),
    }
}

/// A second fixture with a timed target.
#[must_use]
pub fn plank() -> CatalogEntry {
    CatalogEntry {
        id: 1050,
        code_name: "T1050".to_owned(),
        name: "Plank".to_owned(),
        desc: String::new(),
        overview: "T1050_overview".to_owned(),
        body_parts: vec![4],
        muscles: vec![6, 13],
        equipment: vec![1],
        sets: 3,
        target_type: TargetType::Duration,
        target_value: 60,
        rest_value: 30,
        intensity_type: 0,
        intensity_value: 0,
        thumbnail_url: String::new(),
        video_url: String::new(),
        body_part_text: "Core".to_owned(),
        muscle_text: "Abs, Erector Spinae".to_owned(),
        main_muscle_text: "Abs".to_owned(),
        vice_muscle_text: "Erector Spinae".to_owned(),
        equipment_text: "Bodyweight".to_owned(),
    }
}

/// A weighted fixture with intensity defaults.
#[must_use]
pub fn goblet_squat() -> CatalogEntry {
    CatalogEntry {
        id: 1070,
        code_name: "T1070".to_owned(),
        name: "Goblet Squat".to_owned(),
        desc: String::new(),
        overview: "T1070_overview".to_owned(),
        body_parts: vec![5],
        muscles: vec![8, 7],
        equipment: vec![11],
        sets: 3,
        target_type: TargetType::Reps,
        target_value: 12,
        rest_value: 60,
        intensity_type: 1,
        intensity_value: 12000,
        thumbnail_url: String::new(),
        video_url: String::new(),
        body_part_text: "Legs/Hips".to_owned(),
        muscle_text: "Quadriceps, Glutes".to_owned(),
        main_muscle_text: "Quadriceps".to_owned(),
        vice_muscle_text: "Glutes".to_owned(),
        equipment_text: "Kettlebell".to_owned(),
    }
}

/// A store seeded with the given entries through the in-memory backend.
#[must_use]
pub fn seeded_store(entries: &[CatalogEntry]) -> CatalogStore {
    let snapshot = serde_json::to_string(entries).unwrap();
    CatalogStore::new(Box::new(InMemorySnapshotStorage::seeded(snapshot)))
}

/// A store over the bundled repository snapshot.
#[must_use]
pub fn bundled_store() -> CatalogStore {
    use atlas_mcp_server::catalog::store::FileSnapshotStorage;
    CatalogStore::new(Box::new(FileSnapshotStorage::new(vec![
        "data/exercise-catalog.json".into(),
    ])))
}
