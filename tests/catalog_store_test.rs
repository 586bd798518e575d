// ABOUTME: Integration tests for the catalog store
// ABOUTME: Covers lazy loading, exact and filtered lookup, and snapshot replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

mod common;

use atlas_mcp_server::catalog::store::{
    CatalogStore, FileSnapshotStorage, InMemorySnapshotStorage, SearchFilter, SnapshotStorage,
};
use atlas_mcp_server::errors::ErrorCode;

#[test]
fn test_find_by_name_round_trips_every_entry() {
    let store = common::bundled_store();
    let all = store.all().unwrap();
    assert!(!all.is_empty());

    for entry in all.iter() {
        let found = store.find_by_name(&entry.name).unwrap();
        let found = found.unwrap();
        assert!(found.name.eq_ignore_ascii_case(&entry.name));
    }
}

#[test]
fn test_find_by_name_is_case_insensitive() {
    let store = common::bundled_store();
    let found = store.find_by_name("push-UPS").unwrap().unwrap();
    assert_eq!(found.name, "Push-ups");
    assert_eq!(found.code_name, "T1004");
}

#[test]
fn test_find_by_name_absent_is_none_not_error() {
    let store = common::bundled_store();
    assert!(store.find_by_name("Front Lever").unwrap().is_none());
}

#[test]
fn test_find_by_code_is_case_insensitive() {
    let store = common::bundled_store();
    let found = store.find_by_code("t1050").unwrap().unwrap();
    assert_eq!(found.name, "Plank");
}

#[test]
fn test_find_by_id() {
    let store = common::bundled_store();
    let found = store.find_by_id(1075).unwrap().unwrap();
    assert_eq!(found.name, "Deadlift");
    assert!(store.find_by_id(999_999).unwrap().is_none());
}

#[test]
fn test_search_without_filters_returns_full_catalog() {
    let store = common::bundled_store();
    let all = store.all().unwrap();
    let results = store.search(&SearchFilter::default()).unwrap();
    assert_eq!(results.len(), all.len());
}

#[test]
fn test_search_by_muscle_matches_primary_and_secondary_text() {
    let store = common::bundled_store();
    let results = store
        .search(&SearchFilter {
            muscle: Some("chest".to_owned()),
            ..SearchFilter::default()
        })
        .unwrap();

    assert!(!results.is_empty());
    for entry in &results {
        assert!(
            entry.muscle_text.to_lowercase().contains("chest"),
            "{} matched without chest in muscle text",
            entry.name
        );
    }
    // Triceps Dips lists Chest only as a secondary muscle and must match.
    assert!(results.iter().any(|e| e.name == "Triceps Dips"));
}

#[test]
fn test_search_query_requires_every_token() {
    let store = common::bundled_store();

    let results = store
        .search(&SearchFilter {
            query: Some("shoulder press".to_owned()),
            ..SearchFilter::default()
        })
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Dumbbell Shoulder Press");

    let none = store
        .search(&SearchFilter {
            query: Some("shoulder row".to_owned()),
            ..SearchFilter::default()
        })
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_search_filters_are_conjunctive() {
    let store = common::bundled_store();
    let results = store
        .search(&SearchFilter {
            muscle: Some("quadriceps".to_owned()),
            equipment: Some("kettlebell".to_owned()),
            ..SearchFilter::default()
        })
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Goblet Squat");
}

#[test]
fn test_load_is_idempotent() {
    let store = common::bundled_store();
    let first = store.all().unwrap();
    let second = store.all().unwrap();
    assert_eq!(first.len(), second.len());
}

#[test]
fn test_reload_picks_up_replaced_snapshot() {
    let store = common::seeded_store(&[common::push_ups()]);
    assert_eq!(store.all().unwrap().len(), 1);

    store
        .write_snapshot(&[common::push_ups(), common::plank()])
        .unwrap();
    // The in-memory cache still serves the old snapshot until reload.
    assert_eq!(store.all().unwrap().len(), 1);

    store.reload();
    assert_eq!(store.all().unwrap().len(), 2);
}

#[test]
fn test_missing_snapshot_is_catalog_unavailable() {
    let store = CatalogStore::new(Box::new(InMemorySnapshotStorage::empty()));
    let error = store.all().unwrap_err();
    assert_eq!(error.code, ErrorCode::CatalogUnavailable);
}

#[test]
fn test_file_storage_reads_first_existing_candidate() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let present = dir.path().join("present.json");
    std::fs::write(&present, "[]").unwrap();

    let storage = FileSnapshotStorage::new(vec![missing, present]);
    assert_eq!(storage.read().unwrap().unwrap(), "[]");
}

#[test]
fn test_file_storage_write_then_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("catalog.json");

    let store = CatalogStore::new(Box::new(FileSnapshotStorage::new(vec![path.clone()])));
    store.write_snapshot(&[common::push_ups()]).unwrap();
    assert!(path.is_file());

    let reloaded = store.all().unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].name, "Push-ups");
}
