// ABOUTME: Integration tests for the catalog refresh service
// ABOUTME: Covers snapshot replacement, first-run bootstrap, and previous-snapshot retention on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

mod common;

use async_trait::async_trait;
use atlas_mcp_server::catalog::builder::{LocaleTable, RawExercise};
use atlas_mcp_server::catalog::refresh::{refresh, CatalogFeedSource};
use atlas_mcp_server::catalog::store::{CatalogStore, InMemorySnapshotStorage};
use atlas_mcp_server::errors::{AppError, AppResult, ErrorCode};
use serde_json::json;

struct FakeFeed {
    exercises: Vec<RawExercise>,
    locale: LocaleTable,
    fail_exercises: bool,
}

impl FakeFeed {
    fn new(tokens: &[(&str, i64)], locale: LocaleTable) -> Self {
        let exercises = tokens
            .iter()
            .map(|(token, id)| {
                serde_json::from_value(json!({
                    "id": id,
                    "name": token,
                    "part": [2],
                    "muscle": [2, 4],
                    "equipment": [1]
                }))
                .unwrap()
            })
            .collect();
        Self {
            exercises,
            locale,
            fail_exercises: false,
        }
    }
}

#[async_trait]
impl CatalogFeedSource for FakeFeed {
    async fn fetch_raw_exercises(&self) -> AppResult<Vec<RawExercise>> {
        if self.fail_exercises {
            return Err(AppError::catalog_build_failed("exercise feed is malformed"));
        }
        Ok(self.exercises.clone())
    }

    async fn fetch_locale_table(&self) -> AppResult<LocaleTable> {
        Ok(self.locale.clone())
    }
}

#[tokio::test]
async fn test_first_refresh_bootstraps_an_empty_store() {
    let store = CatalogStore::new(Box::new(InMemorySnapshotStorage::empty()));
    assert_eq!(
        store.all().unwrap_err().code,
        ErrorCode::CatalogUnavailable
    );

    let feed = FakeFeed::new(
        &[("T1", 1), ("T2", 2)],
        LocaleTable::from_pairs(&[("T1", "Push-ups"), ("T2", "Plank")]),
    );
    let report = refresh(&store, &feed).await.unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.added.len(), 2);
    assert!(report.removed.is_empty());
    assert!(report.untranslated.is_empty());

    let all = store.all().unwrap();
    assert_eq!(all.len(), 2);
    // Sorted by name: Plank before Push-ups.
    assert_eq!(all[0].name, "Plank");
    assert_eq!(all[1].name, "Push-ups");
}

#[tokio::test]
async fn test_refresh_replaces_the_snapshot_and_reports_drift() {
    let store = common::seeded_store(&[common::push_ups(), common::plank()]);
    store.all().unwrap();

    // New feed keeps Push-ups (via its T1004 token), drops Plank, and
    // introduces one untranslated token.
    let feed = FakeFeed::new(
        &[("T1004", 1004), ("T9999", 9999)],
        LocaleTable::from_pairs(&[("T1004", "Push-ups")]),
    );
    let report = refresh(&store, &feed).await.unwrap();

    assert_eq!(report.added, vec!["T9999"]);
    assert_eq!(report.removed, vec!["Plank"]);
    assert_eq!(report.untranslated, vec!["T9999"]);

    let all = store.all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|e| e.name == "T9999"));
    assert!(!all.iter().any(|e| e.name == "Plank"));
}

#[tokio::test]
async fn test_failed_refresh_retains_the_previous_snapshot() {
    let store = common::seeded_store(&[common::push_ups()]);
    store.all().unwrap();

    let mut feed = FakeFeed::new(&[("T1", 1)], LocaleTable::default());
    feed.fail_exercises = true;

    let error = refresh(&store, &feed).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::CatalogBuildFailed);

    // The caller keeps their working catalog.
    let all = store.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Push-ups");
}

#[tokio::test]
async fn test_refresh_carries_names_forward_through_the_previous_catalog() {
    // The locale table lost T1004, but the previous catalog still knows
    // its name; the entry must not degrade to the raw token.
    let store = common::seeded_store(&[common::push_ups()]);
    store.all().unwrap();

    let feed = FakeFeed::new(&[("T1004", 1004)], LocaleTable::default());
    let report = refresh(&store, &feed).await.unwrap();

    assert!(report.untranslated.is_empty());
    let all = store.all().unwrap();
    assert_eq!(all[0].name, "Push-ups");
}
