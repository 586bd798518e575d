// ABOUTME: Catalog refresh service: fetch both upstream feeds, rebuild, and swap the snapshot
// ABOUTME: Retains the previous snapshot untouched when either feed fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Catalog Refresh
//!
//! Drives one full catalog refresh: fetch the raw exercise feed and the
//! locale table, rebuild through [`crate::catalog::builder`], persist the
//! new snapshot, and only then discard the in-memory cache. Any failure
//! before the snapshot write leaves the previous snapshot in place, so a
//! failed refresh never costs the caller their working catalog.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::catalog::builder::{self, LocaleTable, RawExercise};
use crate::catalog::store::CatalogStore;
use crate::errors::{AppResult, ErrorCode};

/// The two disjoint upstream feeds the catalog is built from.
#[async_trait]
pub trait CatalogFeedSource: Send + Sync {
    /// Fetch the numerically-coded exercise list (authenticated)
    async fn fetch_raw_exercises(&self) -> AppResult<Vec<RawExercise>>;

    /// Fetch the locale string table (unauthenticated)
    async fn fetch_locale_table(&self) -> AppResult<LocaleTable>;
}

/// Outcome of one successful catalog refresh.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RefreshReport {
    /// Entries in the new snapshot
    pub total: usize,
    /// Names added versus the previous catalog
    pub added: Vec<String>,
    /// Names removed versus the previous catalog
    pub removed: Vec<String>,
    /// Code tokens with no translation in any fallback source
    pub untranslated: Vec<String>,
}

/// Run one catalog refresh against the given store and feed source.
///
/// # Errors
///
/// `CatalogBuildFailed` when either feed is malformed; remote transport
/// failures propagate as `RemoteServiceError`. On any error the previous
/// snapshot is retained.
#[instrument(skip(store, source))]
pub async fn refresh(store: &CatalogStore, source: &dyn CatalogFeedSource) -> AppResult<RefreshReport> {
    let raw_exercises = source.fetch_raw_exercises().await?;
    let locale = source.fetch_locale_table().await?;
    info!(
        exercises = raw_exercises.len(),
        locale_strings = locale.len(),
        "Fetched upstream catalog feeds"
    );

    // First refresh has no previous snapshot; that is not a failure.
    let previous = match store.load() {
        Ok(snapshot) => (*snapshot).clone(),
        Err(e) if e.code == ErrorCode::CatalogUnavailable => Vec::new(),
        Err(e) => return Err(e),
    };

    let report = builder::build(&raw_exercises, &locale, &previous);
    if !report.untranslated.is_empty() {
        warn!(
            count = report.untranslated.len(),
            "Catalog entries fell back to raw code tokens"
        );
    }

    store.write_snapshot(&report.entries)?;
    store.reload();
    info!(
        total = report.entries.len(),
        added = report.diff.added.len(),
        removed = report.diff.removed.len(),
        "Catalog snapshot refreshed"
    );

    Ok(RefreshReport {
        total: report.entries.len(),
        added: report.diff.added,
        removed: report.diff.removed,
        untranslated: report.untranslated,
    })
}
