// ABOUTME: Exercise catalog: code tables, snapshot store, builder, and refresh service
// ABOUTME: Maintains the searchable human-readable mirror of the codified exercise taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Exercise Catalog
//!
//! The catalog is a searchable, human-readable mirror of the remote
//! service's codified exercise taxonomy. [`store::CatalogStore`] owns the
//! current snapshot (single writer: the refresh service; many readers);
//! [`builder`] merges the two upstream feeds into entries;
//! [`code_tables`] maps taxonomy codes to human labels.

pub mod builder;
pub mod code_tables;
pub mod refresh;
pub mod store;

pub use builder::{build, CatalogBuildReport, CatalogDiff, LocaleTable, NameSource, RawExercise};
pub use refresh::{refresh, CatalogFeedSource, RefreshReport};
pub use store::{
    CatalogStore, FileSnapshotStorage, InMemorySnapshotStorage, SearchFilter, SnapshotStorage,
};
