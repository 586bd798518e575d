// ABOUTME: In-memory catalog store with lazy loading and an injectable snapshot backend
// ABOUTME: Supports exact, fuzzy, and attribute-filtered lookup over immutable catalog snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Catalog Store
//!
//! Holds the current catalog snapshot in memory and answers lookups.
//! The store is an explicit, constructible object with an injectable
//! [`SnapshotStorage`] backend, so tests run against in-memory fixtures
//! instead of real files.
//!
//! Readers always load-or-reuse one immutable `Arc` snapshot; refresh
//! writes a new snapshot through the backend and then calls [`CatalogStore::reload`],
//! so concurrent readers see either the old complete snapshot or the new
//! complete one, never a partially-written state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::models::CatalogEntry;

/// Storage backend for the persisted catalog snapshot.
///
/// The snapshot is a single structured file, fully overwritten on each
/// successful refresh and read lazily on first store access.
pub trait SnapshotStorage: Send + Sync {
    /// Read the current snapshot contents, or `None` when no snapshot
    /// exists yet at any known location
    fn read(&self) -> AppResult<Option<String>>;

    /// Replace the snapshot contents wholesale
    fn write(&self, contents: &str) -> AppResult<()>;

    /// Human-readable location description for logs and errors
    fn describe(&self) -> String;
}

/// File-backed snapshot storage with ordered candidate locations.
///
/// Reads come from the first candidate that exists; writes always go to
/// the primary (first) candidate via a temp-file rename, keeping snapshot
/// replacement atomic at the storage layer.
pub struct FileSnapshotStorage {
    candidates: Vec<PathBuf>,
}

impl FileSnapshotStorage {
    /// Storage over one or more candidate snapshot paths
    #[must_use]
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    fn primary(&self) -> AppResult<&PathBuf> {
        self.candidates
            .first()
            .ok_or_else(|| AppError::internal("snapshot storage has no candidate paths"))
    }
}

impl SnapshotStorage for FileSnapshotStorage {
    fn read(&self) -> AppResult<Option<String>> {
        for path in &self.candidates {
            if path.is_file() {
                debug!(path = %path.display(), "Reading catalog snapshot");
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    AppError::internal(format!(
                        "failed to read catalog snapshot {}: {e}",
                        path.display()
                    ))
                })?;
                return Ok(Some(contents));
            }
        }
        Ok(None)
    }

    fn write(&self, contents: &str) -> AppResult<()> {
        let path = self.primary()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::internal(format!(
                    "failed to create snapshot directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, contents).map_err(|e| {
            AppError::internal(format!("failed to write snapshot {}: {e}", tmp.display()))
        })?;
        std::fs::rename(&tmp, path).map_err(|e| {
            AppError::internal(format!("failed to replace snapshot {}: {e}", path.display()))
        })?;
        info!(path = %path.display(), "Catalog snapshot written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// In-memory snapshot storage for tests and ephemeral deployments.
#[derive(Default)]
pub struct InMemorySnapshotStorage {
    contents: Mutex<Option<String>>,
}

impl InMemorySnapshotStorage {
    /// Empty storage: the store will report the catalog as unavailable
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with snapshot contents
    #[must_use]
    pub fn seeded(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }
}

impl SnapshotStorage for InMemorySnapshotStorage {
    fn read(&self) -> AppResult<Option<String>> {
        let guard = self
            .contents
            .lock()
            .map_err(|_| AppError::internal("in-memory snapshot lock poisoned"))?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> AppResult<()> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| AppError::internal("in-memory snapshot lock poisoned"))?;
        *guard = Some(contents.to_owned());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_owned()
    }
}

/// Optional, conjunctive filters for catalog search.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Whitespace-separated tokens, each matched as a case-insensitive
    /// substring of the entry name
    pub query: Option<String>,
    /// Substring of the combined primary+secondary muscle text
    pub muscle: Option<String>,
    /// Substring of the body-part text
    pub body_part: Option<String>,
    /// Substring of the equipment text
    pub equipment: Option<String>,
}

impl SearchFilter {
    fn matches(&self, entry: &CatalogEntry) -> bool {
        if let Some(query) = &self.query {
            let name = entry.name.to_lowercase();
            let all_tokens_match = query
                .split_whitespace()
                .all(|token| name.contains(&token.to_lowercase()));
            if !all_tokens_match {
                return false;
            }
        }
        if let Some(muscle) = &self.muscle {
            if !entry
                .muscle_text
                .to_lowercase()
                .contains(&muscle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(body_part) = &self.body_part {
            if !entry
                .body_part_text
                .to_lowercase()
                .contains(&body_part.to_lowercase())
            {
                return false;
            }
        }
        if let Some(equipment) = &self.equipment {
            if !entry
                .equipment_text
                .to_lowercase()
                .contains(&equipment.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// The in-memory, lazily-loaded catalog.
pub struct CatalogStore {
    storage: Box<dyn SnapshotStorage>,
    snapshot: RwLock<Option<Arc<Vec<CatalogEntry>>>>,
}

impl CatalogStore {
    /// Store over the given snapshot backend; nothing is read until the
    /// first lookup
    #[must_use]
    pub fn new(storage: Box<dyn SnapshotStorage>) -> Self {
        Self {
            storage,
            snapshot: RwLock::new(None),
        }
    }

    /// Load the snapshot into memory on first access. Idempotent: later
    /// calls reuse the cached snapshot until [`Self::reload`].
    ///
    /// # Errors
    ///
    /// `CatalogUnavailable` when no snapshot exists at any known location
    /// or the snapshot cannot be parsed.
    pub fn load(&self) -> AppResult<Arc<Vec<CatalogEntry>>> {
        {
            let guard = self
                .snapshot
                .read()
                .map_err(|_| AppError::internal("catalog snapshot lock poisoned"))?;
            if let Some(snapshot) = guard.as_ref() {
                return Ok(Arc::clone(snapshot));
            }
        }

        let contents = self.storage.read()?.ok_or_else(|| {
            AppError::catalog_unavailable(format!(
                "no catalog snapshot found at {}; run refresh_exercise_catalog first",
                self.storage.describe()
            ))
        })?;

        let entries: Vec<CatalogEntry> = serde_json::from_str(&contents).map_err(|e| {
            AppError::catalog_unavailable(format!(
                "catalog snapshot at {} is not parseable: {e}",
                self.storage.describe()
            ))
        })?;
        info!(entries = entries.len(), "Catalog snapshot loaded");

        let snapshot = Arc::new(entries);
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| AppError::internal("catalog snapshot lock poisoned"))?;
        // A concurrent loader may have won the race; keep its snapshot.
        let current = guard.get_or_insert_with(|| Arc::clone(&snapshot));
        Ok(Arc::clone(current))
    }

    /// Every entry in stored order (deterministic for a given snapshot)
    ///
    /// # Errors
    ///
    /// Propagates [`Self::load`] failures.
    pub fn all(&self) -> AppResult<Arc<Vec<CatalogEntry>>> {
        self.load()
    }

    /// Case-insensitive exact match on the resolved name. Absence is not
    /// an error; callers decide its significance.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::load`] failures.
    pub fn find_by_name(&self, name: &str) -> AppResult<Option<CatalogEntry>> {
        let snapshot = self.load()?;
        Ok(snapshot
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Case-insensitive exact match on the upstream code token
    ///
    /// # Errors
    ///
    /// Propagates [`Self::load`] failures.
    pub fn find_by_code(&self, code_name: &str) -> AppResult<Option<CatalogEntry>> {
        let snapshot = self.load()?;
        Ok(snapshot
            .iter()
            .find(|e| e.code_name.eq_ignore_ascii_case(code_name))
            .cloned())
    }

    /// Exact match on the opaque upstream id
    ///
    /// # Errors
    ///
    /// Propagates [`Self::load`] failures.
    pub fn find_by_id(&self, id: i64) -> AppResult<Option<CatalogEntry>> {
        let snapshot = self.load()?;
        Ok(snapshot.iter().find(|e| e.id == id).cloned())
    }

    /// Attribute-filtered search; all filters are conjunctive and no
    /// filters returns the full catalog
    ///
    /// # Errors
    ///
    /// Propagates [`Self::load`] failures.
    pub fn search(&self, filter: &SearchFilter) -> AppResult<Vec<CatalogEntry>> {
        let snapshot = self.load()?;
        Ok(snapshot
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    /// Persist a new snapshot through the backend. The in-memory cache is
    /// untouched; callers follow up with [`Self::reload`] once the write
    /// has succeeded.
    ///
    /// # Errors
    ///
    /// Serialization or backend write failures.
    pub fn write_snapshot(&self, entries: &[CatalogEntry]) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::internal(format!("failed to serialize catalog: {e}")))?;
        self.storage.write(&contents)
    }

    /// Discard the in-memory snapshot; the next access re-reads from
    /// storage and reconstructs fully from the new file
    pub fn reload(&self) {
        if let Ok(mut guard) = self.snapshot.write() {
            *guard = None;
            debug!("Catalog snapshot cache discarded");
        }
    }
}
