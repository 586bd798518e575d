// ABOUTME: Merges the raw exercise feed and the locale string table into catalog entries
// ABOUTME: Three-tier name resolution, taxonomy text projections, and drift reporting vs the prior catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Catalog Builder
//!
//! Builds a complete catalog snapshot from two independently-shaped
//! upstream feeds: the numerically-coded exercise list and the locale
//! string table. Display names resolve through an explicit ordered list
//! of [`NameSource`] strategies; taxonomy codes project to human text
//! through the static code tables. The result is sorted by name for
//! deterministic, human-browsable ordering, and the report carries the
//! drift (added/removed names, untranslated code tokens) versus the
//! previous catalog.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::catalog::code_tables::{BODY_PARTS, EQUIPMENT, MUSCLES};
use crate::constants::{limits, wire};
use crate::errors::{AppError, AppResult};
use crate::models::{CatalogEntry, TargetType};

/// One raw exercise record as the upstream feed ships it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExercise {
    /// Upstream numeric identifier
    pub id: i64,
    /// Code token, also the locale-table key (e.g. `T1004`)
    pub name: String,
    /// Overview locale key
    #[serde(default)]
    pub overview: String,
    /// Body-region codes
    #[serde(default)]
    pub part: Vec<i32>,
    /// Muscle codes in relevance order
    #[serde(default)]
    pub muscle: Vec<i32>,
    /// Equipment codes
    #[serde(default)]
    pub equipment: Vec<i32>,
    /// Comma-joined cover image URLs; the first is the thumbnail
    #[serde(default)]
    pub cover_url_arr_str: String,
    /// Demonstration video URL
    #[serde(default)]
    pub video_url: String,
    /// Default sets
    #[serde(default = "default_sets")]
    pub sets: i32,
    /// Default target type wire code
    #[serde(default = "default_target_type")]
    pub target_type: i32,
    /// Default target value
    #[serde(default = "default_target_value")]
    pub target_value: i32,
    /// Default rest seconds
    #[serde(default = "default_rest_value")]
    pub rest_value: i32,
    /// Default intensity type wire code
    #[serde(default)]
    pub intensity_type: i32,
    /// Default intensity value
    #[serde(default)]
    pub intensity_value: i64,
}

const fn default_sets() -> i32 {
    3
}
const fn default_target_type() -> i32 {
    wire::TARGET_TYPE_REPS
}
const fn default_target_value() -> i32 {
    10
}
const fn default_rest_value() -> i32 {
    60
}

/// The locale string table: code token to human label.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    strings: HashMap<String, String>,
}

impl LocaleTable {
    /// Parse the upstream locale blob.
    ///
    /// The table is served as a script-like text blob with a fixed
    /// `window.<tag>=` prefix and trailing semicolons that must be
    /// stripped before the remainder parses as a JSON object. Non-string
    /// values are ignored.
    ///
    /// # Errors
    ///
    /// `CatalogBuildFailed` when the prefix is absent or the remainder is
    /// not a JSON object.
    pub fn parse(blob: &str) -> AppResult<Self> {
        let text = blob.trim();
        let json = text
            .strip_prefix("window.")
            .and_then(|rest| rest.split_once('='))
            .filter(|(tag, _)| !tag.is_empty() && tag.chars().all(|c| c.is_alphanumeric() || c == '_'))
            .map(|(_, body)| body.trim_end_matches(';'))
            .ok_or_else(|| {
                AppError::catalog_build_failed("locale table blob is missing the window.<tag>= prefix")
            })?;

        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| {
                AppError::catalog_build_failed(format!("locale table is not a JSON object: {e}"))
            })?;

        let strings = object
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();
        Ok(Self { strings })
    }

    /// Table from literal pairs, for fixtures and tests
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            strings: pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }

    /// Label for a code token, if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Where a display name was resolved from, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// Locale table lookup keyed by the code token
    Locale,
    /// Name carried over from the matching entry in the previous catalog
    PreviousCatalog,
    /// The raw code token itself, recorded as untranslated
    CodeToken,
}

/// The fallback chain, tried in order and stopping at the first success.
/// A new fallback source slots in here without touching call sites.
pub const NAME_RESOLUTION_ORDER: [NameSource; 3] = [
    NameSource::Locale,
    NameSource::PreviousCatalog,
    NameSource::CodeToken,
];

fn try_resolve(
    source: NameSource,
    token: &str,
    locale: &LocaleTable,
    previous_by_code: &HashMap<&str, &CatalogEntry>,
) -> Option<String> {
    match source {
        NameSource::Locale => locale.get(token).map(str::to_owned),
        NameSource::PreviousCatalog => previous_by_code.get(token).map(|e| e.name.clone()),
        NameSource::CodeToken => Some(token.to_owned()),
    }
}

fn resolve_name(
    token: &str,
    locale: &LocaleTable,
    previous_by_code: &HashMap<&str, &CatalogEntry>,
) -> (String, NameSource) {
    for source in NAME_RESOLUTION_ORDER {
        if let Some(name) = try_resolve(source, token, locale, previous_by_code) {
            return (name, source);
        }
    }
    // CodeToken always resolves; the loop cannot fall through.
    (token.to_owned(), NameSource::CodeToken)
}

/// Name-set drift between two catalog snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDiff {
    /// Names present in the new catalog but not the previous one
    pub added: Vec<String>,
    /// Names present in the previous catalog but not the new one
    pub removed: Vec<String>,
}

impl CatalogDiff {
    fn between(new_entries: &[CatalogEntry], previous: &[CatalogEntry]) -> Self {
        let new_names: HashSet<&str> = new_entries.iter().map(|e| e.name.as_str()).collect();
        let old_names: HashSet<&str> = previous.iter().map(|e| e.name.as_str()).collect();

        let mut added: Vec<String> = new_names
            .difference(&old_names)
            .map(|n| (*n).to_owned())
            .collect();
        let mut removed: Vec<String> = old_names
            .difference(&new_names)
            .map(|n| (*n).to_owned())
            .collect();
        added.sort();
        removed.sort();
        Self { added, removed }
    }
}

/// The result of one catalog build.
#[derive(Debug, Clone)]
pub struct CatalogBuildReport {
    /// The new catalog, sorted by name
    pub entries: Vec<CatalogEntry>,
    /// Code tokens that resolved through neither the locale table nor the
    /// previous catalog, in upstream feed order
    pub untranslated: Vec<String>,
    /// Name-set drift versus the previous catalog
    pub diff: CatalogDiff,
}

fn target_type_from_code(code: i32) -> TargetType {
    if code == wire::TARGET_TYPE_DURATION {
        TargetType::Duration
    } else {
        TargetType::Reps
    }
}

fn thumbnail_url(cover_url_arr_str: &str) -> String {
    cover_url_arr_str
        .split(',')
        .next()
        .unwrap_or_default()
        .to_owned()
}

fn build_entry(
    raw: &RawExercise,
    locale: &LocaleTable,
    previous_by_code: &HashMap<&str, &CatalogEntry>,
) -> (CatalogEntry, NameSource) {
    let (name, source) = resolve_name(&raw.name, locale, previous_by_code);
    let desc = locale
        .get(&format!("{}{}", raw.name, limits::DESC_KEY_SUFFIX))
        .unwrap_or_default()
        .to_owned();

    let main_muscle = raw.muscle.first().copied();
    let vice_muscles: Vec<i32> = main_muscle.map_or_else(Vec::new, |main| {
        raw.muscle.iter().copied().filter(|&m| m != main).collect()
    });

    let entry = CatalogEntry {
        id: raw.id,
        code_name: raw.name.clone(),
        name,
        desc,
        overview: raw.overview.clone(),
        body_parts: raw.part.clone(),
        muscles: raw.muscle.clone(),
        equipment: raw.equipment.clone(),
        sets: raw.sets,
        target_type: target_type_from_code(raw.target_type),
        target_value: raw.target_value,
        rest_value: raw.rest_value,
        intensity_type: raw.intensity_type,
        intensity_value: raw.intensity_value,
        thumbnail_url: thumbnail_url(&raw.cover_url_arr_str),
        video_url: raw.video_url.clone(),
        body_part_text: BODY_PARTS.labels_text(&raw.part),
        muscle_text: MUSCLES.labels_text(&raw.muscle),
        main_muscle_text: main_muscle.map_or_else(String::new, |m| MUSCLES.labels_text(&[m])),
        vice_muscle_text: MUSCLES.labels_text(&vice_muscles),
        equipment_text: EQUIPMENT.labels_text(&raw.equipment),
    };
    (entry, source)
}

/// Build a new catalog from the two upstream feeds.
///
/// Both feeds must already be parsed into their expected shapes; a feed
/// that fails to parse never reaches this function, so no partial catalog
/// can be produced. The previous catalog participates only as a name
/// fallback source and as the diff baseline.
#[must_use]
pub fn build(
    raw_exercises: &[RawExercise],
    locale: &LocaleTable,
    previous: &[CatalogEntry],
) -> CatalogBuildReport {
    let previous_by_code: HashMap<&str, &CatalogEntry> = previous
        .iter()
        .map(|e| (e.code_name.as_str(), e))
        .collect();

    let mut untranslated = Vec::new();
    let mut entries = Vec::with_capacity(raw_exercises.len());
    for raw in raw_exercises {
        let (entry, source) = build_entry(raw, locale, &previous_by_code);
        if source == NameSource::CodeToken {
            untranslated.push(raw.name.clone());
        }
        entries.push(entry);
    }

    entries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    let diff = CatalogDiff::between(&entries, previous);
    CatalogBuildReport {
        entries,
        untranslated,
        diff,
    }
}

/// Parse the raw exercise feed payload into typed records.
///
/// # Errors
///
/// `CatalogBuildFailed` when the feed is not parseable into the expected
/// shape; the caller retains the previous snapshot.
pub fn parse_exercise_feed(data: &serde_json::Value) -> AppResult<Vec<RawExercise>> {
    serde_json::from_value(data.clone())
        .map_err(|e| AppError::catalog_build_failed(format!("exercise feed is malformed: {e}")))
}
