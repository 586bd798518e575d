// ABOUTME: Static bidirectional code tables for the muscle, body-part, and equipment taxonomies
// ABOUTME: Codes are stable identifiers defined by the remote service; labels are the human-facing form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Taxonomy Code Tables
//!
//! The remote service classifies every exercise along three axes, each with
//! a fixed, externally-defined set of integer codes. These tables are the
//! only place those codes meet human labels: code-to-label for display and
//! label-substring-to-code-set for filtering.

/// One taxonomy axis: a fixed set of `(code, label)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    entries: &'static [(i32, &'static str)],
}

/// Body-region codes
pub const BODY_PARTS: CodeTable = CodeTable {
    entries: &[
        (0, "Whole Body"),
        (1, "Shoulders"),
        (2, "Chest"),
        (3, "Back"),
        (4, "Core"),
        (5, "Legs/Hips"),
        (6, "Arms"),
    ],
};

/// Equipment codes. The code space has gaps (14 and 15 are unassigned
/// upstream); unknown codes render as their numeric string.
pub const EQUIPMENT: CodeTable = CodeTable {
    entries: &[
        (1, "Bodyweight"),
        (2, "Dumbbells"),
        (3, "Barbells"),
        (4, "Barbell Plates"),
        (5, "Cable/Pulley"),
        (6, "Gym Equipment"),
        (7, "Exercise Ball"),
        (8, "Bosu Ball"),
        (9, "Bands"),
        (10, "Medicine Ball"),
        (11, "Kettlebell"),
        (12, "Hangboard"),
        (13, "Indoor Rower"),
        (16, "Ropes"),
    ],
};

/// Muscle codes
pub const MUSCLES: CodeTable = CodeTable {
    entries: &[
        (1, "Deltoids"),
        (2, "Chest"),
        (3, "Biceps"),
        (4, "Triceps"),
        (5, "Forearms"),
        (6, "Abs"),
        (7, "Glutes"),
        (8, "Quadriceps"),
        (9, "Adductor"),
        (10, "Abductor"),
        (11, "Trapezius"),
        (12, "Latissimus Dorsi"),
        (13, "Erector Spinae"),
        (14, "Posterior Thigh"),
        (15, "Calves"),
    ],
};

impl CodeTable {
    /// Label for a code, if the code is known
    #[must_use]
    pub fn label(&self, code: i32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// Every code whose label contains the filter as a case-insensitive
    /// substring
    #[must_use]
    pub fn codes_matching(&self, filter: &str) -> Vec<i32> {
        let needle = filter.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, label)| label.to_lowercase().contains(&needle))
            .map(|(code, _)| *code)
            .collect()
    }

    /// Human text for a code list, labels joined with `", "`. Unknown
    /// codes render as their numeric string rather than failing.
    #[must_use]
    pub fn labels_text(&self, codes: &[i32]) -> String {
        codes
            .iter()
            .map(|&code| {
                self.label(code)
                    .map_or_else(|| code.to_string(), str::to_owned)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
