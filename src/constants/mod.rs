// ABOUTME: Application constants organized by domain
// ABOUTME: Endpoint paths, wire-protocol codes, limits, header names, and tool names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than a single large
//! file. The wire-protocol codes mirror what the COROS training-plan
//! service expects; they are stable identifiers defined by the remote
//! service, not by this crate.

/// Service identity
pub mod service {
    /// Service name for logging and the MCP `initialize` handshake
    pub const NAME: &str = "atlas-mcp-server";
}

/// Remote COROS endpoints
pub mod endpoints {
    /// Default API base URL for the training-plan service
    pub const DEFAULT_API_BASE: &str = "https://teamapi.coros.com";

    /// Two-phase creation, step one: server-side metric calculation
    pub const TRAININGPLAN_CALCULATE: &str = "/trainingplan/calculate";

    /// Two-phase creation, step two: durable save and implicit device sync
    pub const TRAININGPLAN_ADD: &str = "/trainingplan/add";

    /// Saved-workout listing with optional name filter
    pub const TRAININGPLAN_QUERY: &str = "/trainingplan/query";

    /// Raw exercise feed, filtered by sport type
    pub const TRAININGPLAN_QUERY_EXERCISE: &str = "/trainingplan/queryExercise";

    /// Default URL of the English locale string table. Served as a
    /// script-like blob with a `window.<tag>=` prefix, not plain JSON.
    pub const DEFAULT_LOCALE_URL: &str = "https://trainingplan.coros.com/locale/en-US.prod.js";
}

/// Request header names required by the remote service
pub mod headers {
    /// Bearer-style access token header
    pub const ACCESS_TOKEN: &str = "accesstoken";

    /// User-identity header accompanying every authenticated call
    pub const USER_ID: &str = "userid";
}

/// Wire-protocol codes for the strength-workout activity shape
pub mod wire {
    /// Body-level result code signalling success
    pub const RESULT_OK: &str = "0000";

    /// Sport type code for strength workouts
    pub const SPORT_TYPE_STRENGTH: i32 = 402;

    /// Target type code: work measured in seconds
    pub const TARGET_TYPE_DURATION: i32 = 1;

    /// Target type code: work measured in repetitions
    pub const TARGET_TYPE_REPS: i32 = 2;

    /// Rest type code for timed rest between sets (the only rest shape
    /// the strength activity uses)
    pub const REST_TYPE_TIMED: i32 = 1;

    /// Intensity type code: no prescribed intensity
    pub const INTENSITY_TYPE_NONE: i32 = 0;

    /// Intensity type code: load in grams
    pub const INTENSITY_TYPE_WEIGHT: i32 = 1;
}

/// Catalog defaults and limits
pub mod limits {
    /// Default number of results returned by exercise search tools
    pub const DEFAULT_SEARCH_LIMIT: usize = 20;

    /// Default page size for saved-workout queries
    pub const DEFAULT_QUERY_PAGE_SIZE: u32 = 20;

    /// Suffix appended to a code token to form its description locale key
    pub const DESC_KEY_SUFFIX: &str = "_desc";

    /// Seconds per minute, for summary rounding
    pub const SECONDS_PER_MINUTE: i64 = 60;

    /// Grams per kilogram, for weight override scaling
    pub const GRAMS_PER_KILOGRAM: i64 = 1000;
}

/// MCP tool names
pub mod tools {
    /// Search the exercise catalog
    pub const SEARCH_EXERCISES: &str = "search_exercises";

    /// Fetch one catalog entry by name
    pub const GET_EXERCISE: &str = "get_exercise";

    /// Create and persist a strength workout
    pub const CREATE_STRENGTH_WORKOUT: &str = "create_strength_workout";

    /// List saved workouts from the remote service
    pub const LIST_WORKOUTS: &str = "list_workouts";

    /// Refresh the catalog snapshot from the upstream feeds
    pub const REFRESH_EXERCISE_CATALOG: &str = "refresh_exercise_catalog";
}
