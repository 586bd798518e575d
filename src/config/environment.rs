// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses COROS endpoints, credentials, and catalog snapshot locations from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Environment-based configuration management
//!
//! All runtime configuration comes from environment variables with
//! defaults suitable for local use. Credentials are optional at startup;
//! operations that need them surface `AuthRequired` when they are absent.

use std::env;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::constants::{endpoints, service};

/// Remote COROS endpoints and credentials.
#[derive(Debug, Clone, Serialize)]
pub struct CorosConfig {
    /// Training-plan API base URL
    pub api_base: String,
    /// Locale string table URL
    pub locale_url: String,
    /// Access token; `None` until the user provisions one
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    /// User identity sent alongside the token
    #[serde(skip_serializing)]
    pub user_id: Option<String>,
}

impl CorosConfig {
    /// Read from `COROS_API_BASE`, `COROS_LOCALE_URL`,
    /// `COROS_ACCESS_TOKEN`, and `COROS_USER_ID`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_base: env::var("COROS_API_BASE")
                .unwrap_or_else(|_| endpoints::DEFAULT_API_BASE.to_owned()),
            locale_url: env::var("COROS_LOCALE_URL")
                .unwrap_or_else(|_| endpoints::DEFAULT_LOCALE_URL.to_owned()),
            access_token: env::var("COROS_ACCESS_TOKEN").ok().filter(|t| !t.is_empty()),
            user_id: env::var("COROS_USER_ID").ok().filter(|u| !u.is_empty()),
        }
    }

    /// Whether both credential halves are present
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.access_token.is_some() && self.user_id.is_some()
    }
}

/// Catalog snapshot locations.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogConfig {
    /// Primary snapshot path; refresh writes here
    pub snapshot_path: PathBuf,
    /// Bundled snapshot shipped with the repository, used as a read-only
    /// fallback until the first refresh
    pub bundled_snapshot_path: PathBuf,
}

impl CatalogConfig {
    /// Read from `ATLAS_CATALOG_PATH`, defaulting to the per-user data
    /// directory with the bundled snapshot as fallback
    #[must_use]
    pub fn from_env() -> Self {
        let snapshot_path = env::var("ATLAS_CATALOG_PATH").map_or_else(
            |_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(service::NAME)
                    .join("exercise-catalog.json")
            },
            PathBuf::from,
        );

        Self {
            snapshot_path,
            bundled_snapshot_path: PathBuf::from("data/exercise-catalog.json"),
        }
    }

    /// Ordered candidate locations for snapshot reads
    #[must_use]
    pub fn snapshot_candidates(&self) -> Vec<PathBuf> {
        vec![
            self.snapshot_path.clone(),
            self.bundled_snapshot_path.clone(),
        ]
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    /// Remote service endpoints and credentials
    pub coros: CorosConfig,
    /// Catalog snapshot locations
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load the full configuration from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            coros: CorosConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        };
        config.log_summary();
        config
    }

    fn log_summary(&self) {
        info!(
            api_base = %self.coros.api_base,
            snapshot = %self.catalog.snapshot_path.display(),
            "Configuration loaded"
        );
        if !self.coros.has_credentials() {
            warn!(
                "COROS credentials not configured; remote operations will report AUTH_REQUIRED \
                 until COROS_ACCESS_TOKEN and COROS_USER_ID are set"
            );
        }
    }
}
