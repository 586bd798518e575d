// ABOUTME: Unified error handling with standard error codes and structured failure results
// ABOUTME: Defines AppError, ErrorCode, and convenience constructors used across all modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error types for the Atlas MCP server. Every failure in the
//! catalog, compiler, and orchestrator pipeline is recovered into an
//! [`AppError`] carrying a stable [`ErrorCode`], so the tool layer can render
//! a structured failure result to the agent instead of a raw fault.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1000-1999)
    /// No valid COROS credential available; surfaced before any network call
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired = 1000,

    // Validation (3000-3999)
    /// Tool arguments failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Catalog (4000-4999)
    /// No catalog snapshot found at any known location
    #[serde(rename = "CATALOG_UNAVAILABLE")]
    CatalogUnavailable = 4000,
    /// An upstream feed was malformed during refresh; previous snapshot retained
    #[serde(rename = "CATALOG_BUILD_FAILED")]
    CatalogBuildFailed = 4001,
    /// One or more requested exercise names absent from the catalog
    #[serde(rename = "EXERCISE_NOT_FOUND")]
    ExerciseNotFound = 4002,

    // External services (5000-5999)
    /// Non-success response from the remote workout service
    #[serde(rename = "REMOTE_SERVICE_ERROR")]
    RemoteServiceError = 5000,

    // Configuration (6000-6999)
    /// Configuration missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-facing description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthRequired => "COROS credentials are required for this operation",
            Self::InvalidInput => "The provided input is invalid",
            Self::CatalogUnavailable => "No exercise catalog snapshot is available",
            Self::CatalogBuildFailed => "Exercise catalog refresh failed",
            Self::ExerciseNotFound => "One or more exercises were not found in the catalog",
            Self::RemoteServiceError => "The remote workout service returned an error",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (e.g. the full unresolved-name list)
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a source error for chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for the error taxonomy
impl AppError {
    /// No valid credential available when a remote call was attempted
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(
            ErrorCode::AuthRequired,
            "set COROS_ACCESS_TOKEN and COROS_USER_ID before calling the remote service",
        )
    }

    /// Tool arguments failed validation
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// No catalog snapshot found at load time
    #[must_use]
    pub fn catalog_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CatalogUnavailable, message)
    }

    /// Upstream feed malformed during refresh
    #[must_use]
    pub fn catalog_build_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CatalogBuildFailed, message)
    }

    /// One or more requested exercise names are absent from the catalog.
    ///
    /// All unresolved names are reported together so the caller can correct
    /// every mistake in one round trip.
    #[must_use]
    pub fn exercises_not_found(names: &[String]) -> Self {
        Self::new(
            ErrorCode::ExerciseNotFound,
            format!("exercises not found in catalog: {}", names.join(", ")),
        )
        .with_details(serde_json::json!({ "unresolved": names }))
    }

    /// Non-success response from the remote service, tagged with the
    /// offending operation's path and the remote-supplied code and message
    #[must_use]
    pub fn remote_service(
        path: impl Into<String>,
        remote_code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let remote_code = remote_code.into();
        Self::new(
            ErrorCode::RemoteServiceError,
            format!("{path}: {} ({remote_code})", message.into()),
        )
        .with_details(serde_json::json!({ "path": path, "remoteCode": remote_code }))
    }

    /// Configuration missing or invalid
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Unexpected internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Conversion from `anyhow::Error` at the bootstrap boundary
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string())
    }
}
