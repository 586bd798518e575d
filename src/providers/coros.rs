// ABOUTME: COROS training-plan API client: two-phase workout creation plus catalog feeds
// ABOUTME: Handles credential headers, the body-level result-code envelope, and the add-call quirk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence
//
// NOTE: The training-plan API is undocumented. Failure is signalled by a
// non-success `result` code in the response body, not the transport
// status, and the add endpoint expects `trainingLoad` re-encoded as a
// string even though calculate returns it as a number.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::WorkoutService;
use crate::catalog::builder::{self, LocaleTable, RawExercise};
use crate::catalog::refresh::CatalogFeedSource;
use crate::config::environment::CorosConfig;
use crate::constants::{endpoints, headers, wire};
use crate::errors::{AppError, AppResult};
use crate::models::{SavedWorkout, WorkoutMetrics, WorkoutPayload, WorkoutQuery};
use crate::utils::http_client::shared_client;

/// Access credentials for the training-plan service.
#[derive(Debug, Clone)]
pub struct CorosCredentials {
    /// Bearer-style access token
    pub access_token: String,
    /// Account identity sent alongside the token
    pub user_id: String,
}

/// Response envelope shared by every training-plan endpoint.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    /// Body-level status code; `"0000"` is success
    #[serde(default)]
    result: String,
    /// Remote-supplied status message
    #[serde(default)]
    message: String,
    /// Operation payload, shape varies per endpoint
    #[serde(default)]
    data: serde_json::Value,
}

/// Paginated saved-workout listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryData {
    #[serde(default)]
    data_list: Vec<SavedWorkout>,
}

/// Client for the COROS training-plan service.
pub struct CorosClient {
    api_base: String,
    locale_url: String,
    credentials: RwLock<Option<CorosCredentials>>,
    client: reqwest::Client,
}

impl CorosClient {
    /// Client over the configured endpoints; credentials from the config
    /// are installed when both halves are present
    #[must_use]
    pub fn new(config: &CorosConfig) -> Self {
        let credentials = match (&config.access_token, &config.user_id) {
            (Some(token), Some(user_id)) => Some(CorosCredentials {
                access_token: token.clone(),
                user_id: user_id.clone(),
            }),
            _ => None,
        };

        Self {
            api_base: config.api_base.clone(),
            locale_url: config.locale_url.clone(),
            credentials: RwLock::new(credentials),
            client: shared_client().clone(),
        }
    }

    /// Install or replace the credentials
    pub async fn set_credentials(&self, credentials: CorosCredentials) {
        info!("Setting COROS credentials");
        *self.credentials.write().await = Some(credentials);
    }

    /// Whether a credential pair is currently installed
    pub async fn is_authenticated(&self) -> bool {
        self.credentials.read().await.is_some()
    }

    /// Current credentials, surfaced as `AuthRequired` before any network
    /// I/O when absent
    async fn require_credentials(&self) -> AppResult<CorosCredentials> {
        self.credentials
            .read()
            .await
            .clone()
            .ok_or_else(AppError::auth_required)
    }

    /// POST an authenticated request and unwrap the response envelope
    async fn api_post<T>(&self, path: &str, body: &impl Serialize) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let credentials = self.require_credentials().await?;
        let url = format!("{}{path}", self.api_base);
        debug!(%path, "COROS API request");

        let response = self
            .client
            .post(&url)
            .header(headers::ACCESS_TOKEN, &credentials.access_token)
            .header(headers::USER_ID, &credentials.user_id)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::remote_service(path, "transport", e.to_string()))?;

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| AppError::remote_service(path, "malformed", e.to_string()))?;

        if envelope.result != wire::RESULT_OK {
            return Err(AppError::remote_service(
                path,
                envelope.result,
                envelope.message,
            ));
        }

        serde_json::from_value(envelope.data)
            .map_err(|e| AppError::remote_service(path, "malformed", e.to_string()))
    }

    /// Fetch the raw strength-exercise feed
    ///
    /// # Errors
    ///
    /// `AuthRequired` without credentials, `RemoteServiceError` on
    /// transport or envelope failure, `CatalogBuildFailed` when the feed
    /// body is not the expected shape.
    #[instrument(skip(self), fields(api_call = "query_exercises"))]
    pub async fn query_exercises(&self, sport_type: i32) -> AppResult<Vec<RawExercise>> {
        let body = serde_json::json!({ "sportType": sport_type });
        let data: serde_json::Value = self
            .api_post(endpoints::TRAININGPLAN_QUERY_EXERCISE, &body)
            .await?;
        builder::parse_exercise_feed(&data)
    }

    /// Fetch and parse the locale string table. Unauthenticated: the
    /// table is a public static asset.
    ///
    /// # Errors
    ///
    /// `RemoteServiceError` on transport failure, `CatalogBuildFailed`
    /// when the blob does not parse.
    #[instrument(skip(self), fields(api_call = "fetch_locale_strings"))]
    pub async fn fetch_locale_strings(&self) -> AppResult<LocaleTable> {
        let response = self
            .client
            .get(&self.locale_url)
            .send()
            .await
            .map_err(|e| AppError::remote_service(&self.locale_url, "transport", e.to_string()))?;

        let blob = response
            .text()
            .await
            .map_err(|e| AppError::remote_service(&self.locale_url, "transport", e.to_string()))?;

        LocaleTable::parse(&blob)
    }
}

/// Fold the calculated metrics into the workout for the add call.
///
/// The add endpoint is inconsistent with calculate: `trainingLoad` must
/// be re-encoded as its string representation for this call only. That
/// quirk lives here and nowhere else; the rest of the system only ever
/// sees the numeric form.
#[must_use]
pub fn fold_metrics_for_add(workout: &WorkoutPayload, metrics: &WorkoutMetrics) -> serde_json::Value {
    let mut body = serde_json::json!(workout);
    body["duration"] = serde_json::json!(metrics.duration);
    body["totalSets"] = serde_json::json!(metrics.total_sets);
    body["trainingLoad"] = serde_json::Value::String(metrics.training_load.to_string());
    body
}

#[async_trait]
impl WorkoutService for CorosClient {
    #[instrument(skip(self, workout), fields(api_call = "calculate", workout = %workout.name))]
    async fn calculate(&self, workout: &WorkoutPayload) -> AppResult<WorkoutMetrics> {
        self.api_post(endpoints::TRAININGPLAN_CALCULATE, workout)
            .await
    }

    #[instrument(skip(self, workout, metrics), fields(api_call = "add", workout = %workout.name))]
    async fn add(&self, workout: &WorkoutPayload, metrics: &WorkoutMetrics) -> AppResult<()> {
        let body = fold_metrics_for_add(workout, metrics);
        let _ack: serde_json::Value = self.api_post(endpoints::TRAININGPLAN_ADD, &body).await?;
        info!(workout = %workout.name, "Workout persisted");
        Ok(())
    }

    #[instrument(skip(self, query), fields(api_call = "query"))]
    async fn query(&self, query: &WorkoutQuery) -> AppResult<Vec<SavedWorkout>> {
        let data: QueryData = self.api_post(endpoints::TRAININGPLAN_QUERY, query).await?;
        Ok(data.data_list)
    }
}

#[async_trait]
impl CatalogFeedSource for CorosClient {
    async fn fetch_raw_exercises(&self) -> AppResult<Vec<RawExercise>> {
        self.query_exercises(wire::SPORT_TYPE_STRENGTH).await
    }

    async fn fetch_locale_table(&self) -> AppResult<LocaleTable> {
        self.fetch_locale_strings().await
    }
}
