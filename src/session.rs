// ABOUTME: Recommendation session facade owning request inputs and the last service response
// ABOUTME: Composes builder, orchestrator, fallback, and image lookup behind generate and recommend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Session
//!
//! [`RecommendationSession`] is the single entry point for the presentation layer.
//! It owns a [`SessionState`] guarded by a `tokio::sync::RwLock`:
//!
//! - request inputs, replaced wholesale by [`RecommendationSession::set_request`]
//! - the most recent raw response, overwritten on every attempt that received one
//!
//! `generate` surfaces failures; `recommend` and `generate_with_fallback` never fail
//! and substitute catalog recipes when the service cannot answer.

use chrono::{DateTime, Utc};
use recipe_core::constants::response_keys;
use recipe_core::errors::{AppResult, RecommendationResult};
use recipe_core::models::{IngredientSet, NutritionVector, Recipe, RequestParameters};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::catalog::IngredientCatalog;
use crate::client::{RawResponse, RecommendationService, ServiceClient};
use crate::config::RecommenderConfig;
use crate::fallback::FallbackSelector;
use crate::images::{attach_images, ImageFinder, NoImageFinder};
use crate::request_builder::RequestBuilder;
use crate::retry::{AttemptObserver, BackoffSchedule, RetryOrchestrator, Sleeper, TokioSleeper};

/// Mutable state owned by one session
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    nutrition_input: NutritionVector,
    ingredients: Vec<String>,
    params: RequestParameters,
    last_response: Option<RawResponse>,
}

/// Copy of the current request inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSnapshot {
    /// Nutrition targets as set
    pub nutrition_input: NutritionVector,
    /// Ingredients as set, before normalization
    pub ingredients: Vec<String>,
    /// Parameters merged over defaults
    pub params: RequestParameters,
}

/// Records every received response into the session state
struct ResponseRecorder {
    state: Arc<RwLock<SessionState>>,
}

#[async_trait::async_trait]
impl AttemptObserver for ResponseRecorder {
    async fn on_response(&self, response: &RawResponse) {
        self.state.write().await.last_response = Some(response.clone());
    }
}

/// Where a recommendation list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// The remote service answered
    Service,
    /// The local catalog stood in
    Fallback,
}

/// Result of [`RecommendationSession::recommend`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    /// Recipes to display
    pub recipes: Vec<Recipe>,
    /// Origin of `recipes`
    pub source: RecommendationSource,
    /// Why the service result was not used, when it was not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Outcome of a connection test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Health probe succeeded
    Connected,
    /// Service reachable but not healthy, or unreachable
    Unhealthy,
    /// The test itself could not complete
    Error,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Connected => "connected",
            Self::Unhealthy => "unhealthy",
            Self::Error => "error",
        })
    }
}

/// Combined health and stats report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionReport {
    /// Service base URL
    pub api_url: String,
    /// Health probe result
    pub health_check: bool,
    /// Server statistics, empty when unavailable
    pub api_stats: Map<String, Value>,
    /// Overall status
    pub status: ConnectionStatus,
    /// Failure description for [`ConnectionStatus::Error`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the test started
    pub timestamp: DateTime<Utc>,
}

/// Statistics derived from the last recorded response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseStats {
    /// Nothing has been recorded yet
    NoResponse {
        /// Always `no_response`
        status: &'static str,
        /// Human-readable explanation
        message: &'static str,
    },
    /// Details of the last response
    Recorded(ResponseDetails),
}

impl ResponseStats {
    const fn no_response() -> Self {
        Self::NoResponse {
            status: "no_response",
            message: "No response generated yet",
        }
    }

    /// Whether no response has been recorded
    #[must_use]
    pub const fn is_no_response(&self) -> bool {
        matches!(self, Self::NoResponse { .. })
    }

    /// Details, when a response has been recorded
    #[must_use]
    pub const fn details(&self) -> Option<&ResponseDetails> {
        match self {
            Self::NoResponse { .. } => None,
            Self::Recorded(details) => Some(details),
        }
    }
}

/// Fields derived from a recorded response. Body-derived fields are present only
/// for status 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseDetails {
    /// HTTP status
    pub status_code: u16,
    /// When the response arrived
    pub response_time: DateTime<Utc>,
    /// Request URL
    pub url: String,
    /// Response headers
    pub headers: BTreeMap<String, String>,
    /// Length of `output`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_count: Option<usize>,
    /// `output` key present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_output: Option<bool>,
    /// `errors` key present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_errors: Option<bool>,
    /// `warnings` key present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_warnings: Option<bool>,
    /// Set when a 200 body could not be read as a JSON object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

impl ResponseDetails {
    fn from_response(response: &RawResponse) -> Self {
        let mut details = Self {
            status_code: response.status,
            response_time: response.received_at,
            url: response.url.clone(),
            headers: response.headers.clone(),
            recipe_count: None,
            has_output: None,
            has_errors: None,
            has_warnings: None,
            parse_error: None,
        };
        if !response.is_success() {
            return details;
        }

        match response.json() {
            Ok(Value::Object(body)) => {
                let output = body.get(response_keys::OUTPUT);
                details.recipe_count = Some(output.and_then(Value::as_array).map_or(0, Vec::len));
                details.has_output = Some(output.is_some());
                details.has_errors = Some(body.contains_key(response_keys::ERRORS));
                details.has_warnings = Some(body.contains_key(response_keys::WARNINGS));
                if let Err(e) = response.recipes() {
                    details.parse_error = Some(e.to_string());
                }
            }
            Ok(_) | Err(_) => {
                details.parse_error = Some("Failed to parse JSON response".to_owned());
            }
        }
        details
    }
}

/// Facade over request building, retrying, fallback, and image lookup
pub struct RecommendationSession {
    config: RecommenderConfig,
    service: Arc<dyn RecommendationService>,
    orchestrator: RetryOrchestrator,
    builder: RequestBuilder,
    fallback: FallbackSelector,
    catalog: IngredientCatalog,
    images: Arc<dyn ImageFinder>,
    state: Arc<RwLock<SessionState>>,
}

impl RecommendationSession {
    /// Session talking HTTP to the configured service
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be built
    pub fn new(config: RecommenderConfig) -> AppResult<Self> {
        config.validate()?;
        let client = ServiceClient::new(&config.service)?;
        Ok(Self::with_service(Arc::new(client), config))
    }

    /// Session over any service implementation
    #[must_use]
    pub fn with_service(service: Arc<dyn RecommendationService>, config: RecommenderConfig) -> Self {
        let orchestrator = RetryOrchestrator::with_sleeper(
            Arc::clone(&service),
            BackoffSchedule::from(&config.retry),
            Arc::new(TokioSleeper),
        );
        Self {
            config,
            service,
            orchestrator,
            builder: RequestBuilder,
            fallback: FallbackSelector::new(),
            catalog: IngredientCatalog,
            images: Arc::new(NoImageFinder),
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Replace the backoff sleeper
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.orchestrator = RetryOrchestrator::with_sleeper(
            Arc::clone(&self.service),
            self.orchestrator.schedule(),
            sleeper,
        );
        self
    }

    /// Replace the image finder
    #[must_use]
    pub fn with_image_finder(mut self, images: Arc<dyn ImageFinder>) -> Self {
        self.images = images;
        self
    }

    /// Replace the fallback catalog
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackSelector) -> Self {
        self.fallback = fallback;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Replace the request inputs; `params` is merged over the defaults
    pub async fn set_request<S: AsRef<str>>(
        &self,
        nutrition_input: NutritionVector,
        ingredients: &[S],
        params: &Map<String, Value>,
    ) {
        let mut state = self.state.write().await;
        state.nutrition_input = nutrition_input;
        state.ingredients = ingredients.iter().map(|s| s.as_ref().to_owned()).collect();
        state.params = RequestParameters::merged(params);
    }

    /// Current request inputs
    pub async fn request_snapshot(&self) -> RequestSnapshot {
        let state = self.state.read().await;
        RequestSnapshot {
            nutrition_input: state.nutrition_input.clone(),
            ingredients: state.ingredients.clone(),
            params: state.params.clone(),
        }
    }

    /// Call the service with the configured attempt budget
    ///
    /// # Errors
    ///
    /// See [`Self::generate_with_attempts`]
    pub async fn generate(&self) -> RecommendationResult<RawResponse> {
        self.generate_with_attempts(self.config.retry.max_attempts)
            .await
    }

    /// Call the service with up to `max_attempts` attempts
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the nutrition input is rejected; no network call is made
    /// - `RetriesExhausted` if no attempt returned status 200
    pub async fn generate_with_attempts(
        &self,
        max_attempts: u32,
    ) -> RecommendationResult<RawResponse> {
        let request = {
            let state = self.state.read().await;
            self.builder
                .build(&state.nutrition_input, &state.ingredients, state.params.as_map())?
        };
        let recorder = ResponseRecorder {
            state: Arc::clone(&self.state),
        };
        self.orchestrator
            .execute(&request, max_attempts, &recorder)
            .await
    }

    /// Service recipes, or fallback recipes on any failure
    pub async fn generate_with_fallback(&self) -> Vec<Recipe> {
        self.recommend().await.recipes
    }

    /// Service recipes, or fallback recipes with the failure recorded
    pub async fn recommend(&self) -> Recommendations {
        let outcome = self
            .generate()
            .await
            .and_then(|response| response.recipes());

        let mut recommendations = match outcome {
            Ok(recipes) => Recommendations {
                recipes,
                source: RecommendationSource::Service,
                failure: None,
            },
            Err(e) => {
                error!(error = %e, kind = e.kind_name(), "Generation failed, using fallback recipes");
                let (ingredients, count) = {
                    let state = self.state.read().await;
                    (
                        IngredientSet::normalize(&state.ingredients),
                        state.params.result_count(),
                    )
                };
                Recommendations {
                    recipes: self.fallback.select(&ingredients, count),
                    source: RecommendationSource::Fallback,
                    failure: Some(e.to_string()),
                }
            }
        };

        attach_images(self.images.as_ref(), &mut recommendations.recipes).await;
        info!(
            count = recommendations.recipes.len(),
            source = ?recommendations.source,
            "Recommendations ready"
        );
        recommendations
    }

    /// Ingredient suggestions for one category, or all of them
    #[must_use]
    pub fn get_ingredient_suggestions(&self, category: Option<&str>) -> Vec<String> {
        self.catalog.suggestions(category)
    }

    /// Every catalog category with its ingredients, in display order
    #[must_use]
    pub fn get_categorized_ingredients(&self) -> Vec<(String, Vec<String>)> {
        self.catalog.categorized()
    }

    /// Probe health and stats. Does not touch the recorded response.
    pub async fn test_connection(&self) -> ConnectionReport {
        let timestamp = Utc::now();
        let budget = self
            .config
            .service
            .probe_timeout()
            .saturating_mul(2)
            .saturating_add(Duration::from_secs(1));

        let probes = async {
            let health_check = self.service.check_health().await;
            let api_stats = self.service.get_stats().await;
            (health_check, api_stats)
        };

        let report = match tokio::time::timeout(budget, probes).await {
            Ok((health_check, api_stats)) => ConnectionReport {
                api_url: self.service.base_url().to_owned(),
                health_check,
                api_stats,
                status: if health_check {
                    ConnectionStatus::Connected
                } else {
                    ConnectionStatus::Unhealthy
                },
                error: None,
                timestamp,
            },
            Err(_) => ConnectionReport {
                api_url: self.service.base_url().to_owned(),
                health_check: false,
                api_stats: Map::new(),
                status: ConnectionStatus::Error,
                error: Some(format!(
                    "connection test did not finish within {}s",
                    budget.as_secs()
                )),
                timestamp,
            },
        };

        if report.status == ConnectionStatus::Connected {
            info!(api_url = %report.api_url, "Connection test passed");
        } else {
            warn!(api_url = %report.api_url, status = %report.status, "Connection test failed");
        }
        report
    }

    /// Statistics of the last recorded response
    pub async fn get_response_stats(&self) -> ResponseStats {
        self.state
            .read()
            .await
            .last_response
            .as_ref()
            .map_or_else(ResponseStats::no_response, |response| {
                ResponseStats::Recorded(ResponseDetails::from_response(response))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            url: "http://127.0.0.1:8000/predict".into(),
            headers: BTreeMap::new(),
            body: body.into(),
            received_at: Utc::now(),
        }
    }

    #[test]
    fn test_details_from_success_body() {
        let details = ResponseDetails::from_response(&raw(
            200,
            r#"{"output": [{}, {}], "warnings": []}"#,
        ));
        assert_eq!(details.recipe_count, Some(2));
        assert_eq!(details.has_output, Some(true));
        assert_eq!(details.has_errors, Some(false));
        assert_eq!(details.has_warnings, Some(true));
        assert!(details.parse_error.is_none());
    }

    #[test]
    fn test_details_skip_body_for_non_success() {
        let details = ResponseDetails::from_response(&raw(503, "busy"));
        assert_eq!(details.status_code, 503);
        assert!(details.recipe_count.is_none());
        assert!(details.parse_error.is_none());
    }

    #[test]
    fn test_details_flag_output_that_is_not_a_recipe_list() {
        let details = ResponseDetails::from_response(&raw(200, r#"{"output": ["Soup", 3]}"#));
        assert_eq!(details.recipe_count, Some(2));
        assert!(details
            .parse_error
            .as_deref()
            .is_some_and(|message| message.contains("not a recipe list")));
    }

    #[test]
    fn test_details_flag_unparseable_success_body() {
        let details = ResponseDetails::from_response(&raw(200, "<html>"));
        assert_eq!(details.parse_error.as_deref(), Some("Failed to parse JSON response"));
    }

    #[test]
    fn test_no_response_serializes_status() {
        let value = serde_json::to_value(ResponseStats::no_response()).unwrap();
        assert_eq!(value["status"], "no_response");
    }
}
