// ABOUTME: Stateless transport wrapper for the recommendation service health, stats, and predict endpoints
// ABOUTME: Fixed per-call timeouts; probes degrade to defaults, predict surfaces typed transport errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Service Client
//!
//! [`RecommendationService`] is the seam between the orchestration layer and the
//! network. [`ServiceClient`] is the HTTP/JSON implementation:
//!
//! - `GET /health` - liveness probe, any failure reads as unhealthy
//! - `GET /stats` - server statistics, any failure reads as an empty mapping
//! - `POST /predict` - recommendation call, transport failures propagate typed
//!
//! The client classifies nothing beyond "got a response" versus "transport fault";
//! deciding whether to retry belongs to the orchestrator.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use recipe_core::constants::{response_keys, routes, service};
use recipe_core::errors::{AppError, AppResult, RecommendationError, RecommendationResult};
use recipe_core::models::{Recipe, RecipeRequest};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::config::ServiceConfig;

/// A response received from the predict endpoint, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Final request URL
    pub url: String,
    /// Response headers (non-UTF-8 values dropped)
    pub headers: BTreeMap<String, String>,
    /// Raw body text
    pub body: String,
    /// When the response was received
    pub received_at: DateTime<Utc>,
}

impl RawResponse {
    /// Status 200
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Parse the body as JSON
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::ParseFailure` if the body is not valid JSON
    pub fn json(&self) -> RecommendationResult<Value> {
        serde_json::from_str(&self.body)
            .map_err(|e| RecommendationError::parse(format!("response body is not JSON: {e}")))
    }

    /// Parse the recipe list under `output`. A missing `output` key yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::ParseFailure` if the body is not a JSON object
    /// or `output` is not a list of recipes
    pub fn recipes(&self) -> RecommendationResult<Vec<Recipe>> {
        let Value::Object(mut body) = self.json()? else {
            return Err(RecommendationError::parse("response body is not a JSON object"));
        };
        match body.remove(response_keys::OUTPUT) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(output) => serde_json::from_value(output).map_err(|e| {
                RecommendationError::parse(format!("'{}' is not a recipe list: {e}", response_keys::OUTPUT))
            }),
        }
    }
}

/// Operations the orchestration layer needs from the remote service
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Base URL, for reporting
    fn base_url(&self) -> &str;

    /// Liveness probe. Never fails: transport errors and non-success read as `false`.
    async fn check_health(&self) -> bool;

    /// Server statistics. Never fails: any failure reads as an empty mapping.
    async fn get_stats(&self) -> Map<String, Value>;

    /// Issue the recommendation call
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::Transport` when no response was received.
    /// A non-200 response is returned as `Ok`; classifying it is the caller's job.
    async fn predict(&self, request: &RecipeRequest) -> RecommendationResult<RawResponse>;
}

/// HTTP/JSON client for the recommendation service. Holds no session state.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
    health_url: String,
    stats_url: String,
    predict_url: String,
    predict_timeout: Duration,
    probe_timeout: Duration,
}

impl ServiceClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be built
    pub fn new(config: &ServiceConfig) -> AppResult<Self> {
        config.validate()?;

        let http = ClientBuilder::new()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")).with_source(e))?;

        let base_url = config.base_url.trim().trim_end_matches('/').to_owned();

        Ok(Self {
            http,
            health_url: format!("{base_url}{}", routes::HEALTH),
            stats_url: format!("{base_url}{}", routes::STATS),
            predict_url: format!("{base_url}{}", routes::PREDICT),
            base_url,
            predict_timeout: config.predict_timeout(),
            probe_timeout: config.probe_timeout(),
        })
    }

    /// Full predict endpoint URL
    #[must_use]
    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl RecommendationService for ServiceClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn check_health(&self) -> bool {
        match self
            .http
            .get(&self.health_url)
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                debug!(status = status.as_u16(), "Health check response");
                status == StatusCode::OK
            }
            Err(e) => {
                error!(service = service::SERVICE_NAME, error = %e, "Health check failed");
                false
            }
        }
    }

    async fn get_stats(&self) -> Map<String, Value> {
        let response = match self
            .http
            .get(&self.stats_url)
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(service = service::SERVICE_NAME, error = %e, "Failed to get stats");
                return Map::new();
            }
        };

        if response.status() != StatusCode::OK {
            warn!(status = response.status().as_u16(), "Stats endpoint returned non-success status");
            return Map::new();
        }

        response.json::<Map<String, Value>>().await.unwrap_or_else(|e| {
            warn!(error = %e, "Stats response is not a JSON object");
            Map::new()
        })
    }

    async fn predict(&self, request: &RecipeRequest) -> RecommendationResult<RawResponse> {
        let response = self
            .http
            .post(&self.predict_url)
            .timeout(self.predict_timeout)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let failure = RecommendationError::from(e);
                error!(service = service::SERVICE_NAME, error = %failure, "Predict request failed");
                failure
            })?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_owned(), value.to_owned()))
            })
            .collect();
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            url,
            headers,
            body,
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(body: &str) -> RawResponse {
        RawResponse {
            status: 200,
            url: "http://127.0.0.1:8000/predict".into(),
            headers: BTreeMap::new(),
            body: body.into(),
            received_at: Utc::now(),
        }
    }

    #[test]
    fn test_recipes_parse_output_list() {
        let response = response_with(r#"{"output": [{"Name": "Soup", "Calories": 120}]}"#);
        let recipes = response.recipes().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Soup");
    }

    #[test]
    fn test_recipes_missing_output_is_empty() {
        assert!(response_with(r#"{"warnings": []}"#).recipes().unwrap().is_empty());
    }

    #[test]
    fn test_recipes_reject_malformed_bodies() {
        assert!(matches!(
            response_with("<html>").recipes(),
            Err(RecommendationError::ParseFailure { .. })
        ));
        assert!(matches!(
            response_with("[1, 2]").recipes(),
            Err(RecommendationError::ParseFailure { .. })
        ));
        assert!(matches!(
            response_with(r#"{"output": "none"}"#).recipes(),
            Err(RecommendationError::ParseFailure { .. })
        ));
    }

    #[test]
    fn test_client_builds_route_urls() {
        let client = ServiceClient::new(&ServiceConfig::with_base_url("http://localhost:9000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.predict_url(), "http://localhost:9000/predict");
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        assert!(ServiceClient::new(&ServiceConfig::with_base_url("not a url")).is_err());
        assert!(ServiceClient::new(&ServiceConfig::with_base_url("ftp://host")).is_err());
    }
}
