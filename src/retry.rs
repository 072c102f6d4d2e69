// ABOUTME: Bounded retry loop with exponential backoff around the predict call
// ABOUTME: Owns outcome classification, attempt counting, and the injectable sleep schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Retry Orchestration
//!
//! Each attempt's outcome is classified as one of:
//!
//! - **Success** (status 200) - returned immediately
//! - **Server error** (any other status, body received) - next attempt starts at once
//! - **Transport failure** (no response) - wait `unit * 2^attempt_index` before the
//!   next attempt; no wait after the final attempt
//!
//! Whether a failure is retried, and whether it waits first, is decided by
//! `RecommendationError::is_retryable` and `RecommendationError::requires_backoff`.
//! A failure that is not retryable ends the execution at once and is returned as-is.
//!
//! Attempts run strictly in sequence. After the budget is spent the execution fails
//! with `RetriesExhausted`, carrying the final attempt's failure as its source.

use async_trait::async_trait;
use recipe_core::errors::{RecommendationError, RecommendationResult};
use recipe_core::models::RecipeRequest;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::client::{RawResponse, RecommendationService};
use crate::config::RetryConfig;

/// Suspends the retry loop between attempts
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Real wall-clock sleeper
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Notified of every attempt that produced a response, success or not
#[async_trait]
pub trait AttemptObserver: Send + Sync {
    /// Called once per received response, before classification
    async fn on_response(&self, response: &RawResponse);
}

/// Observer that ignores responses
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

#[async_trait]
impl AttemptObserver for NoopObserver {
    async fn on_response(&self, _response: &RawResponse) {}
}

/// Delay before the attempt following zero-based attempt `i`: `unit * 2^i`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffSchedule {
    unit: Duration,
}

impl BackoffSchedule {
    /// Schedule with the given time unit
    #[must_use]
    pub const fn new(unit: Duration) -> Self {
        Self { unit }
    }

    /// Delay after a transport failure on zero-based attempt `attempt_index`
    #[must_use]
    pub fn delay_for(&self, attempt_index: u32) -> Duration {
        self.unit.saturating_mul(2_u32.saturating_pow(attempt_index))
    }
}

impl From<&RetryConfig> for BackoffSchedule {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.backoff_unit())
    }
}

/// Drives the predict call through the bounded retry loop
pub struct RetryOrchestrator {
    service: Arc<dyn RecommendationService>,
    sleeper: Arc<dyn Sleeper>,
    schedule: BackoffSchedule,
}

impl RetryOrchestrator {
    /// Orchestrator sleeping on the tokio timer
    #[must_use]
    pub fn new(service: Arc<dyn RecommendationService>, schedule: BackoffSchedule) -> Self {
        Self::with_sleeper(service, schedule, Arc::new(TokioSleeper))
    }

    /// Orchestrator with an injected sleeper
    #[must_use]
    pub fn with_sleeper(
        service: Arc<dyn RecommendationService>,
        schedule: BackoffSchedule,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            service,
            sleeper,
            schedule,
        }
    }

    /// Backoff schedule in use
    #[must_use]
    pub const fn schedule(&self) -> BackoffSchedule {
        self.schedule
    }

    /// Run up to `max_attempts` predict calls
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `max_attempts` is zero
    /// - A non-retryable failure from the service, unchanged
    /// - `RetriesExhausted` once every attempt has failed; its source is the final
    ///   attempt's server error or transport failure
    pub async fn execute(
        &self,
        request: &RecipeRequest,
        max_attempts: u32,
        observer: &dyn AttemptObserver,
    ) -> RecommendationResult<RawResponse> {
        if max_attempts == 0 {
            return Err(RecommendationError::invalid_input(
                "max_attempts must be at least 1",
            ));
        }

        let mut last_status = None;
        let mut last_failure = None;

        for attempt in 0..max_attempts {
            info!(
                attempt = attempt + 1,
                max_attempts,
                requested = request.params().result_count(),
                "Requesting recommendations"
            );

            let failure = match self.attempt(request, observer).await {
                Ok(response) => {
                    match response.recipes() {
                        Ok(recipes) => info!(
                            attempt = attempt + 1,
                            received = recipes.len(),
                            "Successfully received recommendations"
                        ),
                        Err(e) => warn!(
                            attempt = attempt + 1,
                            error = %e,
                            "Received success status with an unreadable body"
                        ),
                    }
                    return Ok(response);
                }
                Err(failure) => failure,
            };

            if let RecommendationError::ServerError { status, .. } = &failure {
                warn!(attempt = attempt + 1, status, "Service returned non-success status");
                last_status = Some(*status);
            } else {
                error!(attempt = attempt + 1, error = %failure, "Request failed on attempt");
            }

            if !failure.is_retryable() {
                return Err(failure);
            }
            if failure.requires_backoff() && attempt + 1 < max_attempts {
                let delay = self.schedule.delay_for(attempt);
                info!(
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "Waiting before retry"
                );
                self.sleeper.sleep(delay).await;
            }
            last_failure = Some(failure);
        }

        error!(max_attempts, ?last_status, "Retries exhausted");
        Err(RecommendationError::RetriesExhausted {
            attempts: max_attempts,
            last_status,
            source: last_failure.map(Box::new),
        })
    }

    /// One predict call; a received non-200 response becomes `ServerError`
    async fn attempt(
        &self,
        request: &RecipeRequest,
        observer: &dyn AttemptObserver,
    ) -> RecommendationResult<RawResponse> {
        let response = self.service.predict(request).await?;
        observer.on_response(&response).await;
        if response.is_success() {
            Ok(response)
        } else {
            Err(RecommendationError::ServerError {
                status: response.status,
                body: response.body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_doubles_per_attempt() {
        let schedule = BackoffSchedule::new(Duration::from_secs(1));
        assert_eq!(schedule.delay_for(0), Duration::from_secs(1));
        assert_eq!(schedule.delay_for(1), Duration::from_secs(2));
        assert_eq!(schedule.delay_for(2), Duration::from_secs(4));
    }

    #[test]
    fn test_delay_saturates_instead_of_overflowing() {
        let schedule = BackoffSchedule::new(Duration::from_secs(1));
        assert_eq!(schedule.delay_for(64), Duration::from_secs(u64::from(u32::MAX)));
    }
}
