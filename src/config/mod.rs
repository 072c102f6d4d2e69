// ABOUTME: Configuration management module for the recommendation client
// ABOUTME: Environment-only service, retry, and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is read from environment variables only. Every value has a default,
//! so an empty environment produces a working client against a local service.

use recipe_core::errors::AppResult;
use tracing::info;

/// Service endpoint, timeouts, and retry schedule
pub mod network;

pub use network::{RetryConfig, ServiceConfig};

/// Everything a recommendation session needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// Remote service settings
    pub service: ServiceConfig,
    /// Retry loop settings
    pub retry: RetryConfig,
}

impl RecommenderConfig {
    /// Load and validate all settings from environment
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is malformed or the result fails validation
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            service: ServiceConfig::from_env()?,
            retry: RetryConfig::from_env()?,
        };
        config.validate()?;
        info!(
            base_url = %config.service.base_url,
            max_attempts = config.retry.max_attempts,
            backoff_unit_ms = config.retry.backoff_unit_ms,
            "Recommender configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> AppResult<()> {
        self.service.validate()?;
        self.retry.validate()
    }
}
