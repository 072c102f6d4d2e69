// ABOUTME: Network configuration for the recommendation service client and retry loop
// ABOUTME: Handles base URL, per-call timeouts, attempt budget, and backoff unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::{env_keys, retry, service, timeouts};
use recipe_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Recommendation service endpoint and per-call timeouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service (routes are appended)
    pub base_url: String,
    /// Predict call timeout in seconds
    pub predict_timeout_secs: u64,
    /// Health and stats call timeout in seconds
    pub probe_timeout_secs: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: service::DEFAULT_BASE_URL.to_owned(),
            predict_timeout_secs: timeouts::PREDICT_TIMEOUT_SECS,
            probe_timeout_secs: timeouts::PROBE_TIMEOUT_SECS,
            connect_timeout_secs: timeouts::CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// Config pointing at a specific base URL with default timeouts
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load service configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            base_url: env_var_or(env_keys::API_URL, service::DEFAULT_BASE_URL),
            predict_timeout_secs: parse_env(
                env_keys::PREDICT_TIMEOUT_SECS,
                timeouts::PREDICT_TIMEOUT_SECS,
            )?,
            probe_timeout_secs: parse_env(
                env_keys::PROBE_TIMEOUT_SECS,
                timeouts::PROBE_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_env(
                env_keys::CONNECT_TIMEOUT_SECS,
                timeouts::CONNECT_TIMEOUT_SECS,
            )?,
        })
    }

    /// Check the base URL and timeouts
    ///
    /// # Errors
    ///
    /// Returns an error for an unparseable base URL or a zero timeout
    pub fn validate(&self) -> AppResult<()> {
        self.parsed_base_url()?;
        if self.predict_timeout_secs == 0
            || self.probe_timeout_secs == 0
            || self.connect_timeout_secs == 0
        {
            return Err(AppError::config("Service timeouts must be greater than zero"));
        }
        Ok(())
    }

    /// Parsed base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or not an absolute http(s) URL
    pub fn parsed_base_url(&self) -> AppResult<Url> {
        let url = Url::parse(self.base_url.trim()).map_err(|e| {
            AppError::config(format!("Invalid {} '{}': {e}", env_keys::API_URL, self.base_url))
                .with_source(e)
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "{} must use http or https, got '{}'",
                env_keys::API_URL,
                url.scheme()
            )));
        }
        Ok(url)
    }

    /// Predict timeout
    #[must_use]
    pub const fn predict_timeout(&self) -> Duration {
        Duration::from_secs(self.predict_timeout_secs)
    }

    /// Health/stats timeout
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Attempt budget and backoff schedule for the predict call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts per execution, including the first
    pub max_attempts: u32,
    /// One backoff time unit in milliseconds; attempt `i` waits `unit * 2^i`
    pub backoff_unit_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: retry::DEFAULT_MAX_ATTEMPTS,
            backoff_unit_ms: retry::DEFAULT_BACKOFF_UNIT_MS,
        }
    }
}

impl RetryConfig {
    /// Load retry configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            max_attempts: parse_env(env_keys::MAX_ATTEMPTS, retry::DEFAULT_MAX_ATTEMPTS)?,
            backoff_unit_ms: parse_env(env_keys::BACKOFF_UNIT_MS, retry::DEFAULT_BACKOFF_UNIT_MS)?,
        })
    }

    /// Reject an empty attempt budget
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.max_attempts == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_keys::MAX_ATTEMPTS
            )));
        }
        Ok(())
    }

    /// One backoff time unit
    #[must_use]
    pub const fn backoff_unit(&self) -> Duration {
        Duration::from_millis(self.backoff_unit_ms)
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
