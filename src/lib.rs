// ABOUTME: Main library entry point for the recipe recommendation client
// ABOUTME: Validated requests, bounded retries with backoff, and a deterministic local fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Recipe Recommender
//!
//! Client-side orchestration for a remote recipe recommendation service. Turns
//! nutrition targets and preferred ingredients into predict calls, retries them
//! with exponential backoff, and substitutes a local catalog when the service
//! cannot answer.
//!
//! ## Architecture
//!
//! - **`request_builder`**: validation and normalization before any network call
//! - **`client`**: stateless HTTP transport for health, stats, and predict
//! - **`retry`**: bounded attempt loop and backoff schedule
//! - **`fallback`**: ingredient-filtered substitute recipes
//! - **`session`**: the facade owning request inputs and the last response
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_recommender::config::RecommenderConfig;
//! use recipe_recommender::errors::AppResult;
//! use recipe_recommender::models::NutritionVector;
//! use recipe_recommender::session::RecommendationSession;
//! use serde_json::Map;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let session = RecommendationSession::new(RecommenderConfig::from_env()?)?;
//!     session
//!         .set_request(NutritionVector::default_targets(), &["chicken", "rice"], &Map::new())
//!         .await;
//!
//!     for recipe in session.generate_with_fallback().await {
//!         println!("{} ({} kcal)", recipe.name, recipe.calories);
//!     }
//!     Ok(())
//! }
//! ```

/// Static ingredient catalog for suggestions
pub mod catalog;

/// Recommendation service transport
pub mod client;

/// Environment-driven configuration
pub mod config;

/// Local substitute recipes
pub mod fallback;

/// Recipe image lookup
pub mod images;

/// Structured logging setup
pub mod logging;

/// Input validation and payload construction
pub mod request_builder;

/// Retry loop and backoff schedule
pub mod retry;

/// Session facade
pub mod session;

/// Schema, routes, defaults, and environment keys
pub use recipe_core::constants;
/// Error taxonomy and application errors
pub use recipe_core::errors;
/// Request and recipe models
pub use recipe_core::models;
