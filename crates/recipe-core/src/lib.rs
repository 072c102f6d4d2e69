// ABOUTME: Core types and constants for the recipe recommendation client
// ABOUTME: Foundation crate with error handling, nutrition schema, and request/recipe models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! recommendation client. It holds no I/O and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `RecommendationError` taxonomy
//! - **constants**: Nutrition schema order, default parameters, routes, timeouts
//! - **models**: Nutrition vectors, ingredient sets, request payloads, recipes

/// Unified error handling system
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (nutrition, ingredients, requests, recipes)
pub mod models;
