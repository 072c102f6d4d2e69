// ABOUTME: Core data models for recommendation requests and recipes
// ABOUTME: Re-exports nutrition, request, and recipe types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrition schema and target vectors
pub mod nutrition;
/// Recipe records
pub mod recipe;
/// Predict payload models
pub mod request;

pub use nutrition::{NutrientField, NutritionVector, ValidationReport};
pub use recipe::{CookingTime, Recipe};
pub use request::{IngredientSet, RecipeRequest, RequestParameters};
