// ABOUTME: Request payload models for the predict call
// ABOUTME: IngredientSet normalization, RequestParameters merging, and the immutable RecipeRequest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::params::{
    ALGORITHM, DEFAULT_ALGORITHM, DEFAULT_N_NEIGHBORS, DEFAULT_RANDOM_STATE, N_NEIGHBORS,
    RANDOM_STATE, RETURN_DISTANCE,
};
use crate::errors::{RecommendationError, RecommendationResult};
use crate::models::nutrition::NutritionVector;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Lowercase, trimmed, deduplicated ingredient names with no empty entries.
///
/// Iteration order is sorted so that payloads are stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientSet(BTreeSet<String>);

impl IngredientSet {
    /// Normalize raw names into a set
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            raw.into_iter()
                .map(|name| name.as_ref().trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Whether the set holds no ingredients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Owned copy as a vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

/// Algorithm tuning options sent with the predict call.
///
/// Always produced by merging caller overrides over [`RequestParameters::defaults`];
/// the defaults themselves are rebuilt on each call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParameters(Map<String, Value>);

impl RequestParameters {
    /// Base parameter set
    #[must_use]
    pub fn defaults() -> Self {
        let mut base = Map::new();
        base.insert(N_NEIGHBORS.to_owned(), Value::from(DEFAULT_N_NEIGHBORS));
        base.insert(RETURN_DISTANCE.to_owned(), Value::Bool(false));
        base.insert(RANDOM_STATE.to_owned(), Value::from(DEFAULT_RANDOM_STATE));
        base.insert(ALGORITHM.to_owned(), Value::from(DEFAULT_ALGORITHM));
        Self(base)
    }

    /// Defaults, then overrides: caller keys win, unspecified keys keep defaults
    #[must_use]
    pub fn merged(overrides: &Map<String, Value>) -> Self {
        let mut merged = Self::defaults().0;
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
        Self(merged)
    }

    /// Requested number of recipes
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.0
            .get(N_NEIGHBORS)
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(DEFAULT_N_NEIGHBORS as usize)
    }

    /// Copy with a different result count
    #[must_use]
    pub fn with_result_count(mut self, count: usize) -> Self {
        self.0.insert(N_NEIGHBORS.to_owned(), Value::from(count));
        self
    }

    /// Copy with or without the deterministic seed
    #[must_use]
    pub fn with_randomness(mut self, randomize: bool) -> Self {
        if randomize {
            self.0.remove(RANDOM_STATE);
        } else {
            self.0
                .insert(RANDOM_STATE.to_owned(), Value::from(DEFAULT_RANDOM_STATE));
        }
        self
    }

    /// Look up a single parameter
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Underlying map
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Default for RequestParameters {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Immutable predict payload. Replaced, never mutated, once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeRequest {
    nutrition_input: NutritionVector,
    ingredients: IngredientSet,
    params: RequestParameters,
}

impl RecipeRequest {
    /// Package validated parts into a request
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::InvalidInput` if the nutrition vector is empty
    /// or does not match the schema length.
    pub fn new(
        nutrition_input: NutritionVector,
        ingredients: IngredientSet,
        params: RequestParameters,
    ) -> RecommendationResult<Self> {
        let report = nutrition_input.validate();
        if !report.valid {
            return Err(RecommendationError::invalid_input(
                report
                    .diagnostic
                    .unwrap_or_else(|| "Invalid nutrition input format".to_owned()),
            ));
        }
        Ok(Self {
            nutrition_input,
            ingredients,
            params,
        })
    }

    /// Nutrition targets
    #[must_use]
    pub const fn nutrition_input(&self) -> &NutritionVector {
        &self.nutrition_input
    }

    /// Normalized ingredients
    #[must_use]
    pub const fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    /// Merged parameters
    #[must_use]
    pub const fn params(&self) -> &RequestParameters {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_trims_lowercases_and_dedups() {
        let set = IngredientSet::normalize(["  Chicken ", "chicken", "", "   ", "RICE"]);
        assert_eq!(set.to_vec(), vec!["chicken".to_owned(), "rice".to_owned()]);
    }

    #[test]
    fn test_merge_overrides_only_given_keys() {
        let overrides = json!({"n_neighbors": 3, "extra": "x"});
        let Value::Object(map) = overrides else {
            unreachable!("literal is an object")
        };
        let params = RequestParameters::merged(&map);
        assert_eq!(params.result_count(), 3);
        assert_eq!(params.get(RANDOM_STATE), Some(&json!(42)));
        assert_eq!(params.get(ALGORITHM), Some(&json!("auto")));
        assert_eq!(params.get("extra"), Some(&json!("x")));
        assert_eq!(RequestParameters::defaults().result_count(), 5);
    }

    #[test]
    fn test_randomness_toggles_seed() {
        let randomized = RequestParameters::defaults().with_randomness(true);
        assert!(randomized.get(RANDOM_STATE).is_none());
        let pinned = randomized.with_randomness(false);
        assert_eq!(pinned.get(RANDOM_STATE), Some(&json!(42)));
    }

    #[test]
    fn test_request_serializes_wire_shape() {
        let request = RecipeRequest::new(
            NutritionVector::default_targets(),
            IngredientSet::normalize(["Rice"]),
            RequestParameters::defaults(),
        )
        .unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["nutrition_input"].as_array().map(Vec::len), Some(9));
        assert_eq!(body["ingredients"], json!(["rice"]));
        assert_eq!(body["params"]["n_neighbors"], json!(5));
    }

    #[test]
    fn test_request_rejects_invalid_vector() {
        let err = RecipeRequest::new(
            NutritionVector::new(vec![1.0, 2.0]),
            IngredientSet::default(),
            RequestParameters::defaults(),
        )
        .unwrap_err();
        assert!(matches!(err, RecommendationError::InvalidInput { .. }));
    }
}
