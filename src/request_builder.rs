// ABOUTME: Validates and normalizes raw user input into a predict payload
// ABOUTME: Fails fast with InvalidInput before any network activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::errors::{RecommendationError, RecommendationResult};
use recipe_core::models::{
    IngredientSet, NutritionVector, RecipeRequest, RequestParameters, ValidationReport,
};
use serde_json::{Map, Value};
use tracing::{error, warn};

/// Turns raw nutrition targets, ingredient names, and parameter overrides into a
/// [`RecipeRequest`]. Never substitutes data for invalid input.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBuilder;

impl RequestBuilder {
    /// Whether the vector may be sent; logs the diagnostic either way
    #[must_use]
    pub fn validate(&self, vector: &NutritionVector) -> bool {
        self.inspect(vector).valid
    }

    /// Full validation report, logged at error (rejected) or warn (negative values)
    #[must_use]
    pub fn inspect(&self, vector: &NutritionVector) -> ValidationReport {
        let report = vector.validate();
        match (&report.diagnostic, report.valid) {
            (Some(diagnostic), false) => error!(%diagnostic, "Rejected nutrition input"),
            (Some(diagnostic), true) => warn!(
                %diagnostic,
                fields = ?report.negative_fields,
                "Nutrition input has negative values"
            ),
            (None, _) => {}
        }
        report
    }

    /// Trim, lowercase, drop empties, deduplicate
    #[must_use]
    pub fn normalize<S: AsRef<str>>(&self, ingredients: &[S]) -> IngredientSet {
        IngredientSet::normalize(ingredients)
    }

    /// Build the payload, merging `params` over the default parameter set
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::InvalidInput` when the vector is empty or its
    /// length differs from the schema
    pub fn build<S: AsRef<str>>(
        &self,
        vector: &NutritionVector,
        ingredients: &[S],
        params: &Map<String, Value>,
    ) -> RecommendationResult<RecipeRequest> {
        let report = self.inspect(vector);
        if !report.valid {
            return Err(RecommendationError::invalid_input(
                report
                    .diagnostic
                    .unwrap_or_else(|| "Invalid nutrition input format".to_owned()),
            ));
        }
        RecipeRequest::new(
            vector.clone(),
            self.normalize(ingredients),
            RequestParameters::merged(params),
        )
    }
}
