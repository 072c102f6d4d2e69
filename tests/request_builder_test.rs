// ABOUTME: Integration tests for request validation and payload construction
// ABOUTME: Schema length checks, negative-value warnings, normalization, and parameter merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, valid_nutrition};
use recipe_recommender::errors::RecommendationError;
use recipe_recommender::models::{NutrientField, NutritionVector};
use recipe_recommender::request_builder::RequestBuilder;
use serde_json::{json, Map, Value};

fn overrides(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn test_wrong_lengths_are_rejected() {
    init_test_logging();
    let builder = RequestBuilder;
    for len in [0_usize, 1, 8, 10, 18] {
        let vector = NutritionVector::new(vec![1.0; len]);
        assert!(!builder.validate(&vector), "length {len} must be rejected");
        let err = builder.build(&vector, &["rice"], &Map::new()).unwrap_err();
        assert!(matches!(err, RecommendationError::InvalidInput { .. }));
    }
    assert!(builder.validate(&valid_nutrition()));
}

#[test]
fn test_empty_vector_has_specific_diagnostic() {
    let report = RequestBuilder.inspect(&NutritionVector::default());
    assert!(!report.valid);
    assert_eq!(report.diagnostic.as_deref(), Some("Nutrition input is empty"));
}

#[test]
fn test_negative_values_warn_but_pass() {
    init_test_logging();
    let mut values = valid_nutrition().values().to_vec();
    values[NutrientField::SugarContent.index()] = -3.0;
    let vector = NutritionVector::new(values);

    let report = RequestBuilder.inspect(&vector);
    assert!(report.valid);
    assert!(report.has_warnings());
    assert_eq!(report.negative_fields, vec![NutrientField::SugarContent]);
    assert!(RequestBuilder.build(&vector, &[] as &[&str], &Map::new()).is_ok());
}

#[test]
fn test_normalize_is_idempotent() {
    let builder = RequestBuilder;
    let once = builder.normalize(&[" Garlic", "garlic ", "", "TOFU", "  "]);
    assert_eq!(once.to_vec(), vec!["garlic", "tofu"]);
    let twice = builder.normalize(&once.to_vec());
    assert_eq!(once, twice);
}

#[test]
fn test_build_merges_params_over_defaults() {
    let request = RequestBuilder
        .build(
            &valid_nutrition(),
            &["Chicken", "chicken", "Rice"],
            &overrides(json!({"n_neighbors": 3, "algorithm": "ball_tree"})),
        )
        .unwrap();

    assert_eq!(request.ingredients().to_vec(), vec!["chicken", "rice"]);
    assert_eq!(request.params().result_count(), 3);
    assert_eq!(request.params().get("algorithm"), Some(&json!("ball_tree")));
    assert_eq!(request.params().get("random_state"), Some(&json!(42)));
    assert_eq!(request.params().get("return_distance"), Some(&json!(false)));
}
