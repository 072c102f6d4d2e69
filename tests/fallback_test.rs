// ABOUTME: Integration tests for the fallback selector
// ABOUTME: Ingredient filtering, truncation, and unfiltered fallthrough over the reference catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_recommender::fallback::{reference_catalog, FallbackSelector};
use recipe_recommender::models::{IngredientSet, Recipe};

fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        name: name.into(),
        recipe_ingredient_parts: ingredients.iter().map(|s| (*s).to_owned()).collect(),
        ..Recipe::default()
    }
}

#[test]
fn test_chicken_selection_contains_only_chicken() {
    let picked = FallbackSelector::new().select(&IngredientSet::normalize(["chicken"]), 3);
    assert!(!picked.is_empty() && picked.len() <= 3);
    for recipe in &picked {
        assert!(
            recipe.recipe_ingredient_parts.iter().any(|part| part == "chicken"),
            "{} has no chicken",
            recipe.name
        );
    }
}

#[test]
fn test_no_ingredients_returns_catalog_prefix() {
    let catalog = reference_catalog();
    let picked = FallbackSelector::new().select(&IngredientSet::default(), 2);
    assert_eq!(picked, catalog[..2].to_vec());
}

#[test]
fn test_matching_is_case_insensitive_on_recipe_side() {
    let selector = FallbackSelector::with_catalog(vec![
        recipe("Plain", &["Water"]),
        recipe("Spiced", &["Cumin", "Rice"]),
    ]);
    let picked = selector.select(&IngredientSet::normalize(["RICE"]), 5);
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].name, "Spiced");
}

#[test]
fn test_filter_truncates_to_count() {
    let selector = FallbackSelector::with_catalog(vec![
        recipe("A", &["rice"]),
        recipe("B", &["beans"]),
        recipe("C", &["rice"]),
        recipe("D", &["rice"]),
    ]);
    let picked = selector.select(&IngredientSet::normalize(["rice"]), 2);
    let names: Vec<&str> = picked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
}

#[test]
fn test_catalog_recipes_carry_full_nutrition() {
    for recipe in reference_catalog() {
        assert!(recipe.calories > 0.0, "{}", recipe.name);
        assert!(!recipe.recipe_ingredient_parts.is_empty());
        assert!(!recipe.recipe_instructions.is_empty());
        assert!(recipe.prep_time.is_some() && recipe.cook_time.is_some());
    }
}
