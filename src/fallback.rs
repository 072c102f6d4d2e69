// ABOUTME: Deterministic local recipe catalog used when the service cannot answer
// ABOUTME: Ingredient-filtered, count-truncated selection that never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::{CookingTime, IngredientSet, Recipe};
use serde_json::Map;
use tracing::{debug, info};

/// Nutrition columns in schema order
type Nutrition = [f64; 9];

fn catalog_recipe(
    name: &str,
    nutrition: Nutrition,
    prep_minutes: f64,
    cook_minutes: f64,
    ingredients: &[&str],
    instructions: &[&str],
) -> Recipe {
    let [calories, fat, saturated_fat, cholesterol, sodium, carbohydrate, fiber, sugar, protein] =
        nutrition;
    Recipe {
        name: name.to_owned(),
        calories,
        fat_content: fat,
        saturated_fat_content: saturated_fat,
        cholesterol_content: cholesterol,
        sodium_content: sodium,
        carbohydrate_content: carbohydrate,
        fiber_content: fiber,
        sugar_content: sugar,
        protein_content: protein,
        prep_time: Some(CookingTime::Minutes(prep_minutes)),
        cook_time: Some(CookingTime::Minutes(cook_minutes)),
        recipe_ingredient_parts: ingredients.iter().map(|s| (*s).to_owned()).collect(),
        recipe_instructions: instructions.iter().map(|s| (*s).to_owned()).collect(),
        image_link: None,
        extra: Map::new(),
    }
}

/// The reference catalog, in selection order
#[must_use]
pub fn reference_catalog() -> Vec<Recipe> {
    vec![
        catalog_recipe(
            "Grilled Chicken Bowl",
            [450.0, 12.0, 3.0, 85.0, 350.0, 40.0, 8.0, 5.0, 35.0],
            15.0,
            20.0,
            &["chicken", "brown rice", "broccoli", "carrot", "soy sauce"],
            &[
                "Grill chicken until cooked through",
                "Cook rice according to package",
                "Steam vegetables",
                "Combine all ingredients in bowl",
                "Add sauce and serve",
            ],
        ),
        catalog_recipe(
            "Vegetable Omelette",
            [320.0, 18.0, 5.0, 370.0, 420.0, 15.0, 4.0, 3.0, 22.0],
            10.0,
            10.0,
            &["egg", "bell pepper", "onion", "spinach", "cheese", "olive oil"],
            &[
                "Chop vegetables",
                "Beat eggs in bowl",
                "Sauté vegetables",
                "Pour eggs over vegetables",
                "Cook until set",
                "Add cheese and fold",
            ],
        ),
        catalog_recipe(
            "Rice & Broccoli",
            [380.0, 8.0, 1.0, 0.0, 280.0, 65.0, 6.0, 2.0, 12.0],
            5.0,
            15.0,
            &["rice", "broccoli", "garlic", "soy sauce", "sesame oil"],
            &[
                "Cook rice",
                "Steam broccoli",
                "Sauté garlic",
                "Combine all ingredients",
                "Season with soy sauce and sesame oil",
            ],
        ),
        catalog_recipe(
            "Chicken Stir-Fry",
            [410.0, 14.0, 2.5, 75.0, 610.0, 30.0, 5.0, 7.0, 33.0],
            15.0,
            10.0,
            &["chicken", "bell pepper", "onion", "garlic", "ginger", "soy sauce"],
            &[
                "Slice chicken and vegetables",
                "Stir-fry chicken until browned",
                "Add vegetables, garlic, and ginger",
                "Toss with soy sauce and serve",
            ],
        ),
        catalog_recipe(
            "Lentil Soup",
            [310.0, 6.0, 1.0, 0.0, 520.0, 48.0, 16.0, 6.0, 18.0],
            10.0,
            35.0,
            &["lentils", "carrot", "onion", "celery", "tomato", "garlic"],
            &[
                "Sauté onion, carrot, and celery",
                "Add garlic and tomato",
                "Add lentils and water",
                "Simmer until lentils are tender",
            ],
        ),
    ]
}

/// Substitute recipe source of last resort
#[derive(Debug, Clone)]
pub struct FallbackSelector {
    catalog: Vec<Recipe>,
}

impl Default for FallbackSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackSelector {
    /// Selector over the reference catalog
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(reference_catalog())
    }

    /// Selector over a caller-provided catalog
    #[must_use]
    pub const fn with_catalog(catalog: Vec<Recipe>) -> Self {
        Self { catalog }
    }

    /// Catalog entries in selection order
    #[must_use]
    pub fn catalog(&self) -> &[Recipe] {
        &self.catalog
    }

    /// Up to `count` recipes sharing at least one ingredient with `ingredients`,
    /// or the first `count` catalog entries when nothing matches or no ingredients
    /// were given. Short results are never padded.
    #[must_use]
    pub fn select(&self, ingredients: &IngredientSet, count: usize) -> Vec<Recipe> {
        if !ingredients.is_empty() {
            let matching: Vec<Recipe> = self
                .catalog
                .iter()
                .filter(|recipe| recipe.uses_any(ingredients.iter()))
                .take(count)
                .cloned()
                .collect();
            if !matching.is_empty() {
                info!(
                    selected = matching.len(),
                    requested = count,
                    "Fallback recipes filtered by ingredients"
                );
                return matching;
            }
            debug!("No fallback recipe matches the ingredients, using full catalog");
        }

        let selected: Vec<Recipe> = self.catalog.iter().take(count).cloned().collect();
        info!(selected = selected.len(), requested = count, "Fallback recipes from full catalog");
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_chicken_filter_returns_only_chicken_recipes() {
        let selector = FallbackSelector::new();
        let picked = selector.select(&IngredientSet::normalize(["Chicken"]), 3);
        assert_eq!(names(&picked), ["Grilled Chicken Bowl", "Chicken Stir-Fry"]);
        assert!(picked.iter().all(|r| r.uses_any(["chicken"])));
    }

    #[test]
    fn test_empty_ingredients_take_catalog_prefix() {
        let picked = FallbackSelector::new().select(&IngredientSet::default(), 2);
        assert_eq!(names(&picked), ["Grilled Chicken Bowl", "Vegetable Omelette"]);
    }

    #[test]
    fn test_no_match_falls_back_to_unfiltered() {
        let picked = FallbackSelector::new().select(&IngredientSet::normalize(["durian"]), 1);
        assert_eq!(names(&picked), ["Grilled Chicken Bowl"]);
    }

    #[test]
    fn test_never_pads_and_tolerates_empty_catalog() {
        let selector = FallbackSelector::new();
        assert_eq!(selector.select(&IngredientSet::default(), 50).len(), selector.catalog().len());
        assert!(selector.select(&IngredientSet::default(), 0).is_empty());
        let empty = FallbackSelector::with_catalog(Vec::new());
        assert!(empty.select(&IngredientSet::normalize(["rice"]), 3).is_empty());
    }
}
