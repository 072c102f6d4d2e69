// ABOUTME: Offline catalog commands for recipe-cli
// ABOUTME: Ingredient suggestions, category listing, and the nutrition schema table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_recommender::catalog::IngredientCatalog;
use recipe_recommender::models::{NutrientField, NutritionVector};

pub fn suggest(category: Option<&str>) {
    let suggestions = IngredientCatalog.suggestions(category);
    if suggestions.is_empty() {
        println!("No ingredients found for category {:?}", category.unwrap_or_default());
        println!("Known categories: {}", IngredientCatalog.category_names().join(", "));
        return;
    }
    for name in suggestions {
        println!("{name}");
    }
}

pub fn categories() {
    for (name, items) in IngredientCatalog.categorized() {
        println!("{name} ({} ingredients)", items.len());
    }
    println!("\nCommon: {}", IngredientCatalog.common_ingredients().join(", "));
}

pub fn schema() {
    let defaults = NutritionVector::default_targets();
    println!("{:<3} {:<22} {:<5} {:>9} {:>14}", "#", "Field", "Unit", "Default", "Range");
    for field in NutrientField::ALL {
        let (low, high) = field.suggested_range();
        println!(
            "{:<3} {:<22} {:<5} {:>9} {:>14}",
            field.index() + 1,
            field.label(),
            field.unit(),
            defaults.get(field).unwrap_or_default(),
            format!("{low}-{high}"),
        );
    }
}
