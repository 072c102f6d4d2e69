// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Recipe cards, connection reports, and pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_recommender::errors::AppResult;
use recipe_recommender::models::{NutrientField, Recipe};
use recipe_recommender::session::ConnectionReport;
use serde::Serialize;

/// Pretty-print any serializable value to stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display recipes as numbered cards
pub fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }
    for (index, recipe) in recipes.iter().enumerate() {
        println!("\n{}. {}", index + 1, recipe.name);
        println!("{}", "=".repeat(60));
        let times: Vec<String> = [("Prep", &recipe.prep_time), ("Cook", &recipe.cook_time)]
            .into_iter()
            .filter_map(|(label, time)| time.as_ref().map(|t| format!("{label}: {t}")))
            .collect();
        if !times.is_empty() {
            println!("   {}", times.join("   "));
        }
        for field in NutrientField::ALL {
            println!(
                "   {:<14} {:>8.1} {}",
                field.display_name(),
                recipe.nutrient(field),
                field.unit()
            );
        }
        if !recipe.recipe_ingredient_parts.is_empty() {
            println!("   Ingredients: {}", recipe.recipe_ingredient_parts.join(", "));
        }
        for (step, instruction) in recipe.recipe_instructions.iter().enumerate() {
            println!("   {}. {instruction}", step + 1);
        }
        if let Some(link) = &recipe.image_link {
            println!("   Image: {link}");
        }
    }
}

/// Display a connection test result
pub fn print_connection_report(report: &ConnectionReport) {
    println!("Service:  {}", report.api_url);
    println!("Status:   {}", report.status);
    println!("Health:   {}", if report.health_check { "ok" } else { "failing" });
    println!("Checked:  {}", report.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
    if let Some(error) = &report.error {
        println!("Error:    {error}");
    }
    if !report.api_stats.is_empty() {
        println!("Stats:");
        for (key, value) in &report.api_stats {
            println!("   {key}: {value}");
        }
    }
}
