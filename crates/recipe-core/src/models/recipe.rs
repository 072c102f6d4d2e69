// ABOUTME: Recipe record returned by the recommendation service or the local fallback
// ABOUTME: Wire-compatible PascalCase fields; null or mistyped values decode to empty defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::nutrition::NutrientField;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Prep or cook time as the service reports it
///
/// The service may send plain minutes or an ISO-8601 duration string (`PT15M`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CookingTime {
    /// Minutes
    Minutes(f64),
    /// Unparsed textual duration
    Text(String),
}

impl fmt::Display for CookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(minutes) => write!(f, "{minutes} min"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A recommended recipe.
///
/// Nutrition fields cover the full schema; anything else the service sends is kept
/// in `extra` so the record stays a superset of what was received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    /// Recipe name
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// Energy (kcal)
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: f64,
    /// Total fat (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub fat_content: f64,
    /// Saturated fat (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub saturated_fat_content: f64,
    /// Cholesterol (mg)
    #[serde(default, deserialize_with = "lenient_number")]
    pub cholesterol_content: f64,
    /// Sodium (mg)
    #[serde(default, deserialize_with = "lenient_number")]
    pub sodium_content: f64,
    /// Carbohydrates (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub carbohydrate_content: f64,
    /// Fiber (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub fiber_content: f64,
    /// Sugar (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub sugar_content: f64,
    /// Protein (g)
    #[serde(default, deserialize_with = "lenient_number")]
    pub protein_content: f64,
    /// Preparation time
    #[serde(
        default,
        deserialize_with = "lenient_cooking_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub prep_time: Option<CookingTime>,
    /// Cooking time
    #[serde(
        default,
        deserialize_with = "lenient_cooking_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub cook_time: Option<CookingTime>,
    /// Ingredient names, in recipe order
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub recipe_ingredient_parts: Vec<String>,
    /// Instruction steps, in order
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub recipe_instructions: Vec<String>,
    /// Display image, attached after retrieval
    #[serde(
        rename = "image_link",
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_link: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Numbers pass through, numeric strings are parsed, anything else reads as zero
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().unwrap_or_default(),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or_default(),
        _ => 0.0,
    })
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?).filter(|text| !text.is_empty()))
}

/// A list keeps its scalar entries; a lone string becomes a one-entry list
fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(text_of).collect(),
        Value::String(text) => vec![text],
        _ => Vec::new(),
    })
}

fn lenient_cooking_time<'de, D>(deserializer: D) -> Result<Option<CookingTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().map(CookingTime::Minutes),
        Value::String(text) => Some(CookingTime::Text(text)),
        _ => None,
    })
}

impl Recipe {
    /// Value of one schema field
    #[must_use]
    pub const fn nutrient(&self, field: NutrientField) -> f64 {
        match field {
            NutrientField::Calories => self.calories,
            NutrientField::FatContent => self.fat_content,
            NutrientField::SaturatedFatContent => self.saturated_fat_content,
            NutrientField::CholesterolContent => self.cholesterol_content,
            NutrientField::SodiumContent => self.sodium_content,
            NutrientField::CarbohydrateContent => self.carbohydrate_content,
            NutrientField::FiberContent => self.fiber_content,
            NutrientField::SugarContent => self.sugar_content,
            NutrientField::ProteinContent => self.protein_content,
        }
    }

    /// Whether any of the recipe's ingredients is in `wanted` (case-insensitive)
    pub fn uses_any<'a, I>(&self, wanted: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let own: Vec<String> = self
            .recipe_ingredient_parts
            .iter()
            .map(|part| part.trim().to_lowercase())
            .collect();
        wanted
            .into_iter()
            .any(|name| own.iter().any(|part| part == name))
    }
}
