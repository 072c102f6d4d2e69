// ABOUTME: Nutrition schema fields and the positional nutrition target vector
// ABOUTME: NutrientField metadata, NutritionVector, and validation reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::{DEFAULT_TARGETS, FIELD_NAMES, SCHEMA_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One field of the nutrition schema, in service order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientField {
    /// Energy (kcal)
    Calories,
    /// Total fat (g)
    FatContent,
    /// Saturated fat (g)
    SaturatedFatContent,
    /// Cholesterol (mg)
    CholesterolContent,
    /// Sodium (mg)
    SodiumContent,
    /// Carbohydrates (g)
    CarbohydrateContent,
    /// Fiber (g)
    FiberContent,
    /// Sugar (g)
    SugarContent,
    /// Protein (g)
    ProteinContent,
}

impl NutrientField {
    /// All fields in positional order
    pub const ALL: [Self; SCHEMA_LEN] = [
        Self::Calories,
        Self::FatContent,
        Self::SaturatedFatContent,
        Self::CholesterolContent,
        Self::SodiumContent,
        Self::CarbohydrateContent,
        Self::FiberContent,
        Self::SugarContent,
        Self::ProteinContent,
    ];

    /// Position of this field inside a nutrition vector
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire name used by the service (e.g. `SaturatedFatContent`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        FIELD_NAMES[self.index()]
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::FatContent => "Total Fat",
            Self::SaturatedFatContent => "Saturated Fat",
            Self::CholesterolContent => "Cholesterol",
            Self::SodiumContent => "Sodium",
            Self::CarbohydrateContent => "Carbohydrates",
            Self::FiberContent => "Fiber",
            Self::SugarContent => "Sugar",
            Self::ProteinContent => "Protein",
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::CholesterolContent | Self::SodiumContent => "mg",
            _ => "g",
        }
    }

    /// Input bounds offered to users (inclusive)
    #[must_use]
    pub const fn suggested_range(self) -> (f64, f64) {
        match self {
            Self::Calories => (0.0, 2000.0),
            Self::FatContent | Self::ProteinContent => (0.0, 100.0),
            Self::SaturatedFatContent | Self::FiberContent => (0.0, 50.0),
            Self::CholesterolContent => (0.0, 300.0),
            Self::SodiumContent => (0.0, 2300.0),
            Self::CarbohydrateContent => (0.0, 325.0),
            Self::SugarContent => (0.0, 40.0),
        }
    }
}

impl fmt::Display for NutrientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Positional nutrition targets, bound to [`NutrientField::ALL`] order.
///
/// Construction is unchecked so that callers can hold whatever the user typed;
/// [`NutritionVector::validate`] decides whether it may be sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutritionVector(Vec<f64>);

impl NutritionVector {
    /// Wrap raw values
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Presentation defaults
    #[must_use]
    pub fn default_targets() -> Self {
        Self(DEFAULT_TARGETS.to_vec())
    }

    /// Raw values
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Number of values
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no values are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for a field, if the vector is long enough
    #[must_use]
    pub fn get(&self, field: NutrientField) -> Option<f64> {
        self.0.get(field.index()).copied()
    }

    /// Check the vector against the schema. Negative values are reported, not rejected.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        if self.0.is_empty() {
            return ValidationReport {
                valid: false,
                negative_fields: Vec::new(),
                diagnostic: Some("Nutrition input is empty".to_owned()),
            };
        }

        if self.0.len() != SCHEMA_LEN {
            return ValidationReport {
                valid: false,
                negative_fields: Vec::new(),
                diagnostic: Some(format!(
                    "Expected {SCHEMA_LEN} nutrition values, got {}",
                    self.0.len()
                )),
            };
        }

        let negative_fields: Vec<NutrientField> = NutrientField::ALL
            .into_iter()
            .zip(&self.0)
            .filter(|(_, value)| **value < 0.0)
            .map(|(field, _)| field)
            .collect();

        let diagnostic = (!negative_fields.is_empty())
            .then(|| format!("Found {} negative nutrition values", negative_fields.len()));

        ValidationReport {
            valid: true,
            negative_fields,
            diagnostic,
        }
    }

    /// Fields whose value lies outside [`NutrientField::suggested_range`]
    #[must_use]
    pub fn out_of_range(&self) -> Vec<NutrientField> {
        NutrientField::ALL
            .into_iter()
            .zip(&self.0)
            .filter(|(field, value)| {
                let (low, high) = field.suggested_range();
                **value < low || **value > high
            })
            .map(|(field, _)| field)
            .collect()
    }
}

impl From<Vec<f64>> for NutritionVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Outcome of [`NutritionVector::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether the vector may be sent to the service
    pub valid: bool,
    /// Fields holding negative values (warning only)
    pub negative_fields: Vec<NutrientField>,
    /// Error or warning text, if any
    pub diagnostic: Option<String>,
}

impl ValidationReport {
    /// Valid but carrying a warning
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.valid && !self.negative_fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_matches_wire_names() {
        for (idx, field) in NutrientField::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), idx);
            assert_eq!(field.label(), FIELD_NAMES[idx]);
        }
        assert_eq!(NutrientField::SodiumContent.unit(), "mg");
        assert_eq!(NutrientField::Calories.unit(), "kcal");
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        let report = NutritionVector::new(vec![1.0; 8]).validate();
        assert!(!report.valid);
        assert_eq!(
            report.diagnostic.as_deref(),
            Some("Expected 9 nutrition values, got 8")
        );

        assert!(!NutritionVector::default().validate().valid);
    }

    #[test]
    fn test_validate_flags_negatives_without_rejecting() {
        let mut values = DEFAULT_TARGETS.to_vec();
        values[1] = -5.0;
        values[8] = -1.0;
        let report = NutritionVector::new(values).validate();
        assert!(report.valid);
        assert!(report.has_warnings());
        assert_eq!(
            report.negative_fields,
            vec![NutrientField::FatContent, NutrientField::ProteinContent]
        );
    }

    #[test]
    fn test_out_of_range_reports_fields() {
        let mut values = DEFAULT_TARGETS.to_vec();
        values[NutrientField::SugarContent.index()] = 90.0;
        let vector = NutritionVector::new(values);
        assert_eq!(vector.out_of_range(), vec![NutrientField::SugarContent]);
        assert!(NutritionVector::default_targets().out_of_range().is_empty());
    }
}
