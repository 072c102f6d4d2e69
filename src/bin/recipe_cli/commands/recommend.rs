// ABOUTME: Service-backed commands for recipe-cli
// ABOUTME: Builds a session from configuration and runs recommend or connection checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_recommender::config::RecommenderConfig;
use recipe_recommender::constants::params::{MAX_RESULT_COUNT, MIN_RESULT_COUNT};
use recipe_recommender::errors::{AppError, AppResult};
use recipe_recommender::models::{NutritionVector, RequestParameters};
use recipe_recommender::session::{ConnectionStatus, RecommendationSession};
use tracing::info;

use crate::helpers::display;

/// Arguments of the `recommend` subcommand
pub struct RecommendOptions {
    pub nutrition: Vec<f64>,
    pub ingredients: Vec<String>,
    pub count: Option<usize>,
    pub randomize: bool,
    pub strict: bool,
    pub json: bool,
}

pub async fn run(config: RecommenderConfig, options: RecommendOptions) -> AppResult<()> {
    let nutrition = if options.nutrition.is_empty() {
        info!("No nutrition targets given, using defaults");
        NutritionVector::default_targets()
    } else {
        NutritionVector::new(options.nutrition)
    };

    let mut params = RequestParameters::defaults().with_randomness(options.randomize);
    if let Some(count) = options.count {
        check_count(count)?;
        params = params.with_result_count(count);
    }

    let session = RecommendationSession::new(config)?;
    session
        .set_request(nutrition, &options.ingredients, params.as_map())
        .await;

    if options.strict {
        let response = session.generate().await?;
        let recipes = response.recipes()?;
        if options.json {
            display::print_json(&recipes)?;
        } else {
            display::print_recipes(&recipes);
        }
        return Ok(());
    }

    let recommendations = session.recommend().await;
    if options.json {
        display::print_json(&recommendations)?;
    } else {
        if let Some(failure) = &recommendations.failure {
            println!("Service unavailable ({failure}); showing fallback recipes.");
        }
        display::print_recipes(&recommendations.recipes);
    }
    Ok(())
}

pub async fn check(config: RecommenderConfig, json: bool) -> AppResult<()> {
    let session = RecommendationSession::new(config)?;
    let report = session.test_connection().await;
    if json {
        display::print_json(&report)?;
    } else {
        display::print_connection_report(&report);
    }

    if report.status == ConnectionStatus::Connected {
        Ok(())
    } else {
        Err(AppError::external_service(
            report.api_url,
            format!("connection status is {}", report.status),
        ))
    }
}

fn check_count(count: usize) -> AppResult<()> {
    if (MIN_RESULT_COUNT..=MAX_RESULT_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(format!(
            "--count must be between {MIN_RESULT_COUNT} and {MAX_RESULT_COUNT}, got {count}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_recommender::errors::ErrorCode;

    #[test]
    fn test_count_bounds() {
        assert!(check_count(MIN_RESULT_COUNT).is_ok());
        assert!(check_count(MAX_RESULT_COUNT).is_ok());

        let err = check_count(MAX_RESULT_COUNT + 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.code.exit_code(), 2);
        assert_eq!(check_count(0).unwrap_err().code, ErrorCode::ValueOutOfRange);
    }
}
