// ABOUTME: Recipe CLI - command-line front end for the recipe recommendation client
// ABOUTME: Requests recommendations, probes the service, and browses the ingredient catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recommend with default nutrition targets
//! recipe-cli recommend
//!
//! # Recommend for explicit targets and ingredients
//! recipe-cli recommend 500 50 10 50 400 100 10 10 30 --ingredient chicken --ingredient rice --count 8
//!
//! # Fail instead of falling back when the service is down
//! recipe-cli recommend --strict
//!
//! # Check service health and stats
//! recipe-cli check --api-url http://localhost:8000
//!
//! # Browse ingredients
//! recipe-cli suggest --category Vegetables
//! recipe-cli categories
//! recipe-cli schema
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use recipe_recommender::config::RecommenderConfig;
use recipe_recommender::errors::{AppError, AppResult};
use recipe_recommender::logging::LoggingConfig;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe recommendation client",
    long_about = "Request recipe recommendations for nutrition targets, with bounded retries and a local fallback catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recommendation service URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Request recommendations
    Recommend {
        /// Nutrition targets in schema order (see `schema`); defaults when omitted
        #[arg(allow_negative_numbers = true)]
        nutrition: Vec<f64>,

        /// Preferred ingredient (repeatable)
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,

        /// Number of recipes to request
        #[arg(long, short = 'n')]
        count: Option<usize>,

        /// Pin the deterministic seed
        #[arg(long)]
        no_random: bool,

        /// Attempt budget override
        #[arg(long)]
        max_attempts: Option<u32>,

        /// Fail instead of using fallback recipes
        #[arg(long)]
        strict: bool,

        /// Print JSON instead of recipe cards
        #[arg(long)]
        json: bool,
    },

    /// Test connection to the recommendation service
    Check {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// List suggested ingredients
    Suggest {
        /// Restrict to one category
        #[arg(long, short = 'c')]
        category: Option<String>,
    },

    /// List ingredient categories
    Categories,

    /// Show the nutrition schema
    Schema,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let mut config = RecommenderConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.service.base_url = api_url;
    }
    debug!(base_url = %config.service.base_url, "Recipe CLI starting");

    match cli.command {
        Command::Recommend {
            nutrition,
            ingredients,
            count,
            no_random,
            max_attempts,
            strict,
            json,
        } => {
            if let Some(max_attempts) = max_attempts {
                config.retry.max_attempts = max_attempts;
            }
            let options = commands::recommend::RecommendOptions {
                nutrition,
                ingredients,
                count,
                randomize: !no_random,
                strict,
                json,
            };
            commands::recommend::run(config, options).await?;
        }
        Command::Check { json } => commands::recommend::check(config, json).await?,
        Command::Suggest { category } => commands::catalog::suggest(category.as_deref()),
        Command::Categories => commands::catalog::categories(),
        Command::Schema => commands::catalog::schema(),
    }

    Ok(())
}
