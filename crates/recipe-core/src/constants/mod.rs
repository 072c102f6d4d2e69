// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrition schema, service routes, timeouts, retry defaults, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large list.

/// Nutrition schema expected by the recommendation service
pub mod nutrition {
    /// Number of values in a nutrition vector
    pub const SCHEMA_LEN: usize = 9;

    /// Wire names of the nutrition fields, in positional order
    pub const FIELD_NAMES: [&str; SCHEMA_LEN] = [
        "Calories",
        "FatContent",
        "SaturatedFatContent",
        "CholesterolContent",
        "SodiumContent",
        "CarbohydrateContent",
        "FiberContent",
        "SugarContent",
        "ProteinContent",
    ];

    /// Default targets offered to a new user, in schema order
    pub const DEFAULT_TARGETS: [f64; SCHEMA_LEN] =
        [500.0, 50.0, 10.0, 50.0, 400.0, 100.0, 10.0, 10.0, 30.0];
}

/// Default algorithm parameters sent with every predict call
pub mod params {
    /// Result count key
    pub const N_NEIGHBORS: &str = "n_neighbors";
    /// Whether the service returns neighbor distances
    pub const RETURN_DISTANCE: &str = "return_distance";
    /// Deterministic seed key
    pub const RANDOM_STATE: &str = "random_state";
    /// Neighbor search strategy key
    pub const ALGORITHM: &str = "algorithm";

    /// Default number of recommendations
    pub const DEFAULT_N_NEIGHBORS: u64 = 5;
    /// Default seed
    pub const DEFAULT_RANDOM_STATE: u64 = 42;
    /// Default search strategy
    pub const DEFAULT_ALGORITHM: &str = "auto";

    /// Smallest result count the presentation layer offers
    pub const MIN_RESULT_COUNT: usize = 5;
    /// Largest result count the presentation layer offers
    pub const MAX_RESULT_COUNT: usize = 20;
}

/// Remote service routes
pub mod routes {
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Server statistics
    pub const STATS: &str = "/stats";
    /// Recommendation call
    pub const PREDICT: &str = "/predict";
}

/// Response body keys
pub mod response_keys {
    /// Recipe list
    pub const OUTPUT: &str = "output";
    /// Service-reported errors
    pub const ERRORS: &str = "errors";
    /// Service-reported warnings
    pub const WARNINGS: &str = "warnings";
}

/// Timeouts
pub mod timeouts {
    /// Predict call timeout in seconds
    pub const PREDICT_TIMEOUT_SECS: u64 = 30;
    /// Health/stats probe timeout in seconds
    pub const PROBE_TIMEOUT_SECS: u64 = 10;
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Retry defaults
pub mod retry {
    /// Attempts per execution
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    /// One backoff time unit in milliseconds
    pub const DEFAULT_BACKOFF_UNIT_MS: u64 = 1000;
}

/// Service defaults
pub mod service {
    /// Default base URL of the recommendation service
    pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
    /// Service name used in logs and error messages
    pub const SERVICE_NAME: &str = "recipe-recommendation-service";
}

/// Environment variable names
pub mod env_keys {
    /// Base URL of the recommendation service
    pub const API_URL: &str = "RECIPE_API_URL";
    /// Predict timeout in seconds
    pub const PREDICT_TIMEOUT_SECS: &str = "RECIPE_API_PREDICT_TIMEOUT_SECS";
    /// Health/stats timeout in seconds
    pub const PROBE_TIMEOUT_SECS: &str = "RECIPE_API_PROBE_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "RECIPE_API_CONNECT_TIMEOUT_SECS";
    /// Attempts per execution
    pub const MAX_ATTEMPTS: &str = "RECIPE_API_MAX_ATTEMPTS";
    /// Backoff unit in milliseconds
    pub const BACKOFF_UNIT_MS: &str = "RECIPE_API_BACKOFF_UNIT_MS";
}
