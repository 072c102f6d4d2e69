// ABOUTME: Typed failures for building and executing recommendation requests
// ABOUTME: Classifies transport, server, parse, and validation failures for the retry loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use thiserror::Error;

/// What went wrong below the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// The call exceeded its per-call timeout
    Timeout,
    /// The connection was refused or could not be established
    Connect,
    /// Any other I/O or protocol fault (DNS, TLS, reset, body read)
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::Connect => write!(f, "connection error"),
            Self::Other => write!(f, "transport error"),
        }
    }
}

/// Errors raised by the request builder, the service client, and the retry orchestrator.
///
/// Only `Transport` and `ServerError` are retryable, and only `Transport` drives
/// backoff delay. `RetriesExhausted` is terminal for a single execution and keeps the
/// final attempt's failure as its source.
#[derive(Debug, Clone, Error)]
pub enum RecommendationError {
    /// Nutrition vector was empty or did not match the schema length
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Diagnostic describing the rejected input
        reason: String,
    },

    /// No response was received at all
    #[error("{kind} talking to recommendation service: {message}")]
    Transport {
        /// Classification of the transport fault
        kind: TransportKind,
        /// Underlying error text
        message: String,
    },

    /// A response was received but its status was not 200
    #[error("recommendation service returned status {status}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for diagnostics only
        body: String,
    },

    /// Every attempt failed
    #[error("failed to get response after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Status of the last response received, if any attempt got one
        last_status: Option<u16>,
        /// Failure of the final attempt
        #[source]
        source: Option<Box<RecommendationError>>,
    },

    /// Response body was not valid JSON or lacked the expected keys
    #[error("failed to parse service response: {reason}")]
    ParseFailure {
        /// Parser diagnostic
        reason: String,
    },
}

impl RecommendationError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a transport error
    #[must_use]
    pub fn transport(kind: TransportKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }

    /// Create a parse failure
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::ParseFailure {
            reason: reason.into(),
        }
    }

    /// Whether another attempt may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::ServerError { .. })
    }

    /// Whether the retry loop should wait before the next attempt
    #[must_use]
    pub const fn requires_backoff(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Short machine-readable name for structured logs
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::Transport { .. } => "transport_failure",
            Self::ServerError { .. } => "server_error",
            Self::RetriesExhausted { .. } => "retries_exhausted",
            Self::ParseFailure { .. } => "parse_failure",
        }
    }
}

#[cfg(feature = "transport-errors")]
impl From<reqwest::Error> for RecommendationError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            TransportKind::Timeout
        } else if error.is_connect() {
            TransportKind::Connect
        } else {
            TransportKind::Other
        };
        Self::transport(kind, error.to_string())
    }
}

/// Result type for the recommendation pipeline
pub type RecommendationResult<T> = Result<T, RecommendationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_classification() {
        let transport = RecommendationError::transport(TransportKind::Timeout, "30s elapsed");
        assert!(transport.is_retryable());
        assert!(transport.requires_backoff());

        let server = RecommendationError::ServerError {
            status: 503,
            body: String::new(),
        };
        assert!(server.is_retryable());
        assert!(!server.requires_backoff());

        let invalid = RecommendationError::invalid_input("empty");
        assert!(!invalid.is_retryable());
        assert_eq!(invalid.kind_name(), "invalid_input");
    }

    #[test]
    fn test_exhaustion_keeps_final_failure_as_source() {
        let exhausted = RecommendationError::RetriesExhausted {
            attempts: 2,
            last_status: None,
            source: Some(Box::new(RecommendationError::transport(
                TransportKind::Connect,
                "connection refused",
            ))),
        };
        assert_eq!(
            exhausted.to_string(),
            "failed to get response after 2 attempts"
        );
        let source = exhausted.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("connection error talking to recommendation service: connection refused")
        );
    }
}
