//! Error types for explorer domain operations.
//!
//! This module defines the error type shared by the fetch client, the amount
//! formatter and the view composers.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for explorer client and formatting operations.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// A decimal amount string that violates the upstream data contract.
    #[error("Invalid amount '{input}'")]
    InvalidAmount {
        /// The raw string handed to the formatter.
        input: String,
    },
}

impl ScoutError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid amount error for the given raw input.
    #[must_use]
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
        }
    }

    /// Convert to a `color_eyre::Report` for the binary's error boundary.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
