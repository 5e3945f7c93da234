// Copyright 2025 Node Efficiency Index Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the efficiency calculator.
//!
//! [`EfficiencyCalculator::compute`](crate::EfficiencyCalculator::compute) is
//! total and never returns these. They surface only from the opt-in strict
//! path, snapshot parsing, and settings loading.

use thiserror::Error;

/// Errors that can occur outside the arithmetic path.
#[derive(Debug, Error)]
pub enum NeiError {
    /// A snapshot field is negative or non-finite (strict mode only)
    #[error("Invalid snapshot field {field}: {value} (must be finite and non-negative)")]
    InvalidSnapshot {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Snapshot text could not be parsed
    #[error("Invalid snapshot '{input}': {reason}")]
    ParseSnapshot {
        /// The raw input
        input: String,
        /// Why parsing failed
        reason: String,
    },

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for calculator operations.
pub type Result<T> = std::result::Result<T, NeiError>;
