// Copyright 2025 Node Efficiency Index Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sensitivity weights and the weight-sum advisory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Weight sums inside this range pass without an advisory.
pub const NORMALIZED_SUM_RANGE: RangeInclusive<f64> = 0.9..=1.1;

/// Sensitivity weights for the three comparison axes.
///
/// The weights are not required to sum to one. A sum outside
/// [`NORMALIZED_SUM_RANGE`] yields a [`WeightAdvisory`] but is otherwise
/// accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Sensitivity to latency.
    pub alpha: f64,
    /// Sensitivity to cost.
    pub beta: f64,
    /// Sensitivity to quality.
    pub gamma: f64,
}

impl Weights {
    /// Create a new set of weights.
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Sum of the three weights.
    pub fn sum(&self) -> f64 {
        self.alpha + self.beta + self.gamma
    }

    /// Returns an advisory when the sum falls outside [`NORMALIZED_SUM_RANGE`].
    ///
    /// A NaN sum also produces an advisory.
    pub fn advisory(&self) -> Option<WeightAdvisory> {
        let sum = self.sum();
        if NORMALIZED_SUM_RANGE.contains(&sum) {
            None
        } else {
            Some(WeightAdvisory { sum })
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            alpha: 0.33,
            beta: 0.33,
            gamma: 0.34,
        }
    }
}

/// Non-fatal notice that the weights are far from unit sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightAdvisory {
    /// The observed weight sum.
    pub sum: f64,
}

impl fmt::Display for WeightAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weights sum to {}, which is far from 1.0. \
             Confirm this is intentional for your custom score normalization.",
            self.sum
        )
    }
}
