// Copyright 2025 Node Efficiency Index Contributors
// SPDX-License-Identifier: Apache-2.0

//! Metric snapshots of a measured process.

use crate::error::{NeiError, Result};
use crate::result::float_format;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The measured state of a node or workflow at one point in time.
///
/// Fields are not range-checked on construction. [`MetricSnapshot::validate`]
/// is available for callers that want to reject negative or non-finite
/// values up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Execution time in seconds.
    #[serde(with = "float_format")]
    pub latency: f64,
    /// Generic cost: token count or currency.
    #[serde(alias = "tokens", with = "float_format")]
    pub cost: f64,
    /// Quality score, typically in `[0, 1]`.
    #[serde(with = "float_format")]
    pub quality: f64,
}

impl MetricSnapshot {
    /// Create a new snapshot.
    pub fn new(latency: f64, cost: f64, quality: f64) -> Self {
        Self {
            latency,
            cost,
            quality,
        }
    }

    /// Check that every field is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("latency", self.latency),
            ("cost", self.cost),
            ("quality", self.quality),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(NeiError::InvalidSnapshot { field, value });
            }
        }
        Ok(())
    }
}

/// Parses the `latency,cost,quality` text form.
impl FromStr for MetricSnapshot {
    type Err = NeiError;

    fn from_str(s: &str) -> Result<Self> {
        let parse_err = |reason: String| NeiError::ParseSnapshot {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(parse_err(format!(
                "expected 3 comma-separated values (latency,cost,quality), got {}",
                parts.len()
            )));
        }

        let mut values = [0.0_f64; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|e| parse_err(format!("'{}': {}", part, e)))?;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}
