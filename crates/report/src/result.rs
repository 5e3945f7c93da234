//! Comparison record types.
//!
//! This module provides the labelled, timestamped record that reports and
//! JSON output are built from.

use chrono::{DateTime, Utc};
use nei_core::{ComparisonResult, EfficiencyCalculator, MetricSnapshot, Verdict, Weights};
use serde::{Deserialize, Serialize};

/// One comparison, with everything needed to reproduce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Human-readable label, e.g. a node or scenario name.
    pub label: String,
    /// Weights the calculator was built with.
    pub weights: Weights,
    /// Baseline snapshot.
    pub baseline: MetricSnapshot,
    /// Candidate snapshot.
    pub candidate: MetricSnapshot,
    /// Calculator output.
    pub result: ComparisonResult,
    /// Timestamp when the comparison was computed.
    pub timestamp: DateTime<Utc>,
}

impl ComparisonRecord {
    /// Run `calc` on the pair and wrap the result in a record.
    pub fn compute(
        label: impl Into<String>,
        calc: &EfficiencyCalculator,
        baseline: MetricSnapshot,
        candidate: MetricSnapshot,
    ) -> Self {
        let result = calc.compute(&baseline, &candidate);
        Self::from_result(label, *calc.weights(), baseline, candidate, result)
    }

    /// Wrap an already computed result in a record.
    pub fn from_result(
        label: impl Into<String>,
        weights: Weights,
        baseline: MetricSnapshot,
        candidate: MetricSnapshot,
        result: ComparisonResult,
    ) -> Self {
        Self {
            label: label.into(),
            weights,
            baseline,
            candidate,
            result,
            timestamp: Utc::now(),
        }
    }

    /// Keep/reject decision of the wrapped result.
    pub fn verdict(&self) -> Verdict {
        self.result.verdict()
    }
}
