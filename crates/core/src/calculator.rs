// Copyright 2025 Node Efficiency Index Contributors
// SPDX-License-Identifier: Apache-2.0

//! The efficiency calculator.
//!
//! # Formula
//!
//! For each axis `X` in latency (T), cost (N) and quality (Q):
//!
//! ```text
//! dX          = (candidate.X - baseline.X) / (baseline.X + EPSILON)
//! score       = 100 * (gamma*dQ - alpha*dT - beta*dN)
//! cost_impact = alpha*dT + beta*dN
//! ```
//!
//! The NEI index depends on the sign of `cost_impact`, see [`CostRegime`].

use crate::error::Result;
use crate::result::{ComparisonResult, CostRegime};
use crate::snapshot::MetricSnapshot;
use crate::weights::{WeightAdvisory, Weights};
use tracing::warn;

/// Added to every denominator so a zero baseline never divides by zero.
pub const EPSILON: f64 = 1e-9;

/// Compares candidate snapshots against baselines under fixed weights.
///
/// The calculator holds no mutable state; one instance can be shared across
/// threads and reused for any number of comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyCalculator {
    weights: Weights,
    advisory: Option<WeightAdvisory>,
}

impl EfficiencyCalculator {
    /// Create a calculator with the given weights.
    ///
    /// Weights far from unit sum are accepted. The advisory is logged once
    /// here and kept for [`EfficiencyCalculator::advisory`].
    pub fn new(weights: Weights) -> Self {
        let advisory = weights.advisory();
        if let Some(advisory) = &advisory {
            warn!(weight_sum = advisory.sum, "{}", advisory);
        }
        Self { weights, advisory }
    }

    /// Create a calculator from individual weight values.
    pub fn with_weights(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self::new(Weights::new(alpha, beta, gamma))
    }

    /// The weights fixed at construction.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// The construction-time advisory, if the weights were far from unit sum.
    pub fn advisory(&self) -> Option<&WeightAdvisory> {
        self.advisory.as_ref()
    }

    /// Compare `candidate` against `baseline`.
    ///
    /// Total over finite inputs. Every field of the result is finite except
    /// `nei_index`, which is `+∞` for [`CostRegime::OptimizationWin`]. A
    /// quality drop with near-zero weighted savings gives a large negative
    /// index, see [`CostRegime::OptimizationLoss`].
    pub fn compute(
        &self,
        baseline: &MetricSnapshot,
        candidate: &MetricSnapshot,
    ) -> ComparisonResult {
        let Weights { alpha, beta, gamma } = self.weights;

        let d_latency = relative_delta(baseline.latency, candidate.latency);
        let d_cost = relative_delta(baseline.cost, candidate.cost);
        let d_quality = relative_delta(baseline.quality, candidate.quality);

        let efficiency_score = 100.0 * (gamma * d_quality - alpha * d_latency - beta * d_cost);
        let cost_impact = alpha * d_latency + beta * d_cost;

        let regime = classify(cost_impact, d_quality);
        let nei_index = match regime {
            CostRegime::Expansion | CostRegime::OptimizationLoss => {
                d_quality / (cost_impact + EPSILON)
            }
            CostRegime::OptimizationWin => f64::INFINITY,
        };

        let is_efficient = efficiency_score > 0.0;

        ComparisonResult {
            efficiency_score,
            nei_index,
            delta_latency: d_latency,
            delta_cost: d_cost,
            delta_quality: d_quality,
            cost_impact,
            regime,
            is_efficient,
            explanation: explain(is_efficient, d_quality),
        }
    }

    /// Like [`EfficiencyCalculator::compute`], but rejects snapshots with
    /// negative or non-finite fields first.
    pub fn compute_checked(
        &self,
        baseline: &MetricSnapshot,
        candidate: &MetricSnapshot,
    ) -> Result<ComparisonResult> {
        baseline.validate()?;
        candidate.validate()?;
        Ok(self.compute(baseline, candidate))
    }
}

impl Default for EfficiencyCalculator {
    fn default() -> Self {
        Self::new(Weights::default())
    }
}

fn relative_delta(baseline: f64, candidate: f64) -> f64 {
    (candidate - baseline) / (baseline + EPSILON)
}

fn classify(cost_impact: f64, d_quality: f64) -> CostRegime {
    if cost_impact > 0.0 {
        CostRegime::Expansion
    } else if d_quality >= 0.0 {
        CostRegime::OptimizationWin
    } else {
        CostRegime::OptimizationLoss
    }
}

fn explain(is_efficient: bool, d_quality: f64) -> String {
    let pct = d_quality * 100.0;
    if is_efficient {
        format!("Efficient: Quality gain ({:.1}%) justifies the cost/latency change.", pct)
    } else {
        format!("Inefficient: Cost/Latency penalty outweighs Quality gain ({:.1}%).", pct)
    }
}
