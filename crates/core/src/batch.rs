// Copyright 2025 Node Efficiency Index Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-node comparisons.
//!
//! Each node is compared on its own; nothing is aggregated across nodes.

use crate::calculator::EfficiencyCalculator;
use crate::result::ComparisonResult;
use crate::snapshot::MetricSnapshot;
use serde::{Deserialize, Serialize};

/// A named baseline/candidate pair, e.g. one pipeline node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeComparisonInput {
    /// Node name.
    pub name: String,
    /// Current state of the node.
    pub baseline: MetricSnapshot,
    /// Proposed state of the node.
    pub candidate: MetricSnapshot,
}

impl NodeComparisonInput {
    /// Create a new node input.
    pub fn new(
        name: impl Into<String>,
        baseline: MetricSnapshot,
        candidate: MetricSnapshot,
    ) -> Self {
        Self {
            name: name.into(),
            baseline,
            candidate,
        }
    }
}

/// Result of comparing one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeComparison {
    /// Node name.
    pub name: String,
    /// The comparison outcome.
    pub result: ComparisonResult,
}

impl EfficiencyCalculator {
    /// Compare every node independently, preserving input order.
    pub fn compare_nodes(&self, nodes: &[NodeComparisonInput]) -> Vec<NodeComparison> {
        nodes
            .iter()
            .map(|node| NodeComparison {
                name: node.name.clone(),
                result: self.compute(&node.baseline, &node.candidate),
            })
            .collect()
    }
}
