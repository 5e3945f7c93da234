//! Built-in illustrative scenarios.
//!
//! Three situations that show the calculator's range: an expensive model
//! swap, a re-ranker added to a retrieval pipeline, and a per-node dashboard
//! check with caching and quantization proposals.

use crate::result::ComparisonRecord;
use nei_core::{EfficiencyCalculator, MetricSnapshot, NodeComparisonInput, Weights};

/// A named group of comparisons sharing one set of weights.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario identifier.
    pub id: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Weights for every comparison in the scenario.
    pub weights: Weights,
    /// The comparisons to run.
    pub nodes: Vec<NodeComparisonInput>,
}

impl Scenario {
    /// Run every comparison of the scenario.
    ///
    /// Labels are `<scenario id>/<node name>`.
    pub fn run(&self) -> Vec<ComparisonRecord> {
        let calc = EfficiencyCalculator::new(self.weights);
        self.nodes
            .iter()
            .map(|node| {
                ComparisonRecord::compute(
                    format!("{}/{}", self.id, node.name),
                    &calc,
                    node.baseline,
                    node.candidate,
                )
            })
            .collect()
    }
}

/// The registered scenarios, in report order.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "model-swap",
            description: "Switch to a slower, pricier, smarter model under price-sensitive weights",
            weights: Weights::new(0.2, 0.6, 0.2),
            nodes: vec![NodeComparisonInput::new(
                "generator",
                MetricSnapshot::new(1.5, 0.002, 0.80),
                MetricSnapshot::new(3.0, 0.030, 0.85),
            )],
        },
        Scenario {
            id: "rag-reranker",
            description: "Add a cross-encoder re-ranker to a retrieval pipeline",
            weights: Weights::new(0.33, 0.33, 0.34),
            nodes: vec![NodeComparisonInput::new(
                "retrieval",
                MetricSnapshot::new(0.8, 500.0, 0.65),
                MetricSnapshot::new(1.4, 550.0, 0.82),
            )],
        },
        Scenario {
            id: "dashboard",
            description: "Per-node health check where time and quality dominate",
            weights: Weights::new(0.4, 0.2, 0.4),
            nodes: vec![
                NodeComparisonInput::new(
                    "QueryRewriter",
                    MetricSnapshot::new(0.2, 100.0, 0.80),
                    MetricSnapshot::new(0.4, 300.0, 0.82),
                ),
                NodeComparisonInput::new(
                    "VectorStore",
                    MetricSnapshot::new(0.5, 0.0, 0.90),
                    MetricSnapshot::new(0.1, 0.0, 0.90),
                ),
                NodeComparisonInput::new(
                    "Summarizer",
                    MetricSnapshot::new(2.0, 1000.0, 0.85),
                    MetricSnapshot::new(1.0, 500.0, 0.84),
                ),
            ],
        },
    ]
}
