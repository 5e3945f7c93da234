// Copyright 2025 Node Efficiency Index Contributors
// SPDX-License-Identifier: Apache-2.0

//! Property tests for the efficiency calculator.

use nei_core::{CostRegime, EfficiencyCalculator, MetricSnapshot};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

fn snapshot() -> impl Strategy<Value = MetricSnapshot> {
    (0.01f64..100.0, 0.01f64..10_000.0, 0.01f64..1.0)
        .prop_map(|(latency, cost, quality)| MetricSnapshot::new(latency, cost, quality))
}

fn weight() -> impl Strategy<Value = f64> {
    0.01f64..1.0
}

proptest! {
    #[test]
    fn test_zero_change_is_neutral(m in snapshot(), a in weight(), b in weight(), g in weight()) {
        let calc = EfficiencyCalculator::with_weights(a, b, g);
        let result = calc.compute(&m, &m);

        prop_assert_eq!(result.delta_latency, 0.0);
        prop_assert_eq!(result.delta_cost, 0.0);
        prop_assert_eq!(result.delta_quality, 0.0);
        prop_assert!(result.efficiency_score.abs() < 1e-12);
        prop_assert!(!result.is_efficient);
    }

    #[test]
    fn test_pure_win_has_infinite_index(
        base in snapshot(),
        latency_cut in 0.0f64..0.9,
        cost_cut in 0.0f64..0.9,
        quality_gain in 0.0f64..0.5,
        a in weight(), b in weight(), g in weight(),
    ) {
        prop_assume!(latency_cut > 0.0 || cost_cut > 0.0);
        let candidate = MetricSnapshot::new(
            base.latency * (1.0 - latency_cut),
            base.cost * (1.0 - cost_cut),
            base.quality * (1.0 + quality_gain),
        );

        let result = EfficiencyCalculator::with_weights(a, b, g).compute(&base, &candidate);

        prop_assert!(result.cost_impact <= 0.0);
        prop_assert_eq!(result.regime, CostRegime::OptimizationWin);
        prop_assert!(result.nei_index == f64::INFINITY);
    }

    #[test]
    fn test_swapping_flips_delta_signs(a in snapshot(), b in snapshot()) {
        let calc = EfficiencyCalculator::default();
        let forward = calc.compute(&a, &b);
        let backward = calc.compute(&b, &a);

        for (f, r) in [
            (forward.delta_latency, backward.delta_latency),
            (forward.delta_cost, backward.delta_cost),
            (forward.delta_quality, backward.delta_quality),
        ] {
            prop_assert!(f * r <= 0.0);
        }
    }

    #[test]
    fn test_results_are_finite_except_index(
        base in snapshot(),
        cand in snapshot(),
        a in weight(), b in weight(), g in weight(),
    ) {
        let result = EfficiencyCalculator::with_weights(a, b, g).compute(&base, &cand);

        prop_assert!(result.efficiency_score.is_finite());
        prop_assert!(result.delta_latency.is_finite());
        prop_assert!(result.delta_cost.is_finite());
        prop_assert!(result.delta_quality.is_finite());
        prop_assert!(!result.nei_index.is_nan());
        prop_assert_eq!(result.is_efficient, result.efficiency_score > 0.0);
        if result.regime != CostRegime::OptimizationWin {
            prop_assert!(result.nei_index.is_finite());
        }
    }

    #[test]
    fn test_zero_baseline_never_divides_by_zero(cost in 0.0f64..1000.0, m in snapshot()) {
        let baseline = MetricSnapshot::new(m.latency, 0.0, m.quality);
        let candidate = MetricSnapshot::new(m.latency, cost, m.quality);

        let result = EfficiencyCalculator::default().compute(&baseline, &candidate);

        prop_assert!(result.delta_cost.is_finite());
        prop_assert!(result.delta_cost >= 0.0);
    }

    #[test]
    fn test_compute_is_deterministic(base in snapshot(), cand in snapshot()) {
        let calc = EfficiencyCalculator::default();
        prop_assert_eq!(calc.compute(&base, &cand), calc.compute(&base, &cand));
    }
}

#[test]
fn test_shared_calculator_across_threads() {
    let calc = Arc::new(EfficiencyCalculator::with_weights(0.2, 0.6, 0.2));
    let baseline = MetricSnapshot::new(1.5, 0.002, 0.80);
    let candidate = MetricSnapshot::new(3.0, 0.030, 0.85);
    let expected = calc.compute(&baseline, &candidate);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calc = Arc::clone(&calc);
            thread::spawn(move || calc.compute(&baseline, &candidate))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
