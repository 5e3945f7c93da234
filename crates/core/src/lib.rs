// Copyright 2025 Node Efficiency Index Contributors
// SPDX-License-Identifier: Apache-2.0

//! Node Efficiency Index (NEI) calculator.
//!
//! Compares a candidate snapshot of a measured process against a baseline
//! across latency, cost and quality, and decides whether the change is worth
//! adopting.
//!
//! # Quick Start
//!
//! ```
//! use nei_core::{EfficiencyCalculator, MetricSnapshot};
//!
//! let calc = EfficiencyCalculator::with_weights(0.4, 0.2, 0.4);
//! let baseline = MetricSnapshot::new(0.5, 0.0, 0.90);
//! let candidate = MetricSnapshot::new(0.1, 0.0, 0.90);
//!
//! let result = calc.compute(&baseline, &candidate);
//! assert!(result.is_efficient);
//! assert!(result.nei_index.is_infinite());
//! ```
//!
//! # Modules
//!
//! - [`calculator`] - The [`EfficiencyCalculator`] and its formula
//! - [`snapshot`] - [`MetricSnapshot`] inputs
//! - [`weights`] - Sensitivity [`Weights`] and the weight-sum advisory
//! - [`result`] - [`ComparisonResult`] and its classifications
//! - [`batch`] - Independent per-node comparisons
//! - [`settings`] - Layered [`Settings`] via the `config` crate

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod batch;
pub mod calculator;
pub mod error;
pub mod result;
pub mod settings;
pub mod snapshot;
pub mod weights;

pub use batch::{NodeComparison, NodeComparisonInput};
pub use calculator::{EfficiencyCalculator, EPSILON};
pub use error::{NeiError, Result};
pub use result::{ComparisonResult, CostRegime, Verdict};
pub use settings::{LogSettings, Settings};
pub use snapshot::MetricSnapshot;
pub use weights::{WeightAdvisory, Weights};
