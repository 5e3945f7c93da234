// Copyright 2025 Node Efficiency Index Contributors
// SPDX-License-Identifier: Apache-2.0

//! Comparison result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which case of the NEI ratio applied to a comparison.
///
/// The ratio of quality delta to weighted cost delta changes meaning when
/// the cost term changes sign, so each case is reported explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostRegime {
    /// Weighted cost went up; the index is quality gained per unit paid.
    Expansion,
    /// Weighted cost did not go up and quality did not drop; the index is `+∞`.
    OptimizationWin,
    /// Weighted cost did not go up but quality dropped; the index is quality
    /// lost per unit saved.
    ///
    /// The ratio is positive only while `cost_impact < -EPSILON`. For
    /// `cost_impact` in `(-EPSILON, 0]` the denominator is non-negative and the
    /// index is a large negative number (`-∞` at exactly `-EPSILON`).
    OptimizationLoss,
}

impl CostRegime {
    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expansion => "expansion",
            Self::OptimizationWin => "optimization (win)",
            Self::OptimizationLoss => "optimization (loss)",
        }
    }
}

impl fmt::Display for CostRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Adopt-or-not decision derived from the efficiency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// The candidate is efficient and should replace the baseline.
    Keep,
    /// The candidate is not worth adopting.
    Reject,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => f.write_str("KEEP"),
            Self::Reject => f.write_str("REJECT"),
        }
    }
}

/// Outcome of comparing a candidate snapshot against a baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Weighted net benefit, scaled by 100. Positive means efficient.
    #[serde(with = "float_format")]
    pub efficiency_score: f64,
    /// Quality-per-cost ratio; `+∞` for a strict win.
    #[serde(with = "float_format")]
    pub nei_index: f64,
    /// Relative latency change.
    #[serde(with = "float_format")]
    pub delta_latency: f64,
    /// Relative cost change.
    #[serde(with = "float_format")]
    pub delta_cost: f64,
    /// Relative quality change.
    #[serde(with = "float_format")]
    pub delta_quality: f64,
    /// Weighted latency and cost penalty (`alpha*dT + beta*dN`).
    #[serde(with = "float_format")]
    pub cost_impact: f64,
    /// Which NEI case produced `nei_index`.
    pub regime: CostRegime,
    /// Whether `efficiency_score` is strictly positive.
    pub is_efficient: bool,
    /// Natural-language justification of the verdict.
    pub explanation: String,
}

impl ComparisonResult {
    /// Keep/reject decision for this comparison.
    pub fn verdict(&self) -> Verdict {
        if self.is_efficient {
            Verdict::Keep
        } else {
            Verdict::Reject
        }
    }
}

/// JSON numbers cannot carry NaN or infinity, so non-finite values travel as
/// strings. `+∞` is a regular NEI index; NaN only appears when a snapshot
/// field was NaN.
pub(crate) mod float_format {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "Infinity" | "inf" => Ok(f64::INFINITY),
                "-Infinity" | "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid number: {}", other))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(nei_index: f64, is_efficient: bool) -> ComparisonResult {
        ComparisonResult {
            efficiency_score: if is_efficient { 32.0 } else { -79.0 },
            nei_index,
            delta_latency: -0.8,
            delta_cost: 0.0,
            delta_quality: 0.0,
            cost_impact: -0.32,
            regime: CostRegime::OptimizationWin,
            is_efficient,
            explanation: "Efficient".to_string(),
        }
    }

    #[test]
    fn test_infinite_index_serializes_as_string() {
        let json = serde_json::to_value(sample(f64::INFINITY, true)).unwrap();
        assert_eq!(json["nei_index"], "Infinity");
        assert_eq!(json["regime"], "optimization_win");

        let back: ComparisonResult = serde_json::from_value(json).unwrap();
        assert!(back.nei_index.is_infinite() && back.nei_index > 0.0);
    }

    #[test]
    fn test_finite_index_serializes_as_number() {
        let json = serde_json::to_value(sample(0.93, true)).unwrap();
        assert_eq!(json["nei_index"], 0.93);
    }

    #[test]
    fn test_unknown_index_text_is_rejected() {
        let mut json = serde_json::to_value(sample(1.0, true)).unwrap();
        json["nei_index"] = serde_json::json!("lots");
        assert!(serde_json::from_value::<ComparisonResult>(json).is_err());
    }

    #[test]
    fn test_nan_fields_round_trip() {
        let mut result = sample(f64::NAN, false);
        result.delta_latency = f64::NAN;
        result.efficiency_score = f64::NAN;
        result.cost_impact = f64::NEG_INFINITY;

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["delta_latency"], "NaN");
        assert_eq!(json["cost_impact"], "-Infinity");
        assert_eq!(json["delta_cost"], 0.0);

        let back: ComparisonResult = serde_json::from_value(json).unwrap();
        assert!(back.delta_latency.is_nan());
        assert!(back.efficiency_score.is_nan());
        assert!(back.nei_index.is_nan());
        assert_eq!(back.cost_impact, f64::NEG_INFINITY);
    }

    #[test]
    fn test_verdict() {
        assert_eq!(sample(1.0, true).verdict(), Verdict::Keep);
        assert_eq!(sample(1.0, false).verdict(), Verdict::Reject);
        assert_eq!(Verdict::Reject.to_string(), "REJECT");
    }
}
