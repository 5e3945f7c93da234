//! Markdown output generation for comparison records.
//!
//! This module renders comparison records as a summary table or as a
//! per-record detailed report.

use crate::result::ComparisonRecord;
use std::fmt::Write;

/// Render an NEI index, using `∞` for the strict-win sentinel.
pub fn format_index(value: f64) -> String {
    if value == f64::INFINITY {
        "∞".to_string()
    } else if value == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Render a relative delta as a signed percentage.
pub fn format_delta(value: f64) -> String {
    format!("{:+.1}%", value * 100.0)
}

/// Generate a markdown summary table from comparison records.
pub fn generate_summary(records: &[ComparisonRecord]) -> String {
    let mut output = String::new();

    writeln!(output, "# Efficiency Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Label | Score | NEI | Regime | Verdict |").unwrap();
    writeln!(output, "|-------|------:|----:|--------|---------|").unwrap();

    for record in records {
        writeln!(
            output,
            "| {} | {:.2} | {} | {} | {} |",
            record.label,
            record.result.efficiency_score,
            format_index(record.result.nei_index),
            record.result.regime,
            record.verdict()
        )
        .unwrap();
    }

    let kept = records.iter().filter(|r| r.result.is_efficient).count();

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(
        output,
        "Total comparisons: {} ({} keep, {} reject)",
        records.len(),
        kept,
        records.len() - kept
    )
    .unwrap();

    output
}

/// Generate a detailed markdown report with deltas and explanations.
pub fn generate_detailed_report(records: &[ComparisonRecord]) -> String {
    let mut output = String::new();

    writeln!(output, "# Detailed Efficiency Report").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();

    for record in records {
        let result = &record.result;

        writeln!(output, "## {}", record.label).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Timestamp:** {}", record.timestamp.to_rfc3339()).unwrap();
        writeln!(
            output,
            "**Weights:** alpha={} beta={} gamma={}",
            record.weights.alpha, record.weights.beta, record.weights.gamma
        )
        .unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Axis | Baseline | Candidate | Delta |").unwrap();
        writeln!(output, "|------|---------:|----------:|------:|").unwrap();
        for (axis, base, cand, delta) in [
            ("Latency", record.baseline.latency, record.candidate.latency, result.delta_latency),
            ("Cost", record.baseline.cost, record.candidate.cost, result.delta_cost),
            ("Quality", record.baseline.quality, record.candidate.quality, result.delta_quality),
        ] {
            writeln!(output, "| {} | {} | {} | {} |", axis, base, cand, format_delta(delta))
                .unwrap();
        }
        writeln!(output).unwrap();
        writeln!(output, "**Efficiency score:** {:.2}", result.efficiency_score).unwrap();
        writeln!(
            output,
            "**NEI index:** {} ({})",
            format_index(result.nei_index),
            result.regime
        )
        .unwrap();
        writeln!(output, "**Verdict:** {} - {}", record.verdict(), result.explanation).unwrap();
        writeln!(output).unwrap();
    }

    output
}
