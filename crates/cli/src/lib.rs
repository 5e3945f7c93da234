//! CLI for the Node Efficiency Index.
//!
//! This crate provides the `nei` command: single comparisons, batch
//! comparisons from a JSON plan, and the built-in scenarios.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use nei_core::{
    ComparisonResult, EfficiencyCalculator, LogSettings, MetricSnapshot, Settings, Verdict,
    Weights,
};
use nei_core::settings::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use nei_report::markdown::{format_delta, format_index};
use nei_report::{io as report_io, ComparisonRecord, Scenario};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Node Efficiency Index CLI.
#[derive(Parser, Debug)]
#[command(name = "nei")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to ./nei.toml when present).
    #[arg(short, long, global = true, env = "NEI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject negative or non-finite snapshot values.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompareFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Output format for batch comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BatchFormat {
    /// One row per node.
    Table,
    /// Pretty-printed JSON records.
    Json,
    /// Markdown summary table.
    Markdown,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare a candidate snapshot against a baseline.
    ///
    /// Snapshots are given as `latency,cost,quality`.
    Compare {
        /// Baseline snapshot, e.g. `1.5,0.002,0.80`.
        #[arg(short, long, allow_hyphen_values = true)]
        baseline: MetricSnapshot,

        /// Candidate snapshot, e.g. `3.0,0.030,0.85`.
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        candidate: MetricSnapshot,

        /// Latency sensitivity (overrides settings).
        #[arg(long)]
        alpha: Option<f64>,

        /// Cost sensitivity (overrides settings).
        #[arg(long)]
        beta: Option<f64>,

        /// Quality sensitivity (overrides settings).
        #[arg(long)]
        gamma: Option<f64>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = CompareFormat::Text)]
        format: CompareFormat,
    },

    /// Compare every node of a JSON plan.
    Batch {
        /// Path to the plan file.
        plan: PathBuf,

        /// Also write JSON and markdown reports to this directory.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = BatchFormat::Table)]
        format: BatchFormat,
    },

    /// Run the built-in illustrative scenarios.
    Scenarios {
        /// Also write JSON and markdown reports to this directory.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print each comparison's explanation.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the effective settings.
    Status {
        /// Show where settings are read from.
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    init_tracing(&settings.log);
    debug!(?settings, "loaded settings");

    let stdout = std::io::stdout();
    execute(cli, &settings, &mut stdout.lock())
}

/// Install the global tracing subscriber. `RUST_LOG` overrides `log.level`.
pub fn init_tracing(log: &LogSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Execute a parsed command, writing user-facing output to `out`.
pub fn execute(cli: Cli, settings: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
    let strict = cli.strict || settings.strict;

    match cli.command {
        Commands::Compare {
            baseline,
            candidate,
            alpha,
            beta,
            gamma,
            format,
        } => {
            let weights = Weights {
                alpha: alpha.unwrap_or(settings.weights.alpha),
                beta: beta.unwrap_or(settings.weights.beta),
                gamma: gamma.unwrap_or(settings.weights.gamma),
            };
            let calc = EfficiencyCalculator::new(weights);

            let result = if strict {
                calc.compute_checked(&baseline, &candidate)?
            } else {
                calc.compute(&baseline, &candidate)
            };

            match format {
                CompareFormat::Text => write!(out, "{}", render_comparison(&result))?,
                CompareFormat::Json => {
                    let record = ComparisonRecord::from_result(
                        "compare", weights, baseline, candidate, result,
                    );
                    writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
                }
            }
            Ok(())
        }

        Commands::Batch {
            plan: plan_path,
            output,
            format,
        } => {
            let plan = report_io::read_plan(&plan_path)
                .with_context(|| format!("failed to read plan {}", plan_path.display()))?;

            if strict {
                for node in &plan.nodes {
                    node.baseline
                        .validate()
                        .and_then(|_| node.candidate.validate())
                        .with_context(|| format!("node {}", node.name))?;
                }
            }

            let records = plan.run(settings.weights);
            info!(count = records.len(), "compared plan nodes");

            match format {
                BatchFormat::Table => write!(out, "{}", render_table(&records))?,
                BatchFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?
                }
                BatchFormat::Markdown => {
                    write!(out, "{}", nei_report::markdown::generate_summary(&records))?
                }
            }

            if let Some(dir) = output {
                report_io::write_all_outputs(&dir, &records)
                    .with_context(|| format!("failed to write reports to {}", dir.display()))?;
                writeln!(out, "Results written to {}", dir.display())?;
            }
            Ok(())
        }

        Commands::Scenarios { output, verbose } => {
            let mut all = Vec::new();

            for scenario in nei_report::builtin_scenarios() {
                let records = scenario.run();
                write!(out, "{}", render_scenario(&scenario, &records, verbose))?;
                all.extend(records);
            }

            if let Some(dir) = output {
                report_io::write_all_outputs(&dir, &all)
                    .with_context(|| format!("failed to write reports to {}", dir.display()))?;
                writeln!(out, "Results written to {}", dir.display())?;
            }
            Ok(())
        }

        Commands::Status { detailed } => {
            let weights = settings.weights;
            writeln!(out, "Node Efficiency Index")?;
            writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;
            writeln!(
                out,
                "Weights: alpha={} beta={} gamma={} (sum {:.2})",
                weights.alpha,
                weights.beta,
                weights.gamma,
                weights.sum()
            )?;
            if let Some(advisory) = weights.advisory() {
                writeln!(out, "Advisory: {}", advisory)?;
            }
            writeln!(out, "Strict: {}", strict)?;

            if detailed {
                writeln!(out, "\nSettings sources (lowest precedence first):")?;
                writeln!(out, "  - built-in defaults")?;
                match &cli.config {
                    Some(path) => writeln!(out, "  - {}", path.display())?,
                    None => writeln!(out, "  - {} (if present)", DEFAULT_CONFIG_FILE)?,
                }
                writeln!(out, "  - {}_* environment variables", ENV_PREFIX)?;
                writeln!(out, "\nLog level: {} (json: {})", settings.log.level, settings.log.json)?;
            }
            Ok(())
        }
    }
}

fn colored_verdict(verdict: Verdict) -> String {
    match verdict {
        Verdict::Keep => verdict.to_string().green().bold().to_string(),
        Verdict::Reject => verdict.to_string().red().bold().to_string(),
    }
}

/// Render one comparison as human-readable text.
pub fn render_comparison(result: &ComparisonResult) -> String {
    format!(
        "Delta Quality: {}\n\
         Delta Cost:    {}\n\
         Delta Latency: {}\n\
         \n\
         Efficiency Score: {:.2}\n\
         NEI Index:        {} ({})\n\
         Verdict: {} - {}\n",
        format_delta(result.delta_quality),
        format_delta(result.delta_cost),
        format_delta(result.delta_latency),
        result.efficiency_score,
        format_index(result.nei_index),
        result.regime,
        colored_verdict(result.verdict()),
        result.explanation,
    )
}

/// Render records as a fixed-width table, one row per record.
pub fn render_table(records: &[ComparisonRecord]) -> String {
    let mut table = format!("{:<24} | {:>10} | {:>8} | {}\n", "Node", "Score", "NEI", "Verdict");
    table.push_str(&"-".repeat(58));
    table.push('\n');

    for record in records {
        table.push_str(&format!(
            "{:<24} | {:>10.2} | {:>8} | {}\n",
            record.label,
            record.result.efficiency_score,
            format_index(record.result.nei_index),
            colored_verdict(record.verdict())
        ));
    }

    table
}

fn render_scenario(scenario: &Scenario, records: &[ComparisonRecord], verbose: bool) -> String {
    let weights = scenario.weights;
    let mut text = format!(
        "--- {}: {} (alpha={} beta={} gamma={}) ---\n",
        scenario.id, scenario.description, weights.alpha, weights.beta, weights.gamma
    );
    text.push_str(&render_table(records));

    if verbose {
        for record in records {
            text.push_str(&format!("  {}: {}\n", record.label, record.result.explanation));
        }
    }

    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run_args(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        execute(cli, &Settings::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from([
            "nei",
            "compare",
            "--baseline",
            "1.5,0.002,0.80",
            "--candidate",
            "3.0,0.030,0.85",
            "--alpha",
            "0.2",
        ])
        .unwrap();

        match cli.command {
            Commands::Compare {
                baseline,
                alpha,
                beta,
                format,
                ..
            } => {
                assert_eq!(baseline, MetricSnapshot::new(1.5, 0.002, 0.80));
                assert_eq!(alpha, Some(0.2));
                assert_eq!(beta, None);
                assert_eq!(format, CompareFormat::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_snapshot() {
        let result = Cli::try_parse_from(["nei", "compare", "-b", "1.5,0.002", "-n", "1,1,1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_compare_text_output() {
        let text = run_args(&[
            "nei", "compare", "-b", "1.5,0.002,0.80", "-n", "3.0,0.030,0.85", "--alpha", "0.2",
            "--beta", "0.6", "--gamma", "0.2",
        ]);

        assert!(text.contains("Delta Quality: +6.2%"));
        assert!(text.contains("Delta Latency: +100.0%"));
        assert!(text.contains("Efficiency Score: -858.75"));
        assert!(text.contains("Inefficient"));
    }

    #[test]
    fn test_compare_json_output() {
        let text = run_args(&[
            "nei", "compare", "-b", "0.5,0,0.9", "-n", "0.1,0,0.9", "--format", "json",
        ]);

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["result"]["nei_index"], "Infinity");
        assert_eq!(json["result"]["is_efficient"], true);
    }

    #[test]
    fn test_strict_compare_json_output() {
        let text = run_args(&[
            "nei", "--strict", "compare", "-b", "1.5,0.002,0.80", "-n", "3.0,0.030,0.85",
            "--alpha", "0.2", "--beta", "0.6", "--gamma", "0.2", "--format", "json",
        ]);

        let record: ComparisonRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(record.label, "compare");
        assert_eq!(record.weights, Weights::new(0.2, 0.6, 0.2));
        assert!((record.result.efficiency_score + 858.75).abs() < 1e-2);
        assert!(!record.result.is_efficient);
    }

    #[test]
    fn test_strict_rejects_negative_snapshot() {
        let cli = Cli::try_parse_from([
            "nei", "--strict", "compare", "-b", "1,1,1", "-n", "-1,1,1",
        ])
        .unwrap();

        let mut out = Vec::new();
        let err = execute(cli, &Settings::default(), &mut out).unwrap_err();
        assert!(err.to_string().contains("latency"));
    }

    #[test]
    fn test_batch_table_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let plan = dir.path().join("plan.json");
        fs::write(
            &plan,
            r#"{ "weights": { "alpha": 0.4, "beta": 0.2, "gamma": 0.4 },
                 "nodes": [ { "name": "Summarizer",
                              "baseline":  { "latency": 2.0, "cost": 1000, "quality": 0.85 },
                              "candidate": { "latency": 1.0, "cost": 500,  "quality": 0.84 } } ] }"#,
        )
        .unwrap();
        let reports = dir.path().join("out");

        let text = run_args(&[
            "nei",
            "batch",
            plan.to_str().unwrap(),
            "--output",
            reports.to_str().unwrap(),
        ]);

        assert!(text.contains("Summarizer"));
        assert!(text.contains("29.53"));
        assert!(reports.join(report_io::SUMMARY_FILE).is_file());
    }

    #[test]
    fn test_batch_missing_plan_is_an_error() {
        let cli = Cli::try_parse_from(["nei", "batch", "/nonexistent/plan.json"]).unwrap();
        let mut out = Vec::new();
        let err = execute(cli, &Settings::default(), &mut out).unwrap_err();
        assert!(err.to_string().contains("failed to read plan"));
    }

    #[test]
    fn test_scenarios_output() {
        let text = run_args(&["nei", "scenarios", "--verbose"]);
        assert!(text.contains("--- model-swap"));
        assert!(text.contains("dashboard/VectorStore"));
        assert!(text.contains("∞"));
    }

    #[test]
    fn test_status_reports_weights() {
        let text = run_args(&["nei", "status", "--detailed"]);
        assert!(text.contains("alpha=0.33 beta=0.33 gamma=0.34"));
        assert!(!text.contains("Advisory"));
        assert!(text.contains("nei.toml (if present)"));
    }
}
