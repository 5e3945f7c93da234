//! I/O operations for comparison plans and records.
//!
//! This module reads comparison plans and writes records and markdown
//! reports to an output directory.

use crate::markdown;
use crate::result::ComparisonRecord;
use nei_core::{EfficiencyCalculator, NodeComparisonInput, Weights};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default output directory path.
pub const OUTPUT_DIR: &str = "nei-output";

/// Raw per-record directory, relative to the output directory.
pub const RAW_DIR: &str = "raw";

/// Combined JSON file name.
pub const RECORDS_FILE: &str = "all_results.json";

/// Summary file name.
pub const SUMMARY_FILE: &str = "summary.md";

/// Detailed report file name.
pub const REPORT_FILE: &str = "report.md";

/// A batch of node comparisons read from JSON.
///
/// ```json
/// {
///   "weights": { "alpha": 0.4, "beta": 0.2, "gamma": 0.4 },
///   "nodes": [
///     { "name": "VectorStore",
///       "baseline":  { "latency": 0.5, "cost": 0, "quality": 0.9 },
///       "candidate": { "latency": 0.1, "cost": 0, "quality": 0.9 } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonPlan {
    /// Weights for the plan; falls back to the caller's weights when absent.
    #[serde(default)]
    pub weights: Option<Weights>,
    /// The nodes to compare.
    pub nodes: Vec<NodeComparisonInput>,
}

impl ComparisonPlan {
    /// Compute a record per node using the plan's weights, or `fallback`.
    pub fn run(&self, fallback: Weights) -> Vec<ComparisonRecord> {
        let calc = EfficiencyCalculator::new(self.weights.unwrap_or(fallback));
        self.nodes
            .iter()
            .map(|node| ComparisonRecord::compute(&node.name, &calc, node.baseline, node.candidate))
            .collect()
    }
}

fn invalid_data(e: serde_json::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

/// Ensure the output directories exist.
pub fn ensure_output_dirs(dir: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(dir.as_ref().join(RAW_DIR))
}

/// Read a comparison plan from a JSON file.
pub fn read_plan(path: impl AsRef<Path>) -> io::Result<ComparisonPlan> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(invalid_data)
}

/// Write records to a JSON file.
pub fn write_records_json(records: &[ComparisonRecord], path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(invalid_data)?;
    fs::write(path, json)
}

/// Read records from a JSON file.
pub fn read_records_json(path: impl AsRef<Path>) -> io::Result<Vec<ComparisonRecord>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(invalid_data)
}

/// Write one record to the raw directory, named after its label.
pub fn write_raw_record(dir: impl AsRef<Path>, record: &ComparisonRecord) -> io::Result<PathBuf> {
    let path = dir
        .as_ref()
        .join(RAW_DIR)
        .join(format!("{}.json", record.label.replace(&['/', '\\'][..], "_")));
    let json = serde_json::to_string_pretty(record).map_err(invalid_data)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Write the markdown summary.
pub fn write_summary(dir: impl AsRef<Path>, records: &[ComparisonRecord]) -> io::Result<()> {
    fs::write(dir.as_ref().join(SUMMARY_FILE), markdown::generate_summary(records))
}

/// Write raw records, the combined JSON, the summary and the detailed report.
pub fn write_all_outputs(dir: impl AsRef<Path>, records: &[ComparisonRecord]) -> io::Result<()> {
    let dir = dir.as_ref();
    ensure_output_dirs(dir)?;

    for record in records {
        let path = write_raw_record(dir, record)?;
        debug!(path = %path.display(), "wrote raw record");
    }

    write_records_json(records, dir.join(RECORDS_FILE))?;
    write_summary(dir, records)?;
    fs::write(dir.join(REPORT_FILE), markdown::generate_detailed_report(records))?;

    info!(dir = %dir.display(), count = records.len(), "wrote comparison outputs");
    Ok(())
}
