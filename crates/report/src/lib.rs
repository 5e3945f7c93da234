//! Comparison records and reports for the Node Efficiency Index.
//!
//! This crate wraps calculator output in labelled records, ships the
//! built-in illustrative scenarios, and writes JSON and markdown reports.
//!
//! # Quick Start
//!
//! ```no_run
//! use nei_report::run_all_scenarios;
//!
//! let records = run_all_scenarios();
//!
//! for record in &records {
//!     println!("{}: {:.2} {}", record.label, record.result.efficiency_score, record.verdict());
//! }
//! ```
//!
//! # Modules
//!
//! - [`result`] - The [`ComparisonRecord`] struct
//! - [`scenarios`] - Built-in illustrative scenarios
//! - [`io`] - Reading plans and writing records
//! - [`markdown`] - Markdown report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod io;
pub mod markdown;
pub mod result;
pub mod scenarios;

pub use io::ComparisonPlan;
pub use result::ComparisonRecord;
pub use scenarios::{builtin_scenarios, Scenario};

use std::path::Path;

/// Run every built-in scenario and return one record per comparison.
pub fn run_all_scenarios() -> Vec<ComparisonRecord> {
    builtin_scenarios()
        .iter()
        .flat_map(Scenario::run)
        .collect()
}

/// Run all scenarios and write outputs under `dir`.
///
/// This function writes:
/// - `<dir>/raw/` - Individual JSON files per comparison
/// - `<dir>/all_results.json` - Combined JSON file
/// - `<dir>/summary.md` - Markdown summary
/// - `<dir>/report.md` - Detailed markdown report
///
/// # Errors
///
/// Returns an `io::Error` if writing output files fails.
pub fn run_and_write_all(dir: impl AsRef<Path>) -> std::io::Result<Vec<ComparisonRecord>> {
    let records = run_all_scenarios();
    io::write_all_outputs(dir, &records)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_all_scenarios_returns_every_comparison() {
        let records = run_all_scenarios();
        let expected: usize = builtin_scenarios().iter().map(|s| s.nodes.len()).sum();
        assert_eq!(records.len(), expected);
        assert_eq!(records[0].label, "model-swap/generator");
    }

    #[test]
    fn test_run_and_write_all() {
        let dir = tempfile::tempdir().unwrap();
        let records = run_and_write_all(dir.path()).unwrap();
        let back = io::read_records_json(dir.path().join(io::RECORDS_FILE)).unwrap();
        assert_eq!(back.len(), records.len());
    }
}
