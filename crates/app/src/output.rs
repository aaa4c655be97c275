//! Report file writing.
//!
//! Sweeps produce two artifacts under the output directory:
//!
//! ```text
//! <out_dir>/
//!   hanoi_report.md
//!   csv/
//!     hanoi_results.csv
//! ```
//!
//! The content comes entirely from the core report's renderers; this module
//! only creates directories and writes bytes. Failures are ordinary I/O
//! errors the caller reports and survives.

use hanoi_sim_core::report::ExperimentReport;
use hanoi_sim_core::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a sweep's artifacts were written.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub markdown: PathBuf,
}

/// Write the CSV and Markdown artifacts for `report` under `out_dir`.
pub fn write_report_files(report: &ExperimentReport, out_dir: &Path) -> Result<ReportPaths> {
    let csv_dir = out_dir.join("csv");
    fs::create_dir_all(&csv_dir)?;

    let csv = csv_dir.join("hanoi_results.csv");
    fs::write(&csv, report.to_csv())?;

    let markdown = out_dir.join("hanoi_report.md");
    fs::write(&markdown, report.to_markdown())?;

    Ok(ReportPaths { csv, markdown })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_sim_core::sweep::run_sweep;

    #[test]
    fn test_writes_both_artifacts() {
        let dir = std::env::temp_dir().join(format!("hanoi-sim-test-{}", std::process::id()));
        let report = run_sweep(4).unwrap();

        let paths = write_report_files(&report, &dir).unwrap();
        let csv = fs::read_to_string(&paths.csv).unwrap();
        let md = fs::read_to_string(&paths.markdown).unwrap();

        assert!(csv.starts_with("n,actual_moves,theoretical_moves,elapsed_ms"));
        assert_eq!(csv.lines().count(), 5);
        assert!(md.contains("| 4 | 15 | 15 |"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
