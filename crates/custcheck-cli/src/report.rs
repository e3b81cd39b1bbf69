//! JSON run report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::pipeline::{BatchConfig, BatchSummary, FileSummary};

/// Machine-readable description of one run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub input_dir: &'a Path,
    pub output_file: &'a Path,
    pub log_file: &'a Path,
    pub valid_rows: usize,
    pub skipped_rows: usize,
    pub failed_files: usize,
    pub duration_ms: u128,
    pub files: &'a [FileSummary],
}

impl<'a> RunReport<'a> {
    pub fn new(config: &'a BatchConfig, summary: &'a BatchSummary) -> Self {
        Self {
            input_dir: &config.input_dir,
            output_file: &config.output_file,
            log_file: &config.log_file,
            valid_rows: summary.valid_rows,
            skipped_rows: summary.skipped_rows,
            failed_files: summary.failed_files,
            duration_ms: summary.elapsed.as_millis(),
            files: &summary.files,
        }
    }
}

/// Writes the run report as pretty-printed JSON.
pub fn write_run_report(
    path: &Path,
    config: &BatchConfig,
    summary: &BatchSummary,
) -> Result<PathBuf> {
    let file = File::create(path)
        .with_context(|| format!("create run report: {}", path.display()))?;
    let report = RunReport::new(config, summary);
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report)
        .with_context(|| format!("write run report: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush run report: {}", path.display()))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use custcheck_model::ProvenanceDate;
    use std::time::Duration;

    #[test]
    fn report_serializes_counts_and_files() {
        let config = BatchConfig::new("data", Path::new("Output"), Path::new("Logs"));
        let summary = BatchSummary {
            files: vec![FileSummary {
                path: PathBuf::from("data/2017/1/1/a.csv"),
                date: ProvenanceDate::new("2017", "1", "1"),
                valid_rows: 3,
                skipped_rows: 1,
                error: None,
            }],
            valid_rows: 3,
            skipped_rows: 1,
            failed_files: 0,
            elapsed: Duration::from_millis(42),
        };

        let json = serde_json::to_value(RunReport::new(&config, &summary)).unwrap();
        assert_eq!(json["valid_rows"], 3);
        assert_eq!(json["duration_ms"], 42);
        assert_eq!(json["output_file"], "Output/all_valid_customers.csv");
        assert_eq!(json["files"][0]["date"]["year"], "2017");
        assert!(json["files"][0].get("error").is_none());
    }
}
