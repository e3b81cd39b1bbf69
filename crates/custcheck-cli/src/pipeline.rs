//! Batch driver.
//!
//! Walks every CSV under the input root in path order and, row by row:
//! 1. **Decode**: header-matched fields into a `CustomerRecord`
//! 2. **Validate**: run all field checks
//! 3. **Route**: accepted rows to the output CSV, everything else to the
//!    diagnostic sink
//!
//! No row failure stops the batch. The three summary lines are written to
//! the sink once all files are done.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use custcheck_ingest::{CsvSource, discover_sources, open_customer_csv};
use custcheck_model::ProvenanceDate;
use custcheck_validate::{Verdict, validate};
use serde::Serialize;
use tracing::{debug, info, info_span, trace, warn};

use crate::logging::redact_value;
use crate::output::{AcceptedWriter, OUTPUT_FILE_NAME};
use crate::sink::DiagnosticSink;

/// Default directory for the consolidated output.
pub const DEFAULT_OUTPUT_DIR: &str = "Output";
/// Default directory for the rejection log.
pub const DEFAULT_LOGS_DIR: &str = "Logs";
/// Rejection log file name inside the logs directory.
pub const LOG_FILE_NAME: &str = "log.txt";

/// Resolved locations for one run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub log_file: PathBuf,
}

impl BatchConfig {
    /// Places `all_valid_customers.csv` and `log.txt` in the given directories.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: &Path, logs_dir: &Path) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_file: output_dir.join(OUTPUT_FILE_NAME),
            log_file: logs_dir.join(LOG_FILE_NAME),
        }
    }

    /// Creates the output and log directories if they do not exist.
    pub fn prepare_dirs(&self) -> Result<()> {
        for file in [&self.output_file, &self.log_file] {
            if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create directory: {}", parent.display()))?;
            }
        }
        Ok(())
    }
}

/// Counts for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub date: ProvenanceDate,
    pub valid_rows: usize,
    pub skipped_rows: usize,
    /// Set when the file could not be opened at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub files: Vec<FileSummary>,
    pub valid_rows: usize,
    pub skipped_rows: usize,
    pub failed_files: usize,
    pub elapsed: Duration,
}

/// Processes every CSV file under `input_dir`.
///
/// # Errors
///
/// Fails if the input directory cannot be listed. Row and file problems are
/// logged to `sink` and counted instead. A failed write to `sink` itself is
/// fatal and stops the batch; see [`run_sources`].
pub fn run_batch<W: Write>(
    input_dir: &Path,
    output: &mut AcceptedWriter<W>,
    sink: &mut dyn DiagnosticSink,
) -> Result<BatchSummary> {
    let span = info_span!("batch", input_dir = %input_dir.display());
    let _guard = span.enter();
    let started = Instant::now();

    let sources = discover_sources(input_dir).context("list csv files")?;
    info!(file_count = sources.len(), "discovered input files");

    run_sources(&sources, started, output, sink)
}

/// Processes already discovered sources in the given order, then writes the
/// three summary lines to `sink`. Execution time is measured from `started`.
///
/// A source that cannot be opened is logged as `Error reading CSV: ...`,
/// counted in `failed_files`, and does not stop the remaining sources.
///
/// # Errors
///
/// Fails if `sink` rejects a write or flush, or if the output cannot be
/// flushed. These abort the batch; they are never counted as skipped rows.
pub fn run_sources<W: Write>(
    sources: &[CsvSource],
    started: Instant,
    output: &mut AcceptedWriter<W>,
    sink: &mut dyn DiagnosticSink,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for source in sources {
        let file = process_file(source, output, sink)?;
        summary.valid_rows += file.valid_rows;
        summary.skipped_rows += file.skipped_rows;
        if file.error.is_some() {
            summary.failed_files += 1;
        }
        summary.files.push(file);
    }
    output.flush().context("flush output")?;

    summary.elapsed = started.elapsed();
    for line in summary_lines(&summary) {
        sink.record(&line).context("write summary")?;
    }
    sink.flush().context("flush diagnostic log")?;

    info!(
        valid_rows = summary.valid_rows,
        skipped_rows = summary.skipped_rows,
        failed_files = summary.failed_files,
        duration_ms = summary.elapsed.as_millis(),
        "batch complete"
    );
    Ok(summary)
}

fn process_file<W: Write>(
    source: &CsvSource,
    output: &mut AcceptedWriter<W>,
    sink: &mut dyn DiagnosticSink,
) -> Result<FileSummary> {
    let span = info_span!("file", path = %source.path.display(), date = %source.date);
    let _guard = span.enter();

    let mut file = FileSummary {
        path: source.path.clone(),
        date: source.date.clone(),
        valid_rows: 0,
        skipped_rows: 0,
        error: None,
    };

    let rows = match open_customer_csv(&source.path) {
        Ok(rows) => rows,
        Err(error) => {
            warn!(%error, "skipping unreadable file");
            sink.record(&read_error_line(&error))
                .context("write diagnostic")?;
            file.error = Some(error.to_string());
            return Ok(file);
        }
    };

    for row in rows {
        let record = match row {
            Ok(record) => record,
            Err(error) => {
                file.skipped_rows += 1;
                debug!(line = ?error.line, "unparseable row");
                sink.record(&read_error_line(&error.message))
                    .context("write diagnostic")?;
                continue;
            }
        };

        match validate(&record, &source.date) {
            Verdict::Valid => match output.write(&record, &source.date) {
                Ok(()) => {
                    file.valid_rows += 1;
                    trace!(first_name = redact_value(record.first_name()), "accepted row");
                }
                Err(error) => {
                    file.skipped_rows += 1;
                    warn!(%error, "failed to write accepted row");
                    sink.record(&format!("Error writing output: {error}"))
                        .context("write diagnostic")?;
                }
            },
            Verdict::Invalid(rejection) => {
                file.skipped_rows += 1;
                debug!(
                    failed = ?rejection.failed_fields(),
                    first_name = redact_value(record.first_name()),
                    "rejected row"
                );
                sink.record(rejection.diagnostic())
                    .context("write diagnostic")?;
            }
        }
    }

    info!(
        valid_rows = file.valid_rows,
        skipped_rows = file.skipped_rows,
        "file processed"
    );
    Ok(file)
}

fn read_error_line(message: &impl std::fmt::Display) -> String {
    format!("Error reading CSV: {message}")
}

/// The three closing lines of the rejection log.
pub fn summary_lines(summary: &BatchSummary) -> [String; 3] {
    [
        format!("Total Execution Time: {}", format_elapsed(summary.elapsed)),
        format!("Total Valid Rows: {}", summary.valid_rows),
        format!("Total Skipped Rows: {}", summary.skipped_rows),
    ]
}

/// Formats a duration as `[d.]hh:mm:ss[.fffffff]` (100ns ticks).
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    let ticks = elapsed.subsec_nanos() / 100;

    let mut text = String::new();
    if days > 0 {
        text.push_str(&format!("{days}."));
    }
    text.push_str(&format!("{hours:02}:{minutes:02}:{seconds:02}"));
    if ticks > 0 {
        text.push_str(&format!(".{ticks:07}"));
    }
    text
}
