//! Rejection log sinks.
//!
//! The batch driver reports every skipped row and the closing summary lines
//! through a [`DiagnosticSink`] handed to it by the caller. Each call writes
//! exactly one line.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination for diagnostic lines.
pub trait DiagnosticSink {
    /// Append one line. `line` must not contain the trailing newline.
    fn record(&mut self, line: &str) -> io::Result<()>;

    /// Push buffered lines to their destination.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Appends lines to a text file, one per event.
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    /// Opens `path` for appending, creating the file if needed.
    pub fn append(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagnosticSink for FileSink {
    fn record(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Keeps lines in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
