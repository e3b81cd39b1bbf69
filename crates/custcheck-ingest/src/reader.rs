//! Row-by-row decoding of customer CSV files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{DeserializeRecordsIntoIter, ReaderBuilder};
use custcheck_model::CustomerRecord;

use crate::error::{IngestError, Result};

/// A row that could not be decoded into a [`CustomerRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number, when the parser knows it.
    pub line: Option<u64>,
    /// Parser-supplied description.
    pub message: String,
}

impl From<csv::Error> for RowError {
    fn from(err: csv::Error) -> Self {
        Self {
            line: err.position().map(csv::Position::line),
            message: err.to_string(),
        }
    }
}

/// Streams customer records out of a CSV source.
///
/// Columns are matched to fields by exact header name; unknown columns are
/// ignored. Short rows and rows missing a required column come back as
/// [`RowError`] without ending the iteration.
pub struct CustomerReader<R> {
    rows: DeserializeRecordsIntoIter<R, CustomerRecord>,
}

impl<R: Read> CustomerReader<R> {
    /// Wrap any reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            rows: builder().from_reader(reader).into_deserialize(),
        }
    }
}

impl<R: Read> Iterator for CustomerReader<R> {
    type Item = std::result::Result<CustomerRecord, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows
            .next()
            .map(|result| result.map_err(RowError::from))
    }
}

/// Opens a customer CSV file for row-by-row reading.
pub fn open_customer_csv(path: &Path) -> Result<CustomerReader<File>> {
    let reader = builder()
        .from_path(path)
        .map_err(|source| IngestError::CsvOpen {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(CustomerReader {
        rows: reader.into_deserialize(),
    })
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).delimiter(b',').flexible(true);
    builder
}
