//! Consolidated CSV of accepted records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Writer, WriterBuilder};
use custcheck_model::{CustomerField, CustomerRecord, ProvenanceDate};

/// Default output file name inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "all_valid_customers.csv";

/// Header of the date column appended after the customer fields.
pub const DATE_COLUMN: &str = "Date";

/// Writer for accepted rows, held open for the whole run.
pub struct AcceptedWriter<W: Write> {
    inner: Writer<W>,
    rows: usize,
}

impl AcceptedWriter<File> {
    /// Creates (or truncates) `path` and writes the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("create output file: {}", path.display()))?;
        Self::new(file).with_context(|| format!("write header: {}", path.display()))
    }
}

impl<W: Write> AcceptedWriter<W> {
    /// Wraps `writer` and writes the header row.
    pub fn new(writer: W) -> csv::Result<Self> {
        let mut inner = WriterBuilder::new().delimiter(b',').from_writer(writer);
        let mut header: Vec<&str> = CustomerField::ALL
            .iter()
            .map(|field| field.header())
            .collect();
        header.push(DATE_COLUMN);
        inner.write_record(&header)?;
        Ok(Self { inner, rows: 0 })
    }

    /// Appends one accepted record followed by its `year/month/day` date.
    pub fn write(&mut self, record: &CustomerRecord, date: &ProvenanceDate) -> csv::Result<()> {
        let date = date.to_string();
        let row = record
            .fields()
            .map(|(_, value)| value)
            .chain(std::iter::once(date.as_str()));
        self.inner.write_record(row)?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|err| anyhow::anyhow!("flush output: {}", err.error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CustomerRecord {
        CustomerRecord::from_values([
            "Jane",
            "",
            "12",
            "Elm St, Unit 4",
            "Ottawa",
            "Ontario",
            "K1A 0B1",
            "Canada",
            "613-555-0100",
            "jane@example.ca",
        ])
    }

    #[test]
    fn header_only_when_nothing_accepted() {
        let writer = AcceptedWriter::new(Vec::new()).unwrap();
        let bytes = writer.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "First Name,Last Name,Street Number,Street,City,Province,Postal Code,Country,Phone Number,email Address,Date\n"
        );
    }

    #[test]
    fn rows_carry_date_and_quote_commas() {
        let mut writer = AcceptedWriter::new(Vec::new()).unwrap();
        writer
            .write(&record(), &ProvenanceDate::new("2017", "1", "9"))
            .unwrap();
        assert_eq!(writer.rows(), 1);
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let line = text.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "Jane,,12,\"Elm St, Unit 4\",Ottawa,Ontario,K1A 0B1,Canada,613-555-0100,jane@example.ca,2017/1/9"
        );
    }
}
