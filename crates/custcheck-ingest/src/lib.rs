//! Customer CSV ingestion.
//!
//! # Features
//!
//! - **Discovery**: Find `*.csv` files anywhere under an input root
//! - **Provenance**: Derive year/month/day from the enclosing folder names
//! - **Row decoding**: Read rows into [`custcheck_model::CustomerRecord`] by header name
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use custcheck_ingest::{discover_sources, open_customer_csv};
//!
//! for source in discover_sources(Path::new("CustomerData"))? {
//!     for row in open_customer_csv(&source.path)? {
//!         // row: Result<CustomerRecord, RowError>
//!     }
//! }
//! ```

mod discovery;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{CsvSource, discover_sources, list_csv_files, provenance_date};

// === Row Decoding ===
pub use reader::{CustomerReader, RowError, open_customer_csv};
