//! Library side of the `custcheck` command.
//!
//! The binary wires these together; tests drive them directly.

pub mod logging;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod sink;

pub use output::AcceptedWriter;
pub use pipeline::{BatchConfig, BatchSummary, FileSummary, run_batch, run_sources};
pub use sink::{DiagnosticSink, FileSink, MemorySink};
