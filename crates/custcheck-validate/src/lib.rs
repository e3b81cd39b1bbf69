//! Customer record validation.
//!
//! [`fields`] holds one syntactic check per customer field; [`validate`]
//! runs all of them against a record and builds the rejection diagnostic.
//!
//! ```ignore
//! use custcheck_model::{CustomerRecord, ProvenanceDate};
//! use custcheck_validate::validate;
//!
//! let verdict = validate(&record, &ProvenanceDate::new("2018", "3", "15"));
//! if let Some(line) = verdict.diagnostic() {
//!     println!("{line}");
//! }
//! ```

pub mod fields;
mod record;

pub use fields::{FieldValidator, is_blank, is_valid_field, validator_for};
pub use record::{Rejection, Verdict, reason, validate};
