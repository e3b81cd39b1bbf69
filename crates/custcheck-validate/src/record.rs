//! Whole-record validation.

use std::fmt::Write as _;

use custcheck_model::{CustomerField, CustomerRecord, ProvenanceDate};
use serde::Serialize;

use crate::fields::is_valid_field;

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Valid,
    Invalid(Rejection),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Failing fields, empty for a valid record.
    pub fn failed_fields(&self) -> &[CustomerField] {
        match self {
            Verdict::Valid => &[],
            Verdict::Invalid(rejection) => &rejection.failed,
        }
    }

    /// Diagnostic line for an invalid record.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(rejection) => Some(&rejection.diagnostic),
        }
    }
}

/// Why a record was rejected, plus a snapshot of everything it contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    failed: Vec<CustomerField>,
    diagnostic: String,
}

impl Rejection {
    /// Failing fields in declaration order.
    pub fn failed_fields(&self) -> &[CustomerField] {
        &self.failed
    }

    /// One `"<label> is invalid"` string per failing field.
    pub fn reasons(&self) -> Vec<String> {
        self.failed.iter().map(|field| reason(*field)).collect()
    }

    /// Full diagnostic line: every field value, the date, and the reasons.
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }
}

/// Reason text for a failing field.
pub fn reason(field: CustomerField) -> String {
    format!("{} is invalid", field.label())
}

/// Check every field of `record`.
///
/// All ten checks always run, so a record can collect several reasons.
pub fn validate(record: &CustomerRecord, date: &ProvenanceDate) -> Verdict {
    let failed: Vec<CustomerField> = record
        .fields()
        .filter(|(field, value)| !is_valid_field(*field, value))
        .map(|(field, _)| field)
        .collect();

    if failed.is_empty() {
        return Verdict::Valid;
    }

    let diagnostic = build_diagnostic(record, date, &failed);
    Verdict::Invalid(Rejection { failed, diagnostic })
}

fn build_diagnostic(
    record: &CustomerRecord,
    date: &ProvenanceDate,
    failed: &[CustomerField],
) -> String {
    let mut message = String::new();
    for (field, value) in record.fields() {
        let _ = write!(message, "{}: {}, ", field.property(), value);
    }
    let _ = write!(message, "Date: {date}, ");
    let reasons: Vec<String> = failed.iter().map(|field| reason(*field)).collect();
    message.push_str("Reason: ");
    message.push_str(&reasons.join(", "));
    message
}
