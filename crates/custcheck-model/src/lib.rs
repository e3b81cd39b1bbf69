//! Customer record data model.
//!
//! - [`CustomerField`]: the ten fields and their header, property and label spellings
//! - [`CustomerRecord`]: one immutable input row
//! - [`ProvenanceDate`]: year/month/day derived from an input file's folders

pub mod field;
pub mod provenance;
pub mod record;

pub use field::CustomerField;
pub use provenance::ProvenanceDate;
pub use record::CustomerRecord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_header_names() {
        let record = CustomerRecord::from_values([
            "Jane", "Doe", "1", "Elm", "Regina", "Saskatchewan", "S4P3Y2", "Canada", "306-555-0101",
            "jane@example.ca",
        ]);
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["First Name"], "Jane");
        assert_eq!(json["email Address"], "jane@example.ca");
    }
}
