//! Model-level tests for field metadata and provenance dates.

use custcheck_model::{CustomerField, CustomerRecord, ProvenanceDate};

#[test]
fn headers_are_unique() {
    let mut headers: Vec<&str> = CustomerField::ALL.iter().map(|f| f.header()).collect();
    headers.sort_unstable();
    headers.dedup();
    assert_eq!(headers.len(), CustomerField::ALL.len());
}

#[test]
fn labels_are_unique() {
    let mut labels: Vec<&str> = CustomerField::ALL.iter().map(|f| f.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), CustomerField::ALL.len());
}

#[test]
fn record_equality_is_by_value() {
    let values = [
        "Jane", "Doe", "1", "Elm", "Halifax", "Nova Scotia", "B3H1A1", "Canada", "902-555-0199",
        "jane@example.ca",
    ];
    assert_eq!(
        CustomerRecord::from_values(values),
        CustomerRecord::from_values(values)
    );
}

#[test]
fn provenance_date_orders_component_wise() {
    let earlier = ProvenanceDate::new("2017", "1", "9");
    let later = ProvenanceDate::new("2017", "10", "1");
    assert!(earlier < later);
}
