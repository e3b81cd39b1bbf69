//! Record-level validation properties.

use custcheck_model::{CustomerField, CustomerRecord, ProvenanceDate};
use custcheck_validate::fields::{
    is_valid_email_address, is_valid_last_name, is_valid_postal_code,
};
use custcheck_validate::{Verdict, validate};
use proptest::prelude::*;

fn valid_record() -> CustomerRecord {
    CustomerRecord::from_values([
        "Marie",
        "Gagnon",
        "1600",
        "Boul. René-Lévesque O.",
        "Montréal",
        "Québec",
        "H3H 1P3",
        "Canada",
        "514-555-0123",
        "marie.gagnon@example.qc.ca",
    ])
}

fn invalid_value(field: CustomerField) -> &'static str {
    match field {
        CustomerField::FirstName => "",
        CustomerField::LastName => "J0hn",
        CustomerField::StreetNumber => "12a",
        CustomerField::Street => "Main St #4",
        CustomerField::City => "C1ty",
        CustomerField::Province => "",
        CustomerField::PostalCode => "k1a0b1",
        CustomerField::Country => "   ",
        CustomerField::PhoneNumber => "call me",
        CustomerField::EmailAddress => "a@b",
    }
}

fn date() -> ProvenanceDate {
    ProvenanceDate::new("2019", "11", "02")
}

#[test]
fn all_valid_fields_give_valid_verdict() {
    assert_eq!(validate(&valid_record(), &date()), Verdict::Valid);
}

#[test]
fn each_single_invalid_field_yields_one_reason() {
    for field in CustomerField::ALL {
        let record = valid_record().with_value(field, invalid_value(field));
        let Verdict::Invalid(rejection) = validate(&record, &date()) else {
            panic!("{field} should be rejected");
        };
        assert_eq!(rejection.failed_fields(), &[field]);
        assert_eq!(rejection.reasons(), vec![format!("{} is invalid", field.label())]);
    }
}

#[test]
fn documented_field_examples() {
    assert!(is_valid_last_name(""));
    assert!(is_valid_last_name(" \t "));
    assert!(!is_valid_last_name("J0hn"));

    assert!(is_valid_postal_code("K1A 0B1"));
    assert!(!is_valid_postal_code("k1a0b1"));
    assert!(!is_valid_postal_code("K1A0B"));

    assert!(is_valid_email_address("a@b.co"));
    assert!(!is_valid_email_address("a@b"));
    assert!(!is_valid_email_address(""));
}

#[test]
fn diagnostic_keeps_passing_values_and_reasons_joined() {
    let record = valid_record()
        .with_value(CustomerField::StreetNumber, "")
        .with_value(CustomerField::PhoneNumber, "n/a");
    let verdict = validate(&record, &ProvenanceDate::new("foo", "bar", "baz"));
    let diagnostic = verdict.diagnostic().expect("diagnostic");
    assert!(diagnostic.starts_with("FirstName: Marie, LastName: Gagnon, StreetNumber: , "));
    assert!(diagnostic.contains("emailAddress: marie.gagnon@example.qc.ca, "));
    assert!(diagnostic.contains("Date: foo/bar/baz, "));
    assert!(diagnostic.ends_with("Reason: Street Number is invalid, Phone Number is invalid"));
}

#[test]
fn verdict_depends_only_on_values() {
    let record = valid_record().with_value(CustomerField::City, "");
    let first = validate(&record, &date());
    let second = validate(&record.clone(), &date());
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn reasons_follow_field_order(mask in proptest::collection::vec(any::<bool>(), 10)) {
        let mut record = valid_record();
        let mut expected = Vec::new();
        for (field, broken) in CustomerField::ALL.into_iter().zip(mask.iter().copied()) {
            if broken {
                record = record.with_value(field, invalid_value(field));
                expected.push(field);
            }
        }

        let verdict = validate(&record, &date());
        prop_assert_eq!(verdict.failed_fields(), expected.as_slice());
        prop_assert_eq!(verdict.is_valid(), expected.is_empty());
        if let Verdict::Invalid(rejection) = verdict {
            prop_assert_eq!(rejection.reasons().len(), expected.len());
        }
    }
}
