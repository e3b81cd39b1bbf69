//! Per-field syntactic checks.
//!
//! Each check is a pure `&str -> bool` predicate. "Letter" means Unicode
//! category `L` and "digit" means Unicode decimal digit (`Nd`); a value that
//! is empty or made only of whitespace counts as blank.

use std::sync::LazyLock;

use custcheck_model::CustomerField;
use regex::Regex;

static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("letters regex"));

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}+$").expect("digits regex"));

static STREET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{Nd} ,.'-]+$").expect("street regex"));

static CITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L} .'-]+$").expect("city regex"));

static PROVINCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L} ]+$").expect("province regex"));

/// Canadian postal code, uppercase only.
static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\d[A-Z]\d[A-Z]\d$").expect("postal code regex"));

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Nd}() ,-]+$").expect("phone number regex"));

static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
});

/// Signature shared by every field check.
pub type FieldValidator = fn(&str) -> bool;

/// True for empty strings and strings containing only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

pub fn is_valid_first_name(value: &str) -> bool {
    !is_blank(value) && LETTERS.is_match(value)
}

/// The only optional field: a blank last name is accepted.
pub fn is_valid_last_name(value: &str) -> bool {
    is_blank(value) || LETTERS.is_match(value)
}

pub fn is_valid_street_number(value: &str) -> bool {
    !is_blank(value) && DIGITS.is_match(value)
}

pub fn is_valid_street(value: &str) -> bool {
    !is_blank(value) && STREET.is_match(value)
}

pub fn is_valid_city(value: &str) -> bool {
    !is_blank(value) && CITY.is_match(value)
}

pub fn is_valid_province(value: &str) -> bool {
    !is_blank(value) && PROVINCE.is_match(value)
}

/// Spaces are removed before matching; other whitespace is not.
pub fn is_valid_postal_code(value: &str) -> bool {
    let cleaned = value.replace(' ', "");
    !is_blank(&cleaned) && POSTAL_CODE.is_match(&cleaned)
}

pub fn is_valid_country(value: &str) -> bool {
    !is_blank(value) && LETTERS.is_match(value)
}

pub fn is_valid_phone_number(value: &str) -> bool {
    !is_blank(value) && PHONE_NUMBER.is_match(value)
}

pub fn is_valid_email_address(value: &str) -> bool {
    !is_blank(value) && EMAIL_ADDRESS.is_match(value)
}

/// The check that applies to `field`.
pub fn validator_for(field: CustomerField) -> FieldValidator {
    match field {
        CustomerField::FirstName => is_valid_first_name,
        CustomerField::LastName => is_valid_last_name,
        CustomerField::StreetNumber => is_valid_street_number,
        CustomerField::Street => is_valid_street,
        CustomerField::City => is_valid_city,
        CustomerField::Province => is_valid_province,
        CustomerField::PostalCode => is_valid_postal_code,
        CustomerField::Country => is_valid_country,
        CustomerField::PhoneNumber => is_valid_phone_number,
        CustomerField::EmailAddress => is_valid_email_address,
    }
}

/// Run the check for `field` against `value`.
pub fn is_valid_field(field: CustomerField, value: &str) -> bool {
    validator_for(field)(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_covers_empty_and_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\u{00a0}\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn first_name_requires_letters() {
        assert!(is_valid_first_name("Jane"));
        assert!(is_valid_first_name("Zoë"));
        assert!(is_valid_first_name("Łukasz"));
        assert!(!is_valid_first_name(""));
        assert!(!is_valid_first_name("  "));
        assert!(!is_valid_first_name("Mary Ann"));
        assert!(!is_valid_first_name("J4ne"));
    }

    #[test]
    fn last_name_may_be_blank() {
        assert!(is_valid_last_name(""));
        assert!(is_valid_last_name("   "));
        assert!(is_valid_last_name("Tremblay"));
        assert!(!is_valid_last_name("J0hn"));
        assert!(!is_valid_last_name(" Doe"));
    }

    #[test]
    fn last_name_rejects_punctuation() {
        assert!(!is_valid_last_name("O'Brien-Smith"));
    }

    #[test]
    fn street_number_digits_only() {
        assert!(is_valid_street_number("221"));
        assert!(is_valid_street_number("١٢٣"));
        assert!(!is_valid_street_number("221B"));
        assert!(!is_valid_street_number("-1"));
        assert!(!is_valid_street_number(""));
    }

    #[test]
    fn street_allows_address_punctuation() {
        assert!(is_valid_street("St. John's Rd., Unit-4"));
        assert!(is_valid_street("Rue Saint-Étienne"));
        assert!(!is_valid_street("Main St #4"));
        assert!(!is_valid_street("Main/St"));
        assert!(!is_valid_street(" "));
    }

    #[test]
    fn city_disallows_digits() {
        assert!(is_valid_city("St. John's"));
        assert!(is_valid_city("Rivière-du-Loup"));
        assert!(!is_valid_city("Area 51"));
        assert!(!is_valid_city("Ottawa,"));
        assert!(!is_valid_city(""));
    }

    #[test]
    fn province_letters_and_spaces() {
        assert!(is_valid_province("British Columbia"));
        assert!(is_valid_province("Québec"));
        assert!(!is_valid_province("Newfoundland-Labrador"));
        assert!(!is_valid_province("\t"));
    }

    #[test]
    fn postal_code_strips_spaces() {
        assert!(is_valid_postal_code("K1A 0B1"));
        assert!(is_valid_postal_code("K1A0B1"));
        assert!(is_valid_postal_code(" K 1 A 0 B 1 "));
        assert!(!is_valid_postal_code("k1a0b1"));
        assert!(!is_valid_postal_code("K1A0B"));
        assert!(!is_valid_postal_code("K1A0B1C"));
        assert!(!is_valid_postal_code("K1A\t0B1"));
        assert!(!is_valid_postal_code("   "));
    }

    #[test]
    fn country_letters_only() {
        assert!(is_valid_country("Canada"));
        assert!(!is_valid_country("United States"));
        assert!(!is_valid_country(""));
    }

    #[test]
    fn phone_number_characters() {
        assert!(is_valid_phone_number("(613) 555-0100"));
        assert!(is_valid_phone_number("613,555,0100"));
        assert!(!is_valid_phone_number("+1 613 555 0100"));
        assert!(!is_valid_phone_number("613.555.0100"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn email_address_shape() {
        assert!(is_valid_email_address("a@b.co"));
        assert!(is_valid_email_address("first.last+tag@mail.example.ca"));
        assert!(!is_valid_email_address("a@b"));
        assert!(!is_valid_email_address("a@b.c"));
        assert!(!is_valid_email_address("@b.co"));
        assert!(!is_valid_email_address("a b@c.co"));
        assert!(!is_valid_email_address(""));
    }

    #[test]
    fn validator_for_dispatches_by_field() {
        assert!(is_valid_field(CustomerField::LastName, ""));
        assert!(!is_valid_field(CustomerField::FirstName, ""));
        assert!(is_valid_field(CustomerField::PostalCode, "K1A 0B1"));
        assert!(!is_valid_field(CustomerField::EmailAddress, "a@b"));
    }
}
