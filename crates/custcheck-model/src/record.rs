//! Immutable customer record.

use serde::{Deserialize, Serialize};

use crate::field::CustomerField;

/// One customer row, exactly as read from the input file.
///
/// Values are kept verbatim: no trimming and no case normalization. A
/// record is built once per row and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "Street Number")]
    street_number: String,
    #[serde(rename = "Street")]
    street: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Province")]
    province: String,
    #[serde(rename = "Postal Code")]
    postal_code: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Phone Number")]
    phone_number: String,
    #[serde(rename = "email Address")]
    email_address: String,
}

impl CustomerRecord {
    /// Build a record from values given in declaration order.
    pub fn from_values<S: Into<String>>(values: [S; 10]) -> Self {
        let [
            first_name,
            last_name,
            street_number,
            street,
            city,
            province,
            postal_code,
            country,
            phone_number,
            email_address,
        ] = values;
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            street_number: street_number.into(),
            street: street.into(),
            city: city.into(),
            province: province.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            phone_number: phone_number.into(),
            email_address: email_address.into(),
        }
    }

    /// Raw value of a single field.
    pub fn value(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::FirstName => &self.first_name,
            CustomerField::LastName => &self.last_name,
            CustomerField::StreetNumber => &self.street_number,
            CustomerField::Street => &self.street,
            CustomerField::City => &self.city,
            CustomerField::Province => &self.province,
            CustomerField::PostalCode => &self.postal_code,
            CustomerField::Country => &self.country,
            CustomerField::PhoneNumber => &self.phone_number,
            CustomerField::EmailAddress => &self.email_address,
        }
    }

    /// `(field, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (CustomerField, &str)> + '_ {
        CustomerField::ALL
            .into_iter()
            .map(move |field| (field, self.value(field)))
    }

    /// Copy of this record with one field replaced.
    #[must_use]
    pub fn with_value(&self, field: CustomerField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            CustomerField::FirstName => &mut next.first_name,
            CustomerField::LastName => &mut next.last_name,
            CustomerField::StreetNumber => &mut next.street_number,
            CustomerField::Street => &mut next.street,
            CustomerField::City => &mut next.city,
            CustomerField::Province => &mut next.province,
            CustomerField::PostalCode => &mut next.postal_code,
            CustomerField::Country => &mut next.country,
            CustomerField::PhoneNumber => &mut next.phone_number,
            CustomerField::EmailAddress => &mut next.email_address,
        };
        *slot = value.into();
        next
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}
