//! The fixed customer field table.
//!
//! Every place that needs to enumerate customer fields (CSV headers, the
//! rejection diagnostic, reason labels) goes through [`CustomerField::ALL`],
//! so declaration order is defined exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the ten customer fields, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CustomerField {
    FirstName,
    LastName,
    StreetNumber,
    Street,
    City,
    Province,
    PostalCode,
    Country,
    PhoneNumber,
    EmailAddress,
}

impl CustomerField {
    /// All fields in declaration order.
    pub const ALL: [CustomerField; 10] = [
        Self::FirstName,
        Self::LastName,
        Self::StreetNumber,
        Self::Street,
        Self::City,
        Self::Province,
        Self::PostalCode,
        Self::Country,
        Self::PhoneNumber,
        Self::EmailAddress,
    ];

    /// Column name used in input and output CSV headers.
    ///
    /// The email column keeps its historical lowercase spelling.
    pub fn header(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::StreetNumber => "Street Number",
            Self::Street => "Street",
            Self::City => "City",
            Self::Province => "Province",
            Self::PostalCode => "Postal Code",
            Self::Country => "Country",
            Self::PhoneNumber => "Phone Number",
            Self::EmailAddress => "email Address",
        }
    }

    /// Property name printed in rejection diagnostics (`<property>: <value>`).
    pub fn property(self) -> &'static str {
        match self {
            Self::FirstName => "FirstName",
            Self::LastName => "LastName",
            Self::StreetNumber => "StreetNumber",
            Self::Street => "Street",
            Self::City => "City",
            Self::Province => "Province",
            Self::PostalCode => "PostalCode",
            Self::Country => "Country",
            Self::PhoneNumber => "PhoneNumber",
            Self::EmailAddress => "emailAddress",
        }
    }

    /// Human-readable label used in rejection reasons.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::StreetNumber => "Street Number",
            Self::Street => "Street",
            Self::City => "City",
            Self::Province => "Province",
            Self::PostalCode => "Postal Code",
            Self::Country => "Country",
            Self::PhoneNumber => "Phone Number",
            Self::EmailAddress => "Email Address",
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
