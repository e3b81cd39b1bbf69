use std::fmt;

use serde::{Deserialize, Serialize};

/// Year/month/day taken verbatim from the folders enclosing an input file.
///
/// The components are never parsed as calendar values: a folder named
/// `foo` ends up in the date string unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProvenanceDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl ProvenanceDate {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }
}

/// Formats as `year/month/day`.
impl fmt::Display for ProvenanceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_folder_names_verbatim() {
        assert_eq!(ProvenanceDate::new("2017", "8", "04").to_string(), "2017/8/04");
        assert_eq!(ProvenanceDate::new("foo", "", "bar").to_string(), "foo//bar");
    }
}
