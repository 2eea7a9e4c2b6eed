use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::RecordField;

/// Outcome of classifying one record.
///
/// An invalid record is attributed to exactly one field: the first one in
/// validation order whose rule failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Valid,
    Invalid(RecordField),
}

impl Classification {
    /// Numeric code reported for a fully valid record.
    pub const VALID_CODE: u8 = RecordField::COUNT as u8;

    /// Numeric result code: the failing field index (0..=8), or
    /// [`Self::VALID_CODE`].
    pub const fn code(self) -> u8 {
        match self {
            Self::Valid => Self::VALID_CODE,
            Self::Invalid(field) => field as u8,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        if code == Self::VALID_CODE {
            return Some(Self::Valid);
        }
        RecordField::from_index(usize::from(code)).map(Self::Invalid)
    }

    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub const fn failed_field(self) -> Option<RecordField> {
        match self {
            Self::Valid => None,
            Self::Invalid(field) => Some(field),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid(field) => write!(f, "invalid {field}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_cover_zero_to_nine() {
        assert_eq!(Classification::Valid.code(), 9);
        assert_eq!(Classification::Invalid(RecordField::Telephone).code(), 0);
        assert_eq!(Classification::Invalid(RecordField::Address).code(), 8);
        for code in 0..=9u8 {
            let parsed = Classification::from_code(code).expect("code in range");
            assert_eq!(parsed.code(), code);
        }
        assert_eq!(Classification::from_code(10), None);
    }

    #[test]
    fn failed_field_is_reported() {
        let outcome = Classification::Invalid(RecordField::Snils);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.failed_field(), Some(RecordField::Snils));
        assert_eq!(outcome.to_string(), "invalid snils");
        assert_eq!(Classification::Valid.failed_field(), None);
    }
}
