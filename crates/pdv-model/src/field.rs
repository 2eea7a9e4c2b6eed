//! The nine record fields, in validation priority order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field of a personal record.
///
/// The discriminant is the field's position in the fixed validation order,
/// which is also the numeric failure code reported for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RecordField {
    Telephone = 0,
    Weight = 1,
    Snils = 2,
    PassportNumber = 3,
    Occupation = 4,
    Age = 5,
    PoliticalViews = 6,
    Worldview = 7,
    Address = 8,
}

impl RecordField {
    /// Number of fields in a record.
    pub const COUNT: usize = 9;

    const ALL: [Self; Self::COUNT] = [
        Self::Telephone,
        Self::Weight,
        Self::Snils,
        Self::PassportNumber,
        Self::Occupation,
        Self::Age,
        Self::PoliticalViews,
        Self::Worldview,
        Self::Address,
    ];

    /// All fields in validation order.
    pub const fn all() -> &'static [Self; Self::COUNT] {
        &Self::ALL
    }

    /// Position in validation order (0..=8).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Key used for this field in source and report files.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Telephone => "telephone",
            Self::Weight => "weight",
            Self::Snils => "snils",
            Self::PassportNumber => "passport_number",
            Self::Occupation => "occupation",
            Self::Age => "age",
            Self::PoliticalViews => "political_views",
            Self::Worldview => "worldview",
            Self::Address => "address",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Telephone => "Telephone",
            Self::Weight => "Weight",
            Self::Snils => "SNILS",
            Self::PassportNumber => "Passport number",
            Self::Occupation => "Occupation",
            Self::Age => "Age",
            Self::PoliticalViews => "Political views",
            Self::Worldview => "Worldview",
            Self::Address => "Address",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
