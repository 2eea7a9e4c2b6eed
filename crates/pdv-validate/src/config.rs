//! Rule configuration: value blocklists and the occupation alphabet.

use std::collections::BTreeSet;

use pdv_model::RecordField;
use serde::{Deserialize, Serialize};

/// Letters accepted as the leading capital of an occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alphabet {
    /// `А`..=`Я` and `Ё`.
    Cyrillic,
    /// `A`..=`Z`.
    Latin,
    /// Either of the above.
    #[default]
    CyrillicLatin,
}

impl Alphabet {
    pub fn is_uppercase_letter(self, ch: char) -> bool {
        match self {
            Self::Cyrillic => is_cyrillic_uppercase(ch),
            Self::Latin => ch.is_ascii_uppercase(),
            Self::CyrillicLatin => is_cyrillic_uppercase(ch) || ch.is_ascii_uppercase(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cyrillic => "Cyrillic",
            Self::Latin => "Latin",
            Self::CyrillicLatin => "Cyrillic or Latin",
        }
    }
}

fn is_cyrillic_uppercase(ch: char) -> bool {
    matches!(ch, 'А'..='Я' | 'Ё')
}

/// Configuration consumed by the field rules.
///
/// Blocklists hold values that are rejected even when they otherwise match
/// the field's pattern. Matching is exact. All lists are empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    pub occupation_blocklist: BTreeSet<String>,
    pub political_views_blocklist: BTreeSet<String>,
    pub worldview_blocklist: BTreeSet<String>,
    pub alphabet: Alphabet,
}

impl RuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_occupation_blocklist<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.occupation_blocklist.extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_political_views_blocklist<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.political_views_blocklist
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_worldview_blocklist<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.worldview_blocklist
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// The blocklist applied to `field`, if that field has one.
    pub fn blocklist(&self, field: RecordField) -> Option<&BTreeSet<String>> {
        match field {
            RecordField::Occupation => Some(&self.occupation_blocklist),
            RecordField::PoliticalViews => Some(&self.political_views_blocklist),
            RecordField::Worldview => Some(&self.worldview_blocklist),
            _ => None,
        }
    }

    pub fn is_blocked(&self, field: RecordField, value: &str) -> bool {
        self.blocklist(field)
            .is_some_and(|blocked| blocked.contains(value))
    }
}
