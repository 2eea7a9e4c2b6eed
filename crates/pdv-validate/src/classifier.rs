//! First-failure record classification.

use pdv_model::{Classification, Record, RecordField};

use crate::config::RuleConfig;
use crate::rules;

/// Applies the field rules to whole records.
///
/// Fields are checked in [`RecordField`] order and evaluation stops at the
/// first failure, so an invalid record is attributed to its highest-priority
/// violation only. A value that cannot be read as the type its rule expects
/// fails that rule.
#[derive(Debug, Clone, Default)]
pub struct RecordClassifier {
    config: RuleConfig,
}

impl RecordClassifier {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn classify(&self, record: &Record) -> Classification {
        classify_with(&self.config, record)
    }

    /// Run the rule for a single field of `record`.
    pub fn check_field(&self, field: RecordField, record: &Record) -> bool {
        check_field(&self.config, field, record)
    }
}

/// Classify with empty blocklists and the default alphabet.
pub fn classify(record: &Record) -> Classification {
    classify_with(&RuleConfig::default(), record)
}

/// Classify under `config` without building a classifier.
pub fn classify_with(config: &RuleConfig, record: &Record) -> Classification {
    RecordField::all()
        .iter()
        .copied()
        .find(|&field| !check_field(config, field, record))
        .map_or(Classification::Valid, Classification::Invalid)
}

fn check_field(config: &RuleConfig, field: RecordField, record: &Record) -> bool {
    let value = record.get(field);
    match field {
        RecordField::Telephone => value.as_text().is_some_and(rules::telephone),
        RecordField::Weight => value.as_integer().is_some_and(rules::weight),
        RecordField::Snils => value.as_text().is_some_and(rules::snils),
        RecordField::PassportNumber => value
            .as_digit_string()
            .is_some_and(|digits| rules::passport_number(&digits)),
        RecordField::Occupation => value
            .as_text()
            .is_some_and(|text| rules::occupation(text, config)),
        RecordField::Age => value.as_integer().is_some_and(rules::age),
        RecordField::PoliticalViews => value
            .as_text()
            .is_some_and(|text| rules::political_views(text, config)),
        RecordField::Worldview => value
            .as_text()
            .is_some_and(|text| rules::worldview(text, config)),
        RecordField::Address => value.as_text().is_some_and(rules::address),
    }
}
