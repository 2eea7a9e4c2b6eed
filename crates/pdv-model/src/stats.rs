//! Per-batch tallies of classification outcomes.

use serde::{Deserialize, Serialize};

use crate::classification::Classification;
use crate::field::RecordField;

/// Counts of valid records and of invalid records per failing field.
///
/// Each recorded classification increments exactly one counter, so
/// `valid() + invalid() == total()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {
    valid: usize,
    failures: [usize; RecordField::COUNT],
}

impl ValidationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Valid => self.valid += 1,
            Classification::Invalid(field) => self.failures[field.index()] += 1,
        }
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: &Self) {
        self.valid += other.valid;
        for (count, extra) in self.failures.iter_mut().zip(other.failures) {
            *count += extra;
        }
    }

    pub fn valid(&self) -> usize {
        self.valid
    }

    pub fn invalid(&self) -> usize {
        self.failures.iter().sum()
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid()
    }

    /// Number of records whose first failing rule was `field`.
    pub fn failures(&self, field: RecordField) -> usize {
        self.failures[field.index()]
    }

    /// Failure counts for every field, in validation order.
    pub fn failure_counts(&self) -> impl Iterator<Item = (RecordField, usize)> {
        RecordField::all()
            .iter()
            .map(move |&field| (field, self.failures(field)))
    }
}

impl Extend<Classification> for ValidationStats {
    fn extend<I: IntoIterator<Item = Classification>>(&mut self, iter: I) {
        for classification in iter {
            self.record(classification);
        }
    }
}

impl FromIterator<Classification> for ValidationStats {
    fn from_iter<I: IntoIterator<Item = Classification>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_are_zero() {
        let stats = ValidationStats::new();
        assert_eq!(stats.total(), 0);
        assert!(stats.failure_counts().all(|(_, count)| count == 0));
    }

    #[test]
    fn merge_adds_counts() {
        let mut left: ValidationStats = [
            Classification::Valid,
            Classification::Invalid(RecordField::Weight),
        ]
        .into_iter()
        .collect();
        let right: ValidationStats = [
            Classification::Invalid(RecordField::Weight),
            Classification::Invalid(RecordField::Address),
        ]
        .into_iter()
        .collect();

        left.merge(&right);

        assert_eq!(left.valid(), 1);
        assert_eq!(left.failures(RecordField::Weight), 2);
        assert_eq!(left.failures(RecordField::Address), 1);
        assert_eq!(left.invalid(), 3);
        assert_eq!(left.total(), 4);
    }
}
