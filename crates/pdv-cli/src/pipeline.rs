//! Batch classification: the driver loop between ingest and report.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use pdv_ingest::ReportFormat;
use pdv_model::{Classification, Record, ValidationStats};
use pdv_validate::RecordClassifier;
use tracing::{debug, trace};

use crate::logging::redact_value;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records ({eta})";

/// Valid records in input order, plus the tally for the whole batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub valid_records: Vec<Record>,
    pub stats: ValidationStats,
}

/// Classify every record in input order.
///
/// Stats are updated once per record right after it is classified. Valid
/// records are kept; invalid ones are dropped after being counted.
pub fn classify_batch(
    records: Vec<Record>,
    classifier: &RecordClassifier,
    progress: &ProgressBar,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (index, record) in records.into_iter().enumerate() {
        let classification = classifier.classify(&record);
        outcome.stats.record(classification);
        match classification {
            Classification::Valid => {
                trace!(record_index = index, "record valid");
                outcome.valid_records.push(record);
            }
            Classification::Invalid(field) => {
                let value = record.get(field);
                let rendered = value.to_string();
                debug!(
                    record_index = index,
                    field = %field,
                    code = classification.code(),
                    value_kind = value.kind(),
                    value = redact_value(&rendered),
                    "record rejected"
                );
            }
        }
        progress.inc(1);
    }
    outcome
}

/// Progress bar over `len` records; hidden when `enabled` is false.
pub fn progress_bar(len: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .map(|style| style.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

/// Default report path: `<input stem>_valid.<ext>` next to the input.
pub fn default_output_path(input: &Path, format: ReportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("records");
    input.with_file_name(format!("{stem}_valid.{}", format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("data/people.json"), ReportFormat::Json),
            PathBuf::from("data/people_valid.json")
        );
        assert_eq!(
            default_output_path(Path::new("people.json"), ReportFormat::Text),
            PathBuf::from("people_valid.txt")
        );
    }

    #[test]
    fn hidden_progress_still_counts() {
        let bar = progress_bar(3, false);
        bar.inc(2);
        assert_eq!(bar.position(), 2);
    }
}
