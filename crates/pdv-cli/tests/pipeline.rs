use std::fs;

use indicatif::ProgressBar;
use pdv_cli::config::{RuleOverrides, build_rule_config};
use pdv_cli::pipeline::{classify_batch, default_output_path};
use pdv_ingest::{ReportFormat, read_records, write_report};
use pdv_model::{Record, RecordBuilder, RecordField};
use pdv_validate::RecordClassifier;
use tempfile::TempDir;

fn valid_record(occupation: &str) -> Record {
    Record::builder()
        .telephone("+7-(923)-123-45-67")
        .weight(80)
        .snils("12345678901")
        .passport_number("123456")
        .occupation(occupation)
        .age(35)
        .political_views("Либерализм")
        .worldview("Атеизм")
        .address("ул. Ленина 5")
        .build()
}

#[test]
fn batch_keeps_valid_records_in_order() {
    let records = vec![
        valid_record("Инженер"),
        Record::builder().telephone("123").build(),
        valid_record("Врач"),
        RecordBuilder::from(valid_record("Engineer"))
            .weight(500)
            .build(),
        valid_record("Безработный"),
    ];
    let config = build_rule_config(
        None,
        RuleOverrides {
            occupation: vec!["Безработный".to_string()],
            ..RuleOverrides::default()
        },
    )
    .expect("config");
    let classifier = RecordClassifier::new(config);
    let progress = ProgressBar::hidden();

    let outcome = classify_batch(records, &classifier, &progress);

    assert_eq!(progress.position(), 5);
    assert_eq!(outcome.stats.total(), 5);
    assert_eq!(outcome.stats.valid(), 2);
    assert_eq!(outcome.stats.failures(RecordField::Telephone), 1);
    assert_eq!(outcome.stats.failures(RecordField::Weight), 1);
    assert_eq!(outcome.stats.failures(RecordField::Occupation), 1);
    let kept: Vec<_> = outcome
        .valid_records
        .iter()
        .map(|record| record.occupation().as_text())
        .collect();
    assert_eq!(kept, vec![Some("Инженер"), Some("Врач")]);
}

#[test]
fn empty_batch() {
    let classifier = RecordClassifier::default();
    let outcome = classify_batch(Vec::new(), &classifier, &ProgressBar::hidden());
    assert_eq!(outcome.stats.total(), 0);
    assert!(outcome.valid_records.is_empty());
}

#[test]
fn read_classify_write() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("people.json");
    let records = vec![valid_record("Инженер"), Record::builder().build()];
    fs::write(&input, serde_json::to_string(&records).expect("serialize")).expect("write input");

    let loaded = read_records(&input).expect("read records");
    let outcome = classify_batch(loaded, &RecordClassifier::default(), &ProgressBar::hidden());
    assert_eq!(outcome.stats.valid(), 1);
    assert_eq!(outcome.stats.failures(RecordField::Telephone), 1);

    let output = default_output_path(&input, ReportFormat::Json);
    write_report(&output, &outcome.valid_records, ReportFormat::Json).expect("write report");
    let written = read_records(&output).expect("read report");
    assert_eq!(written, outcome.valid_records);
}
