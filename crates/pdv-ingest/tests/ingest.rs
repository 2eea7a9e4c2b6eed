use std::fs;

use pdv_ingest::{
    IngestError, ReportFormat, read_records, read_records_with_limit, write_report,
};
use pdv_model::{FieldValue, Record};
use tempfile::TempDir;

const SAMPLE: &str = r#"[
  {
    "telephone": "+7-(923)-123-45-67",
    "weight": 80,
    "snils": "12345678901",
    "passport_number": 123456,
    "occupation": "Инженер",
    "age": 35,
    "political_views": "Либерализм",
    "worldview": "Атеизм",
    "address": "ул. Ленина 5"
  },
  {
    "telephone": "7-923-123-45-67",
    "weight": "heavy",
    "age": 20.0
  }
]"#;

#[test]
fn reads_array_of_records() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("records.json");
    fs::write(&path, SAMPLE).expect("write input");

    let records = read_records(&path).expect("read records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].occupation().as_text(), Some("Инженер"));
    assert_eq!(records[1].weight(), &FieldValue::Text("heavy".into()));
    assert_eq!(records[1].age().as_integer(), Some(20));
    assert!(records[1].address().is_missing());
}

#[test]
fn reports_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.json");
    let err = read_records(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn enforces_size_limit() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("records.json");
    fs::write(&path, SAMPLE).expect("write input");

    let err = read_records_with_limit(&path, 16).unwrap_err();
    assert!(matches!(
        err,
        IngestError::FileTooLarge { max_size: 16, .. }
    ));
}

#[test]
fn writes_json_report_that_reads_back() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("records.json");
    fs::write(&input, SAMPLE).expect("write input");
    let records = read_records(&input).expect("read records");

    let output = dir.path().join("nested").join("valid.json");
    write_report(&output, &records[..1], ReportFormat::Json).expect("write report");

    let written = fs::read_to_string(&output).expect("read report");
    assert!(written.contains("Инженер"));
    let reread: Vec<Record> = read_records(&output).expect("reread report");
    assert_eq!(reread, records[..1].to_vec());
}

#[test]
fn writes_text_report_one_line_per_record() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("records.json");
    fs::write(&input, SAMPLE).expect("write input");
    let records = read_records(&input).expect("read records");

    let output = dir.path().join("valid.txt");
    write_report(&output, &records, ReportFormat::Text).expect("write report");

    let written = fs::read_to_string(&output).expect("read report");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("+7-(923)-123-45-67 | 80 | "));
    assert!(lines[1].ends_with(" |  | "));
}
