use pdv_model::{FieldValue, ModelError, Record, RecordField};
use serde_json::json;

#[test]
fn record_from_object_keeps_raw_values() {
    let record = Record::from_value(json!({
        "telephone": "+7-(923)-123-45-67",
        "weight": 80,
        "snils": "12345678901",
        "passport_number": 123456,
        "occupation": "Инженер",
        "age": "35",
        "political_views": null,
        "worldview": "Атеизм",
        "address": "ул. Ленина 5",
        "extra": "ignored"
    }))
    .expect("object record");

    assert_eq!(record.weight(), &FieldValue::Integer(80));
    assert_eq!(record.passport_number(), &FieldValue::Integer(123456));
    assert_eq!(record.age(), &FieldValue::Text("35".into()));
    assert!(record.political_views().is_missing());
    assert_eq!(record.address().as_text(), Some("ул. Ленина 5"));
}

#[test]
fn record_missing_keys_default_to_missing() {
    let record = Record::from_value(json!({ "telephone": "+7-(923)-123-45-67" }))
        .expect("partial record");
    assert!(!record.telephone().is_missing());
    for field in &RecordField::all()[1..] {
        assert!(record.get(*field).is_missing(), "{field} should be missing");
    }
}

#[test]
fn record_rejects_non_objects() {
    let error = Record::from_value(json!(["+7-(923)-123-45-67", 80])).unwrap_err();
    assert!(matches!(error, ModelError::NotAnObject { found: "array" }));

    let error = Record::from_value(json!("record")).unwrap_err();
    assert_eq!(error.to_string(), "record must be a JSON object, found string");
}

#[test]
fn record_unsupported_values_are_kept() {
    let record = Record::from_value(json!({ "weight": true, "age": [30] })).expect("record");
    assert_eq!(record.weight(), &FieldValue::Unsupported(json!(true)));
    assert_eq!(record.age().as_integer(), None);
}

#[test]
fn record_serializes_back_to_source_keys() {
    let record = Record::builder()
        .telephone("+7-(923)-123-45-67")
        .weight(80)
        .snils("12345678901")
        .passport_number("123456")
        .occupation("Инженер")
        .age(35)
        .political_views("Либерализм")
        .worldview("Атеизм")
        .address("ул. Ленина 5")
        .build();

    let value = serde_json::to_value(&record).expect("serialize");
    assert_eq!(value["occupation"], json!("Инженер"));
    assert_eq!(value["weight"], json!(80));

    let round = Record::from_value(value).expect("deserialize");
    assert_eq!(round, record);
}

#[test]
fn builder_sets_fields_by_tag() {
    let record = Record::builder()
        .field(RecordField::Worldview, "Стоицизм")
        .field(RecordField::Age, 40)
        .build();
    assert_eq!(record.worldview().as_text(), Some("Стоицизм"));
    assert_eq!(record.age().as_integer(), Some(40));

    let values: Vec<RecordField> = record.values().map(|(field, _)| field).collect();
    assert_eq!(values, RecordField::all().to_vec());
}
