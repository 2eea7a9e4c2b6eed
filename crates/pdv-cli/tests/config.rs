use std::fs;

use pdv_cli::config::{RuleOverrides, build_rule_config, load_rule_config};
use pdv_model::RecordField;
use pdv_validate::Alphabet;
use tempfile::TempDir;

#[test]
fn cli_values_extend_file_blocklists() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(
        &path,
        r#"{"occupation_blocklist": ["Безработный"], "worldview_blocklist": ["Нигилизм"], "alphabet": "latin"}"#,
    )
    .expect("write config");

    let config = build_rule_config(
        Some(&path),
        RuleOverrides {
            occupation: vec!["Студент".to_string()],
            alphabet: Some(Alphabet::Cyrillic),
            ..RuleOverrides::default()
        },
    )
    .expect("build config");

    assert!(config.is_blocked(RecordField::Occupation, "Безработный"));
    assert!(config.is_blocked(RecordField::Occupation, "Студент"));
    assert_eq!(config.occupation_blocklist.len(), 2);
    assert!(config.is_blocked(RecordField::Worldview, "Нигилизм"));
    assert!(config.political_views_blocklist.is_empty());
    assert_eq!(config.alphabet, Alphabet::Cyrillic);
}

#[test]
fn file_alphabet_kept_without_override() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(&path, r#"{"alphabet": "latin"}"#).expect("write config");

    let config = build_rule_config(Some(&path), RuleOverrides::default()).expect("build config");
    assert_eq!(config.alphabet, Alphabet::Latin);
    assert!(config.occupation_blocklist.is_empty());
}

#[test]
fn empty_config_file_uses_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(&path, "{}").expect("write config");

    let config = load_rule_config(&path).expect("load config");
    assert_eq!(config.alphabet, Alphabet::CyrillicLatin);
    assert!(config.worldview_blocklist.is_empty());
}

#[test]
fn unknown_config_key_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(&path, r#"{"occupation_blacklist": ["Безработный"]}"#).expect("write config");

    let error = build_rule_config(Some(&path), RuleOverrides::default()).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.starts_with("parse config: "), "{message}");
    assert!(message.contains("unknown field `occupation_blacklist`"), "{message}");
}

#[test]
fn unknown_alphabet_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(&path, r#"{"alphabet": "greek"}"#).expect("write config");

    assert!(load_rule_config(&path).is_err());
}
