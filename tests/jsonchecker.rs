//! Runs every document under `tests/data`.
//!
//! Files whose name starts with `p` must parse, and their canonical form
//! must parse back to an equal value. Files starting with `f` must fail.
//! Anything else is ignored.

use canon_json::{parse, serialize};
use std::fs;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn corpus() -> Vec<(String, String)> {
    let mut documents = Vec::new();
    for entry in fs::read_dir(data_dir()).expect("tests/data should exist") {
        let path = entry.expect("readable directory entry").path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("fixture names are UTF-8")
            .to_string();
        let text = fs::read_to_string(&path).expect("fixtures are UTF-8 text");
        documents.push((name, text));
    }
    documents.sort();
    documents
}

#[test]
fn pass_documents_parse_and_round_trip() {
    let mut checked = 0;
    let mut failures = Vec::new();
    for (name, text) in corpus().iter().filter(|(name, _)| name.starts_with('p')) {
        checked += 1;
        match parse(text) {
            Ok(value) => {
                let canonical = serialize(&value);
                match parse(&canonical) {
                    Ok(again) if again == value => {}
                    Ok(_) => failures.push(format!("{name}: round trip changed the value")),
                    Err(e) => failures.push(format!("{name}: canonical form rejected: {e}")),
                }
            }
            Err(e) => failures.push(format!(
                "{name}: expected pass, got {e} at {}:{}",
                e.line, e.column
            )),
        }
    }
    assert!(checked >= 5, "pass fixtures missing, found {checked}");
    assert!(failures.is_empty(), "{failures:#?}");
}

#[test]
fn fail_documents_are_rejected() {
    let mut checked = 0;
    let mut failures = Vec::new();
    for (name, text) in corpus().iter().filter(|(name, _)| name.starts_with('f')) {
        checked += 1;
        if let Ok(value) = parse(text) {
            failures.push(format!("{name}: expected fail, parsed as {value}"));
        }
    }
    assert!(checked >= 30, "fail fixtures missing, found {checked}");
    assert!(failures.is_empty(), "{failures:#?}");
}

#[test]
fn selected_fail_documents_report_expected_messages() {
    let expected = [
        ("fail2.json", "parse miss comma or square bracket"),
        ("fail3.json", "parse miss key"),
        ("fail4.json", "parse invalid value"),
        ("fail7.json", "parse root not singular"),
        ("fail13.json", "parse miss comma or curly bracket"),
        ("fail15.json", "parse invalid string escape"),
        ("fail19.json", "parse miss colon"),
        ("fail25.json", "parse invalid string char"),
        ("fail35.json", "parse invalid unicode surrogate"),
        ("fail36.json", "parse expect value"),
    ];
    let documents = corpus();
    for (file, message) in expected {
        let (_, text) = documents
            .iter()
            .find(|(name, _)| name == file)
            .unwrap_or_else(|| panic!("{file} missing"));
        let err = parse(text).expect_err(file);
        assert_eq!(err.to_string(), message, "{file}");
    }
}

#[test]
fn pass5_values() {
    let text = fs::read_to_string(data_dir().join("pass5.json")).unwrap();
    let value = parse(&text).unwrap();
    assert_eq!(value["surrogates"], "\u{1D11E} \u{1F600}");
    assert_eq!(value["nul"].to_str().as_bytes(), b"a\0b");
    assert_eq!(value["dup"], 2);
    assert_eq!(value["tiny"].to_number(), 0.0);
    assert!(value["neg zero"].to_number().is_sign_negative());
    assert_eq!(value.len(), 5);
}
