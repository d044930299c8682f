use std::fs;

use kira_famcorr::family::{annotate, load_ids_json, parse_ids_json};
use kira_famcorr::metrics::StructureMeasurement;
use tempfile::TempDir;

#[test]
fn lookup_is_case_insensitive() {
    let lookup = parse_ids_json(r#"{"Kinase": ["1ABC", "2def"]}"#, "test").unwrap();
    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.lookup("1abc"), Some("Kinase"));
    assert_eq!(lookup.lookup("2DEF"), Some("Kinase"));
    assert_eq!(lookup.lookup("9zzz"), None);
}

#[test]
fn conflicting_identifier_keeps_first_family() {
    let lookup = parse_ids_json(r#"{"Protease": ["1abc"], "Kinase": ["1ABC"]}"#, "test").unwrap();
    assert_eq!(lookup.lookup("1abc"), Some("Kinase"));
    assert_eq!(lookup.conflicts.len(), 1);
    assert!(lookup.conflicts[0].contains("1abc"));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(parse_ids_json(r#"["1abc"]"#, "test").is_err());
    assert!(parse_ids_json(r#"{"  ": ["1abc"]}"#, "test").is_err());
}

#[test]
fn annotate_assigns_unknown_to_unmapped() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ids.json");
    fs::write(&path, r#"{"GPCR": ["4ABC"]}"#).unwrap();
    let lookup = load_ids_json(&path).unwrap();

    let mut rows = vec![
        StructureMeasurement::new("4abc", "Unknown", Some(10.0), None),
        StructureMeasurement::new("5XYZ", "GPCR", Some(20.0), None),
    ];
    let unmapped = annotate(&mut rows, &lookup);
    assert_eq!(rows[0].family, "GPCR");
    assert_eq!(rows[1].family, "Unknown");
    assert_eq!(unmapped, vec!["5xyz".to_string()]);
}
