//! Configuration parsing, defaults and file loading

use devkit::{CharClass, DevkitConfig, Engine, ErrorKind};
use std::io::Write;

#[test]
fn test_empty_object_is_all_defaults() {
    let config = DevkitConfig::from_json_str("{}").expect("defaults are valid");
    assert_eq!(config, DevkitConfig::default());
    assert_eq!(config.xml.indent_width, 2);
    assert_eq!(config.password.length, 16);
    assert_eq!(config.password.classes, CharClass::ALL.to_vec());
    assert!(!config.password.exclude_ambiguous);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = DevkitConfig::from_json_str(
        r#"{"password":{"classes":["numbers"],"exclude_ambiguous":true}}"#,
    )
    .expect("valid configuration");
    assert_eq!(config.password.length, 16);
    assert_eq!(config.password.classes, vec![CharClass::Numbers]);
    assert!(config.password.exclude_ambiguous);
    assert_eq!(config.xml.indent_width, 2);
}

#[test]
fn test_invalid_configurations_are_rejected() {
    for json in [
        r#"{"xml":{"indent_width":0}}"#,
        r#"{"password":{"classes":[]}}"#,
        r#"{"password":{"classes":["emoji"]}}"#,
        r#"{"password":{"length":4097}}"#,
        r#"{"password":{"length":18446744073709551615}}"#,
        "not json",
    ] {
        let err = DevkitConfig::from_json_str(json).expect_err(json);
        assert_eq!(err.kind(), &ErrorKind::Configuration, "{json}");
    }
}

#[test]
fn test_password_length_cap_is_inclusive() {
    let json = format!(r#"{{"password":{{"length":{}}}}}"#, devkit::password::MAX_LENGTH);
    let config = DevkitConfig::from_json_str(&json).expect("maximum length is allowed");
    assert_eq!(config.password.length, devkit::password::MAX_LENGTH);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"xml":{{"indent_width":3}}}}"#).expect("write config");

    let engine = Engine::from_config_file(file.path()).expect("loads");
    assert_eq!(engine.config().xml.indent_width, 3);
    assert_eq!(
        engine.format_document("<a><b/></a>").expect("well-formed"),
        "<a>\n   <b/>\n</a>"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = DevkitConfig::load(dir.path().join("devkit.json")).expect_err("missing");
    assert_eq!(err.kind(), &ErrorKind::Io);
    assert!(err.get_context().is_some_and(|c| c.contains("devkit.json")));
}
