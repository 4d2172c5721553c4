use strip_allowlist::loader::load_from_file;
use strip_allowlist::{LoadError, ShaderId};

// Helper function to create the full path to test data
fn test_data_path(filename: &str) -> std::path::PathBuf {
    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("allowlist_data");
    path.push(filename);
    path
}

#[test]
fn test_load_valid_simple() {
    let path = test_data_path("valid_simple.ron");
    let result = load_from_file(&path);

    assert!(result.is_ok());
    let allowlist = result.unwrap();
    assert_eq!(allowlist.len(), 2);

    let water = allowlist
        .lookup(&ShaderId::new("Custom/Water"))
        .expect("Custom/Water should be registered");
    assert_eq!(water.passes().len(), 2);
    assert!(!water.has_unnamed_pass());

    let forward = water.pass_rule("FORWARD").expect("FORWARD rule missing");
    assert_eq!(forward.keyword_set.len(), 2);
    assert!(forward.keyword_set.combinations()[0].contains("FOG_EXP2"));
    assert!(forward.keyword_set.combinations()[0].contains("SHADOWS_SOFT"));
    assert!(forward.keyword_set.combinations()[1].allows_empty());

    let shadow = water
        .pass_rule("SHADOWCASTER")
        .expect("SHADOWCASTER rule missing");
    assert_eq!(shadow.keyword_set.len(), 1);

    let glass = allowlist
        .lookup(&ShaderId::new("Custom/Glass"))
        .expect("Custom/Glass should be registered");
    assert!(glass.has_unnamed_pass());

    assert!(allowlist.lookup(&ShaderId::new("Custom/Missing")).is_none());
}

#[test]
fn test_load_invalid_dup_shader() {
    let path = test_data_path("invalid_dup_shader.ron");
    let result = load_from_file(&path);
    assert!(result.is_err());
    match result.err().unwrap() {
        LoadError::InvalidData(msg) => {
            assert!(msg.contains("Duplicate shader name: Custom/Water"), "{msg}")
        }
        _ => panic!("Expected InvalidData error for duplicate shader"),
    }
}

#[test]
fn test_load_invalid_dup_pass() {
    let path = test_data_path("invalid_dup_pass.ron");
    let result = load_from_file(&path);
    assert!(result.is_err());
    match result.err().unwrap() {
        LoadError::InvalidData(msg) => {
            assert!(msg.contains("Duplicate pass name 'FORWARD'"), "{msg}")
        }
        _ => panic!("Expected InvalidData error for duplicate pass"),
    }
}

#[test]
fn test_load_invalid_format() {
    let path = test_data_path("invalid_format.ron");
    let result = load_from_file(&path);
    assert!(result.is_err());
    match result.err().unwrap() {
        LoadError::ParseError(msg) => assert!(msg.contains("RON deserialization failed")),
        _ => panic!("Expected ParseError for invalid format"),
    }
}

#[test]
fn test_load_unsupported_extension() {
    let path = test_data_path("unsupported.txt");
    let result = load_from_file(&path);
    assert!(result.is_err());
    match result.err().unwrap() {
        LoadError::UnsupportedFormat(msg) => assert!(msg.contains("txt")),
        _ => panic!("Expected UnsupportedFormat error for .txt file"),
    }
}

#[test]
fn test_load_file_not_found() {
    let path = test_data_path("non_existent_file.ron");
    let result = load_from_file(&path);
    assert!(result.is_err());
    match result.err().unwrap() {
        LoadError::Io(_) => { /* Expected */ }
        _ => panic!("Expected Io error for non-existent file"),
    }
}
