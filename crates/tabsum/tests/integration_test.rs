//! Integration tests for the tabsum analysis pipeline.

use tabsum::{Analyzer, Dtype, TabsumError};

fn analyze(bytes: &[u8]) -> tabsum::AnalysisResult {
    Analyzer::new()
        .analyze_bytes("upload.csv", bytes)
        .expect("analysis failed")
}

// =============================================================================
// End-to-End Scenarios
// =============================================================================

#[test]
fn test_comma_file_with_text_column() {
    let result = analyze(b"a,b\n1,x\n2,y\n3,z\n");

    assert_eq!(result.rows, 3);
    assert_eq!(result.cols, 2);
    assert_eq!(result.numeric_columns, vec!["a"]);

    let a = &result.stats["a"];
    assert_eq!(a.count, 3);
    assert_eq!(a.min, Some(1.0));
    assert_eq!(a.max, Some(3.0));
    assert_eq!(a.mean, Some(2.0));
    assert_eq!(a.sum, Some(6.0));
}

#[test]
fn test_semicolon_delimiter_inferred() {
    let result = analyze(b"a;b\n1;2\n3;4\n");

    assert_eq!(result.cols, 2);
    assert_eq!(result.numeric_columns, vec!["a", "b"]);

    let a = &result.stats["a"];
    assert_eq!(a.count, 2);
    assert_eq!(a.min, Some(1.0));
    assert_eq!(a.max, Some(3.0));
    assert_eq!(a.mean, Some(2.0));
    assert_eq!(a.sum, Some(4.0));
}

#[test]
fn test_missing_cell_excluded_from_count() {
    let result = analyze(b"a,b\n1,\n2,5\n");

    let a = &result.stats["a"];
    assert_eq!(a.count, 2);
    assert_eq!(a.sum, Some(3.0));

    let b = &result.stats["b"];
    assert_eq!(b.count, 1);
    assert_eq!(b.sum, Some(5.0));
}

#[test]
fn test_header_only_file_fails() {
    let err = Analyzer::new()
        .analyze_bytes("upload.csv", b"a,b\n")
        .unwrap_err();
    assert!(matches!(err, TabsumError::EmptyFile(_)));
}

#[test]
fn test_decimal_comma_column() {
    let result = analyze(b"v\n1,5\n2,5\n");

    assert_eq!(result.cols, 1);
    assert_eq!(result.numeric_columns, vec!["v"]);

    let v = &result.stats["v"];
    assert_eq!(v.count, 2);
    assert_eq!(v.min, Some(1.5));
    assert_eq!(v.max, Some(2.5));
    assert_eq!(v.mean, Some(2.0));
}

#[test]
fn test_tab_delimited_file() {
    let result = analyze(b"x\ty\n1\t2\n3\t4\n");

    assert_eq!(result.cols, 2);
    assert_eq!(result.numeric_columns, vec!["x", "y"]);
}

// =============================================================================
// Error Taxonomy
// =============================================================================

#[test]
fn test_wrong_extension_rejected() {
    let err = Analyzer::new()
        .analyze_bytes("report.pdf", b"a\n1\n")
        .unwrap_err();
    assert!(matches!(err, TabsumError::UnsupportedFileType(_)));
}

#[test]
fn test_binary_payload_rejected() {
    let err = Analyzer::new()
        .analyze_bytes("upload.csv", b"\x00\x01\x02\x03")
        .unwrap_err();
    assert!(matches!(err, TabsumError::Encoding(_)));
}

#[test]
fn test_empty_payload_rejected() {
    let err = Analyzer::new().analyze_bytes("upload.csv", b"").unwrap_err();
    assert!(matches!(err, TabsumError::EmptyFile(_)));
}

#[test]
fn test_cell_level_parse_failures_never_abort() {
    // A stray word only demotes the column to text.
    let result = analyze(b"a,b\n1,2\noops,3\n");

    assert_eq!(result.columns[0].dtype, Dtype::Text);
    assert_eq!(result.numeric_columns, vec!["b"]);
}

// =============================================================================
// Output Contract
// =============================================================================

#[test]
fn test_stats_keys_equal_numeric_columns() {
    let result = analyze(b"a,b,c\n1,x,2\n3,y,4\n");
    let keys: Vec<&String> = result.stats.keys().collect();

    assert_eq!(keys, result.numeric_columns.iter().collect::<Vec<_>>());
    assert!(result.numeric_columns.len() <= result.cols);
}

#[test]
fn test_preview_cap_and_order() {
    let mut data = String::from("n\n");
    for i in 0..50 {
        data.push_str(&format!("{}\n", i));
    }
    let result = analyze(data.as_bytes());

    assert_eq!(result.rows, 50);
    assert_eq!(result.preview.len(), 20);

    let serialized = serde_json::to_value(&result).unwrap();
    assert_eq!(serialized["preview"][0]["n"], serde_json::json!(0.0));
    assert_eq!(serialized["preview"][19]["n"], serde_json::json!(19.0));
}

#[test]
fn test_serialized_shape() {
    let result = analyze(b"a,b\n1,\n");
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["filename"], "upload.csv");
    assert_eq!(value["rows"], 1);
    assert_eq!(value["cols"], 2);
    assert_eq!(value["columns"][0]["dtype"], "numeric");
    assert_eq!(value["columns"][1]["dtype"], "text");
    assert_eq!(value["numericColumns"], serde_json::json!(["a"]));
    assert!(value["preview"][0]["b"].is_null());

    let a = &value["stats"]["a"];
    assert_eq!(a["count"], 1);
    assert_eq!(a["min"], serde_json::json!(1.0));
}

#[test]
fn test_idempotent_serialization() {
    let bytes = b"a,b,c\n1,x,\n2,y,4\n3,,6\n";

    let first = serde_json::to_string(&analyze(bytes)).unwrap();
    let second = serde_json::to_string(&analyze(bytes)).unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Parsing Policies
// =============================================================================

#[test]
fn test_ragged_rows_padded_and_truncated() {
    let result = analyze(b"a,b,c\n1,2,3\n4,5\n6,7,8,9\n");

    assert_eq!(result.rows, 3);
    assert_eq!(result.cols, 3);

    let serialized = serde_json::to_value(&result).unwrap();
    assert!(serialized["preview"][1]["c"].is_null());
    assert_eq!(serialized["preview"][2]["c"], serde_json::json!(8.0));
}

#[test]
fn test_duplicate_headers_disambiguated() {
    let result = analyze(b"a,a,b\n1,2,3\n");

    let names: Vec<&str> = result.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["a", "a_2", "b"]);
}

#[test]
fn test_all_missing_column_gets_no_stats() {
    let result = analyze(b"a,b\nNA,1\nNA,2\n");

    assert_eq!(result.columns[0].dtype, Dtype::Text);
    assert_eq!(result.numeric_columns, vec!["b"]);
    assert!(!result.stats.contains_key("a"));
}

#[test]
fn test_latin1_upload_decoded() {
    let result = analyze(b"caf\xe9,n\nx,1\ny,2\n");

    assert_eq!(result.columns[0].name, "caf\u{e9}");
    assert_eq!(result.numeric_columns, vec!["n"]);
}
