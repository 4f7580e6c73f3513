//! Tests for sales log reading and encoding fallback

use super::*;
use crate::Error;
use crate::app::services::sales_parser::{TextEncoding, read_sales_lines, try_read_sales_lines};
use std::path::Path;

#[test]
fn test_utf8_file_read_without_header() {
    let file = create_sales_file(&sample_lines());

    let lines = try_read_sales_lines(file.path(), &TextEncoding::DEFAULT_ORDER).unwrap();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("T001|"));
}

#[test]
fn test_latin1_fallback_when_utf8_fails() {
    // 0xE9 is 'é' in latin-1 and an invalid lone byte in UTF-8
    let mut bytes = TEST_HEADER.as_bytes().to_vec();
    bytes.extend_from_slice(b"\nT1|2024-01-01|P1|Caf\xE9 Mug|1|2.0|C1|East\n");
    let file = create_temp_file(&bytes);

    let lines = try_read_sales_lines(file.path(), &TextEncoding::DEFAULT_ORDER).unwrap();

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Café Mug"));
}

#[test]
fn test_no_matching_encoding_is_an_error() {
    let bytes = b"header\nT1|\xFF\xFE|P1|x|1|1|C1|E\n";
    let file = create_temp_file(bytes);

    let result = try_read_sales_lines(file.path(), &[TextEncoding::Utf8]);

    assert!(matches!(result, Err(Error::Encoding { .. })));
}

#[test]
fn test_missing_file_is_file_not_found() {
    let result = try_read_sales_lines(
        Path::new("/definitely/not/here.txt"),
        &TextEncoding::DEFAULT_ORDER,
    );

    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

#[test]
fn test_read_sales_lines_degrades_to_empty() {
    let lines = read_sales_lines(
        Path::new("/definitely/not/here.txt"),
        &TextEncoding::DEFAULT_ORDER,
    );
    assert!(lines.is_empty());
}

#[test]
fn test_header_only_file_has_no_lines() {
    let file = create_temp_file(TEST_HEADER.as_bytes());
    let lines = try_read_sales_lines(file.path(), &TextEncoding::DEFAULT_ORDER).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let content = format!("{}\r\nT1|2024-01-01|P1|Pen|1|2.0|C1|East\r\n", TEST_HEADER);
    let file = create_temp_file(content.as_bytes());

    let lines = try_read_sales_lines(file.path(), &TextEncoding::DEFAULT_ORDER).unwrap();

    assert_eq!(lines, vec!["T1|2024-01-01|P1|Pen|1|2.0|C1|East".to_string()]);
}

#[test]
fn test_encoding_display_names() {
    assert_eq!(TextEncoding::Utf8.to_string(), "utf-8");
    assert_eq!(TextEncoding::Latin1.to_string(), "latin-1");
}
