//! Tests for reading records from CSV files

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use orgchart::domain::MAX_ROWS;
use orgchart::infrastructure::{CsvFileSource, InfraError, RecordSource};
use orgchart::util::testing::HEADER;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write csv");
    path
}

#[test]
fn given_missing_file_when_reading_then_source_not_found() {
    let source = CsvFileSource::new("/nonexistent/employees.csv");

    let result = source.read_records();

    assert!(matches!(result, Err(InfraError::SourceNotFound(_))));
    assert_eq!(
        result.unwrap_err().to_string(),
        "file does not exist: /nonexistent/employees.csv"
    );
}

#[test]
fn given_empty_file_when_reading_then_empty_source() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "empty.csv", "");

    let result = CsvFileSource::new(path).read_records();

    assert!(matches!(result, Err(InfraError::EmptySource(_))));
}

#[test]
fn given_crlf_file_when_reading_then_splits_header_and_rows() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        &temp,
        "employees.csv",
        &format!("{HEADER}\r\n123,Joe,Doe,60000,\r\n124,Martin,Chekov,45000,123\r\n"),
    );

    // Act
    let input = CsvFileSource::new(&path).read_records().unwrap();

    // Assert
    assert_eq!(input.header, HEADER);
    assert_eq!(
        input.rows,
        vec!["123,Joe,Doe,60000,", "124,Martin,Chekov,45000,123"]
    );
}

#[test]
fn given_oversized_file_when_reading_then_stops_one_row_past_the_limit() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let mut content = format!("{HEADER}\n");
    for i in 0..(MAX_ROWS + 50) {
        content.push_str(&format!("{i},Staff,Member,1000,0\n"));
    }
    let path = write_csv(&temp, "large.csv", &content);

    // Act
    let input = CsvFileSource::new(path).read_records().unwrap();

    // Assert
    assert_eq!(input.rows.len(), MAX_ROWS + 1);
}
