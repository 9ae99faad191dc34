//! Descriptor + CSV loading through the public entry point.

use sift_core::{DataType, Value};
use sift_loader::{load_table, DescriptorError, LoadError};
use std::fs;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_table_with_descriptor() {
    let dir = TempDir::new().unwrap();
    let csv = write_fixture(
        &dir,
        "people.csv",
        "fullname;age;salary\nMike Smith;35;15000.99\nJane Doe;17;0\n",
    );
    let descriptor = write_fixture(
        &dir,
        "people.yaml",
        "name: people\nfields:\n  - name: age\n    type: number\n  - name: fullname\n    type: string\n",
    );

    let table = load_table(&csv, &descriptor).unwrap();
    assert_eq!(table.name(), "people");
    assert_eq!(table.row_count(), 2);
    let types: Vec<DataType> = table.fields().iter().map(|f| f.data_type()).collect();
    assert_eq!(types, vec![DataType::Number, DataType::String]);
    assert_eq!(
        table.get_column("fullname").unwrap().get(1),
        Some(&Value::from("Jane Doe"))
    );
}

#[test]
fn test_load_table_bad_descriptor() {
    let dir = TempDir::new().unwrap();
    let csv = write_fixture(&dir, "t.csv", "a\n1\n");
    let descriptor = write_fixture(&dir, "t.yaml", "name: t\nsep: '::'\n");

    let err = load_table(&csv, &descriptor).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Descriptor(DescriptorError::InvalidSeparator(_))
    ));
}

#[test]
fn test_load_table_missing_csv() {
    let dir = TempDir::new().unwrap();
    let descriptor = write_fixture(&dir, "t.yaml", "name: t\n");
    let err = load_table(dir.path().join("missing.csv"), &descriptor).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(_)));
}
