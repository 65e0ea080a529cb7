mod common;
use common::{temp_file, temp_out};
use rattendance::core::ImportLogic;
use rattendance::errors::AppError;
use rattendance::export::{ExportFormat, ExportLogic};
use rattendance::store::AttendanceStore;
use rattendance::store::seed::demo_store;
use std::fs;
use std::path::Path;

#[test]
fn test_import_roster_file() {
    let mut store = demo_store().unwrap();
    let csv = temp_file(
        "import_roster_file",
        "csv",
        "Student ID,Full Name\n3001,Eve\n3002\n3003,Frank,extra\n1001,Alice Dup\n3004,\"Doe, Jane\"\n",
    );

    let summary = ImportLogic::import(&mut store, "Physics 101", Path::new(&csv)).unwrap();
    assert_eq!(summary.added, 2);

    let ids: Vec<&str> = store
        .students("Physics 101")
        .unwrap()
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1001", "1002", "3001", "3004"]);
    assert_eq!(store.students("Physics 101").unwrap()[3].name, "Doe, Jane");
}

#[test]
fn test_import_twice_adds_nothing() {
    let mut store = AttendanceStore::new();
    store.create_class("Biology").unwrap();
    let csv = temp_file("import_twice", "csv", "id,name\n1001,Alice\n1002,Bob\n");

    let first = ImportLogic::import(&mut store, "Biology", Path::new(&csv)).unwrap();
    let second = ImportLogic::import(&mut store, "Biology", Path::new(&csv)).unwrap();
    assert_eq!(first.added, 2);
    assert_eq!(second.added, 0);
}

#[test]
fn test_import_blank_first_line_is_header() {
    let mut store = AttendanceStore::new();
    store.create_class("Biology").unwrap();
    let csv = temp_file("import_blank_first", "csv", "\nid,name\n1001,Alice\n");

    let summary = ImportLogic::import(&mut store, "Biology", Path::new(&csv)).unwrap();
    assert_eq!(summary.added, 2);

    let ids: Vec<&str> = store
        .students("Biology")
        .unwrap()
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["id", "1001"]);
}

#[test]
fn test_import_single_blank_line_adds_nothing() {
    let mut store = AttendanceStore::new();
    store.create_class("Biology").unwrap();
    let csv = temp_file("import_single_blank", "csv", "\n");

    let summary = ImportLogic::import(&mut store, "Biology", Path::new(&csv)).unwrap();
    assert_eq!(summary.added, 0);
    assert!(store.students("Biology").unwrap().is_empty());
}

#[test]
fn test_import_zero_byte_file_fails() {
    let mut store = AttendanceStore::new();
    store.create_class("Biology").unwrap();
    let csv = temp_file("import_zero_bytes", "csv", "");

    let err = ImportLogic::import(&mut store, "Biology", Path::new(&csv)).unwrap_err();
    assert!(matches!(err, AppError::ImportFailed { .. }));
}

#[test]
fn test_import_unknown_class_before_reading() {
    let mut store = AttendanceStore::new();
    let err = ImportLogic::import(&mut store, "Nope", Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, AppError::UnknownClass(_)));
}

#[test]
fn test_import_missing_file() {
    let mut store = demo_store().unwrap();
    let err = ImportLogic::import(&mut store, "Physics 101", Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, AppError::ImportFailed { .. }));
    assert!(err.to_string().starts_with("Failed to import CSV"));
    assert_eq!(store.students("Physics 101").unwrap().len(), 2);
}

#[test]
fn test_export_csv_seed() {
    let store = demo_store().unwrap();
    let out = temp_out("export_csv_seed", "csv");

    let n = ExportLogic::export(&store, "Physics 101", ExportFormat::Csv, Path::new(&out), false, false).unwrap();
    assert_eq!(n, 2);

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(
        content,
        "Date,Student ID,Student Name,Status\n\
         2023-10-26,1001,Alice,Present\n\
         2023-10-26,1002,Bob,Absent\n"
    );
}

#[test]
fn test_export_csv_header_only_when_empty() {
    let store = demo_store().unwrap();
    let out = temp_out("export_csv_empty", "csv");

    ExportLogic::export(&store, "History 202", ExportFormat::Csv, Path::new(&out), false, false).unwrap();
    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content, "Date,Student ID,Student Name,Status\n");
}

#[test]
fn test_export_orphan_and_quoting() {
    let mut store = demo_store().unwrap();
    store.add_student("History 202", "2003", "Smith, John").unwrap();
    store
        .mark_attendance(
            "History 202",
            "2003",
            chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            rattendance::models::AttendanceStatus::Present,
        )
        .unwrap();
    store.remove_student("Physics 101", "1001").unwrap();

    let out = temp_out("export_orphan", "csv");
    ExportLogic::export(&store, "Physics 101", ExportFormat::Csv, Path::new(&out), false, false).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("2023-10-26,1001,N/A,Present"));

    let out = temp_out("export_quoting", "csv");
    ExportLogic::export(&store, "History 202", ExportFormat::Csv, Path::new(&out), false, false).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("2024-02-01,2003,\"Smith, John\",Present"));
}

#[test]
fn test_export_json() {
    let store = demo_store().unwrap();
    let out = temp_out("export_json", "json");

    ExportLogic::export(&store, "Physics 101", ExportFormat::Json, Path::new(&out), false, false).unwrap();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["student_name"], "Alice");
    assert_eq!(arr[1]["status"], "Absent");
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let store = demo_store().unwrap();
    let out = temp_file("export_overwrite", "csv", "keep me\n");

    let err = ExportLogic::export(&store, "Physics 101", ExportFormat::Csv, Path::new(&out), false, false).unwrap_err();
    assert!(matches!(err, AppError::ExportFailed { .. }));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me\n");

    ExportLogic::export(&store, "Physics 101", ExportFormat::Csv, Path::new(&out), true, false).unwrap();
    assert!(fs::read_to_string(&out).unwrap().starts_with("Date,Student ID"));
}

#[test]
fn test_export_into_missing_directory() {
    let store = demo_store().unwrap();
    let out = std::env::temp_dir().join("rattendance_no_such_dir").join("out.csv");
    let err = ExportLogic::export(&store, "Physics 101", ExportFormat::Csv, &out, false, false).unwrap_err();
    assert!(matches!(err, AppError::ExportFailed { .. }));
}
