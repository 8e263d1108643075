//! Error handling tests

use liftsheet::config::ImportConfig;
use liftsheet::error::ImportError;
use liftsheet::writer;
use std::path::Path;

#[test]
fn test_error_display_prefixes() {
    assert_eq!(
        ImportError::Excel("bad zip".to_string()).to_string(),
        "Excel error: bad zip"
    );
    assert_eq!(
        ImportError::Config("day 9".to_string()).to_string(),
        "Configuration error: day 9"
    );
    assert_eq!(
        ImportError::Export("locked".to_string()).to_string(),
        "Export error: locked"
    );
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: ImportError = io.into();
    assert!(matches!(err, ImportError::Io(_)));
    assert!(err.to_string().starts_with("IO error:"));
}

#[test]
fn test_config_load_missing_file_is_io_error() {
    let result = ImportConfig::load(Path::new("/nonexistent/config.yaml"));
    assert!(matches!(result, Err(ImportError::Io(_))));
}

#[test]
fn test_malformed_seed_json_is_json_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("seed_data.json");
    std::fs::write(&path, "{\"program\": ").unwrap();

    let result = writer::read_seed(&path);
    assert!(matches!(result, Err(ImportError::Json(_))));
}

#[test]
fn test_seed_with_unknown_category_is_rejected() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("seed_data.yaml");
    std::fs::write(
        &path,
        r#"
program: { name: P, description: D, duration_weeks: 1 }
workouts:
  - title: T
    day_of_week: 1
    description: D
    estimated_duration: 60 min
    exercises:
      - name: Squat
        category: cardio
        section_label: Main Workout
        group_label: null
        order: 1
        sets: "3"
        reps: "5"
        rest_period: ""
        notes: ""
        focus: null
        is_complex: false
        is_circuit: false
        complex_name: ""
"#,
    )
    .unwrap();

    let result = writer::read_seed(&path);
    assert!(matches!(result, Err(ImportError::Yaml(_))));
}
