use super::*;
use crate::types::Category;
use tempfile::TempDir;

fn exercise(name: &str) -> ExerciseRecord {
    ExerciseRecord {
        name: name.to_string(),
        category: Category::Strength,
        section_label: "Main Workout".to_string(),
        group_label: None,
        order: 1,
        sets: "3".to_string(),
        reps: "8".to_string(),
        rest_period: String::new(),
        notes: String::new(),
        focus: None,
        is_complex: false,
        is_circuit: false,
        complex_name: String::new(),
    }
}

// =========================================================================
// Formatting Tests
// =========================================================================

#[test]
fn test_format_exercise_minimal() {
    assert_eq!(format_exercise(&exercise("Squat")), "- [Group: None] Squat\n");
}

#[test]
fn test_format_exercise_with_details() {
    let ex = ExerciseRecord {
        group_label: Some("A".to_string()),
        rest_period: "90s".to_string(),
        notes: "Pause at bottom".to_string(),
        focus: Some("Bracing".to_string()),
        ..exercise("Squat")
    };
    assert_eq!(
        format_exercise(&ex),
        "- [Group: A] Squat\n  Rest: 90s (90s)\n  Notes: Pause at bottom\n  Focus: Bracing\n"
    );
}

#[test]
fn test_format_exercise_unparsed_rest_and_empty_focus() {
    let ex = ExerciseRecord {
        rest_period: "as needed".to_string(),
        focus: Some(String::new()),
        ..exercise("Carry")
    };
    assert_eq!(
        format_exercise(&ex),
        "- [Group: None] Carry\n  Rest: as needed\n"
    );
}

#[test]
fn test_format_exercise_oversized_rest_stays_text() {
    let ex = ExerciseRecord {
        rest_period: "71582789min".to_string(),
        ..exercise("Sled Drag")
    };
    assert_eq!(
        format_exercise(&ex),
        "- [Group: None] Sled Drag\n  Rest: 71582789min\n"
    );
}

#[test]
fn test_format_workout() {
    let workout = WorkoutRecord {
        title: "MONDAY".to_string(),
        day_of_week: 1,
        description: String::new(),
        estimated_duration: String::new(),
        exercises: vec![exercise("Squat"), exercise("Bench")],
    };
    let text = format_workout(&workout);
    assert!(text.starts_with("Workout: MONDAY (day 1)\nExercises:\n"));
    assert!(text.contains("- [Group: None] Bench\n"));
}

// =========================================================================
// Input Detection Tests
// =========================================================================

#[test]
fn test_is_workbook() {
    assert!(is_workbook(Path::new("program.xlsx")));
    assert!(is_workbook(Path::new("PROGRAM.XLSX")));
    assert!(is_workbook(Path::new("program.ods")));
    assert!(!is_workbook(Path::new("seed_data.json")));
    assert!(!is_workbook(Path::new("program")));
}

// =========================================================================
// Command Tests
// =========================================================================

#[test]
fn test_template_then_import() {
    let temp_dir = TempDir::new().unwrap();
    let xlsx = temp_dir.path().join("template.xlsx");
    let seed = temp_dir.path().join("seed_data.json");

    template(xlsx.clone(), None).unwrap();
    import(xlsx, seed.clone(), None, true).unwrap();

    let document = writer::read_seed(&seed).unwrap();
    assert_eq!(document.workouts.len(), 7);
    assert_eq!(document.exercise_count(), 7);
}

#[test]
fn test_inspect_reads_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    let xlsx = temp_dir.path().join("template.xlsx");
    let seed = temp_dir.path().join("seed_data.yaml");

    template(xlsx.clone(), None).unwrap();
    import(xlsx.clone(), seed.clone(), None, false).unwrap();

    assert!(inspect(seed, None).is_ok());
    assert!(inspect(xlsx, None).is_ok());
}

#[test]
fn test_import_missing_workbook_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = import(
        temp_dir.path().join("missing.xlsx"),
        temp_dir.path().join("out.json"),
        None,
        false,
    );
    assert!(result.is_err());
}

#[test]
fn test_bad_config_fails_before_reading() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.yaml");
    std::fs::write(&config, "recovery_day: 9\n").unwrap();

    let result = template(temp_dir.path().join("t.xlsx"), Some(config));
    assert!(matches!(result, Err(crate::error::ImportError::Config(_))));
}
