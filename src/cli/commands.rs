use crate::config::ImportConfig;
use crate::error::ImportResult;
use crate::excel::{WorkbookReader, WorkbookTemplate};
use crate::import::Importer;
use crate::types::{ExerciseRecord, SeedDocument, WorkoutRecord};
use crate::writer;
use colored::Colorize;
use std::path::{Path, PathBuf};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| WORKBOOK_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Import a workbook, or read an existing seed file
fn load_document(input: &Path, config: ImportConfig) -> ImportResult<SeedDocument> {
    if is_workbook(input) {
        let workbook = WorkbookReader::new(input).read()?;
        Ok(Importer::new(config).import(&workbook))
    } else {
        writer::read_seed(input)
    }
}

/// Execute the import command
pub fn import(
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    verbose: bool,
) -> ImportResult<()> {
    println!("{}", "🏋 Liftsheet - Workbook Import".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let config = ImportConfig::load_or_default(config.as_deref())?;

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }
    let workbook = WorkbookReader::new(&input).read()?;
    if verbose {
        println!("   Found {} sheets\n", workbook.len());
    }

    let document = Importer::new(config).import(&workbook);

    if verbose {
        for workout in &document.workouts {
            println!(
                "   📋 Day {}: {} ({} exercises)",
                workout.day_of_week,
                workout.title.bright_blue(),
                workout.exercises.len()
            );
        }
        println!();
        println!("{}", "💾 Writing seed file...".cyan());
    }

    writer::write_seed(&output, &document)?;

    println!("{}", "✅ Import Complete!".bold().green());
    println!("   Program:   {}", document.program.name);
    println!("   Workouts:  {}", document.workouts.len());
    println!("   Exercises: {}", document.exercise_count());
    println!(
        "   Distinct:  {}",
        document.distinct_exercises().len()
    );
    println!("   Seed file: {}\n", output.display());

    Ok(())
}

/// Execute the inspect command
pub fn inspect(input: PathBuf, config: Option<PathBuf>) -> ImportResult<()> {
    let config = ImportConfig::load_or_default(config.as_deref())?;
    let document = load_document(&input, config)?;

    println!(
        "{} ({} weeks)",
        document.program.name.bold().green(),
        document.program.duration_weeks
    );
    if document.workouts.is_empty() {
        println!("{}", "No workouts found!".yellow());
        return Ok(());
    }

    for workout in &document.workouts {
        println!();
        print!("{}", format_workout(workout));
    }
    Ok(())
}

/// Execute the sheets command
pub fn sheets(input: PathBuf, config: Option<PathBuf>) -> ImportResult<()> {
    let config = ImportConfig::load_or_default(config.as_deref())?;
    let names = WorkbookReader::new(&input).sheet_names()?;

    println!("Sheets ({}):", names.len());
    for name in &names {
        match config.day_for(name) {
            Some(day) => println!("  {} → day {}", name.bright_blue(), day),
            None => println!("  {} → {}", name, "unmapped".dimmed()),
        }
    }

    let missing: Vec<&str> = config
        .sheets
        .iter()
        .map(|m| m.sheet.as_str())
        .filter(|s| !names.iter().any(|n| n == *s))
        .collect();
    if !missing.is_empty() {
        println!("\n{}", "Configured but missing:".yellow());
        for name in missing {
            println!("  {}", name);
        }
    }
    Ok(())
}

/// Execute the template command
pub fn template(output: PathBuf, config: Option<PathBuf>) -> ImportResult<()> {
    let config = ImportConfig::load_or_default(config.as_deref())?;
    let sheet_count = config.sheets.len();

    WorkbookTemplate::new(config).export(&output)?;

    println!("{}", "✅ Template written".bold().green());
    println!("   {} day sheets → {}", sheet_count, output.display());
    Ok(())
}

/// Plain-text listing of one workout
fn format_workout(workout: &WorkoutRecord) -> String {
    let mut out = format!(
        "Workout: {} (day {})\nExercises:\n",
        workout.title, workout.day_of_week
    );
    for exercise in &workout.exercises {
        out.push_str(&format_exercise(exercise));
    }
    out
}

fn format_exercise(exercise: &ExerciseRecord) -> String {
    let mut out = format!(
        "- [Group: {}] {}\n",
        exercise.group_label.as_deref().unwrap_or("None"),
        exercise.name
    );
    if !exercise.rest_period.is_empty() {
        match exercise.rest_seconds() {
            Some(secs) => out.push_str(&format!("  Rest: {} ({}s)\n", exercise.rest_period, secs)),
            None => out.push_str(&format!("  Rest: {}\n", exercise.rest_period)),
        }
    }
    if !exercise.notes.is_empty() {
        out.push_str(&format!("  Notes: {}\n", exercise.notes));
    }
    if let Some(focus) = exercise.focus.as_deref().filter(|f| !f.is_empty()) {
        out.push_str(&format!("  Focus: {}\n", focus));
    }
    out
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
