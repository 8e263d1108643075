use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

//==============================================================================
// Cell Grid (input side)
//==============================================================================

/// A single decoded spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Coerce the cell to text. Absent cells read as the empty string.
    ///
    /// A numeric `0` reads as `"0"`, not as empty, so a zero sets cell still marks an exercise row.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            // f64's Display already drops the ".0" of whole numbers (5.0 → "5")
            Cell::Number(n) => n.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}

pub type Row = Vec<Cell>;

/// Rows of cells for one sheet. Rows may be ragged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Wrap decoded rows as a grid
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a grid from anything row-shaped, e.g. `&[&["Exercise", "Sets"]]`
    pub fn from_rows<I, R, C>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text of a cell; out-of-range positions read as ""
    pub fn cell_text(&self, row: usize, col: usize) -> String {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(Cell::to_text)
            .unwrap_or_default()
    }
}

/// Named sheets in workbook order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<(String, Grid)>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet, replacing any sheet already registered under the same name
    pub fn add_sheet(&mut self, name: impl Into<String>, grid: Grid) {
        let name = name.into();
        if let Some(existing) = self.sheets.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = grid;
        } else {
            self.sheets.push((name, grid));
        }
    }

    pub fn with_sheet(mut self, name: impl Into<String>, grid: Grid) -> Self {
        self.add_sheet(name, grid);
        self
    }

    /// Exact, case-sensitive lookup
    pub fn sheet(&self, name: &str) -> Option<&Grid> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, grid)| grid)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

//==============================================================================
// Seed Document (output side)
//==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strength,
    Hypertrophy,
    Complex,
    Circuit,
    Recovery,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Strength => "strength",
            Category::Hypertrophy => "hypertrophy",
            Category::Complex => "complex",
            Category::Circuit => "circuit",
            Category::Recovery => "recovery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exercise line of a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub name: String,
    pub category: Category,
    pub section_label: String,
    pub group_label: Option<String>,
    /// 1-based, contiguous within a workout
    pub order: u32,
    pub sets: String,
    pub reps: String,
    pub rest_period: String,
    pub notes: String,
    /// None when the sheet has no FOCUS column
    pub focus: Option<String>,
    pub is_complex: bool,
    pub is_circuit: bool,
    pub complex_name: String,
}

impl ExerciseRecord {
    /// Rest period in seconds, when the text is in a recognizable form ("90s", "2-3 min")
    pub fn rest_seconds(&self) -> Option<u32> {
        crate::rest::parse_rest_seconds(&self.rest_period)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub title: String,
    /// 1 = Monday … 7 = Sunday
    pub day_of_week: u8,
    pub description: String,
    pub estimated_duration: String,
    pub exercises: Vec<ExerciseRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub name: String,
    pub description: String,
    pub duration_weeks: u32,
}

/// One program and its workouts, as handed to persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedDocument {
    pub program: ProgramRecord,
    pub workouts: Vec<WorkoutRecord>,
}

impl SeedDocument {
    /// Start an empty document for `program`
    pub fn new(program: ProgramRecord) -> Self {
        Self {
            program,
            workouts: Vec::new(),
        }
    }

    /// Append a workout, keeping sheet-table order
    pub fn add_workout(&mut self, workout: WorkoutRecord) {
        self.workouts.push(workout);
    }

    /// Total exercises across all workouts
    pub fn exercise_count(&self) -> usize {
        self.workouts.iter().map(|w| w.exercises.len()).sum()
    }

    /// Unique exercise names in first-seen order, each with the category of its
    /// first occurrence. Exercises are upserted by name, so later rows never
    /// change an existing entry.
    pub fn distinct_exercises(&self) -> Vec<(&str, Category)> {
        let mut seen = HashSet::new();
        self.workouts
            .iter()
            .flat_map(|w| w.exercises.iter())
            .filter(|ex| seen.insert(ex.name.as_str()))
            .map(|ex| (ex.name.as_str(), ex.category))
            .collect()
    }
}
