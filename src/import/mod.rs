//! Spreadsheet → seed document pipeline
//!
//! sheet selection → header location → column mapping → row classification →
//! assembly. Each sheet is parsed with its own [`RowState`], so sheets are
//! independent of one another. Malformed content never fails the import; it
//! degrades to skipped rows, empty fields or an empty workout.

pub mod columns;
pub mod header;
pub mod rows;
pub mod sheets;

pub use columns::{ColumnMap, Field};
pub use header::locate_header;
pub use rows::{classify_row, RowOutcome, RowState, SheetContext};
pub use sheets::{select_sheets, SelectedSheet};

use crate::config::ImportConfig;
use crate::types::{ExerciseRecord, Grid, SeedDocument, Workbook, WorkoutRecord};
use tracing::{debug, info, warn};

/// Builds seed documents from decoded workbooks
#[derive(Debug, Clone, Default)]
pub struct Importer {
    config: ImportConfig,
}

impl Importer {
    /// Create a new importer
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// The configuration this importer runs with
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import every configured sheet present in `workbook`
    pub fn import(&self, workbook: &Workbook) -> SeedDocument {
        let mut document = SeedDocument::new(self.config.program.clone());

        for sheet in select_sheets(&self.config, workbook) {
            info!("Processing {}...", sheet.name);
            document.add_workout(self.import_sheet(sheet.name, sheet.day, sheet.grid));
        }

        info!(
            "Imported {} workouts, {} exercises",
            document.workouts.len(),
            document.exercise_count()
        );
        document
    }

    /// Build the workout for one sheet. A sheet without a header row still
    /// yields a workout, with no exercises.
    pub fn import_sheet(&self, sheet_name: &str, day: u8, grid: &Grid) -> WorkoutRecord {
        let exercises = match locate_header(grid) {
            Some(header_idx) => self.extract_exercises(sheet_name, day, grid, header_idx),
            None => {
                warn!("Could not find header for {}", sheet_name);
                Vec::new()
            }
        };

        WorkoutRecord {
            title: workout_title(grid, sheet_name),
            day_of_week: day,
            description: self.config.describe_workout(sheet_name),
            estimated_duration: self.config.estimated_duration.clone(),
            exercises,
        }
    }

    fn extract_exercises(
        &self,
        sheet_name: &str,
        day: u8,
        grid: &Grid,
        header_idx: usize,
    ) -> Vec<ExerciseRecord> {
        let header = grid.row(header_idx).map(Vec::as_slice).unwrap_or_default();
        let columns = ColumnMap::from_header(header);
        debug!("{} columns: {:?} (header row {})", sheet_name, columns, header_idx);

        let ctx = SheetContext {
            columns: &columns,
            recovery: self.config.recovery_day == Some(day),
        };
        let mut state = RowState::new(self.config.initial_section.clone());

        grid.rows()
            .iter()
            .skip(header_idx + 1)
            .filter_map(|row| match classify_row(&mut state, row, &ctx) {
                RowOutcome::Exercise(record) => Some(record),
                RowOutcome::Section | RowOutcome::Skipped => None,
            })
            .collect()
    }
}

/// Convenience wrapper around [`Importer::import`]
pub fn import_workbook(workbook: &Workbook, config: &ImportConfig) -> SeedDocument {
    Importer::new(config.clone()).import(workbook)
}

/// Title from cell A1, falling back to the sheet name
fn workout_title(grid: &Grid, sheet_name: &str) -> String {
    let title = grid.cell_text(0, 0);
    if title.is_empty() {
        sheet_name.to_string()
    } else {
        title
    }
}
