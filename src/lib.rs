//! Liftsheet - workout spreadsheet importer
//!
//! Turns hand-authored training workbooks (one sheet per day, free-text section
//! titles, "1A."-style superset prefixes) into a structured seed document:
//! one program, one workout per day sheet, ordered exercise records.
//!
//! # Features
//!
//! - Header row detection and keyword column mapping
//! - Section, superset, complex, circuit and finisher inference
//! - Tolerant parsing: malformed rows are skipped, never fatal
//! - JSON/YAML seed output, starter workbook templates
//!
//! # Example
//!
//! ```no_run
//! use liftsheet::config::ImportConfig;
//! use liftsheet::excel::WorkbookReader;
//! use liftsheet::import::Importer;
//!
//! let workbook = WorkbookReader::new("Spartan_Elite_Complete_Program.xlsx").read()?;
//! let seed = Importer::new(ImportConfig::default()).import(&workbook);
//!
//! println!("Workouts: {}", seed.workouts.len());
//! println!("Exercises: {}", seed.exercise_count());
//! # Ok::<(), liftsheet::error::ImportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod import;
pub mod rest;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::ImportConfig;
pub use error::{ImportError, ImportResult};
pub use import::{import_workbook, Importer};
pub use types::{Category, Cell, ExerciseRecord, Grid, SeedDocument, Workbook, WorkoutRecord};
