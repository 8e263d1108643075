//! Import configuration
//!
//! Defaults reproduce the Spartan Elite workbook layout. A YAML file may override
//! any top-level field:
//!
//! ```yaml
//! program:
//!   name: Hybrid Base
//!   description: 8-Week Base Block
//!   duration_weeks: 8
//! sheets:
//!   - { sheet: "WEEK A - MON", day: 1 }
//!   - { sheet: "WEEK A - THU", day: 4 }
//! recovery_day: null
//! ```

use crate::error::{ImportError, ImportResult};
use crate::types::ProgramRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One entry of the sheet → day lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetMapping {
    pub sheet: String,
    pub day: u8,
}

impl SheetMapping {
    /// Map `sheet` to `day`
    pub fn new(sheet: impl Into<String>, day: u8) -> Self {
        Self {
            sheet: sheet.into(),
            day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub program: ProgramRecord,
    /// Processed in declaration order
    pub sheets: Vec<SheetMapping>,
    pub estimated_duration: String,
    /// `{sheet}` is replaced with the sheet name
    pub workout_description: String,
    /// Section label in effect before the first section-header row
    pub initial_section: String,
    /// Every exercise on this day is categorized as recovery
    pub recovery_day: Option<u8>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            program: ProgramRecord {
                name: "Spartan Elite".to_string(),
                description: "6-Week Performance Block".to_string(),
                duration_weeks: 6,
            },
            sheets: vec![
                SheetMapping::new("DAY 1 - MON", 1),
                SheetMapping::new("DAY 2 - TUE", 2),
                SheetMapping::new("DAY 3 - WED", 3),
                SheetMapping::new("DAY 4 - THU", 4),
                SheetMapping::new("DAY 5 - FRI", 5),
                SheetMapping::new("DAY 6 - SAT", 6),
                SheetMapping::new("DAY 7 - SUN", 7),
            ],
            estimated_duration: "60-90 min".to_string(),
            workout_description: "Workout for {sheet}".to_string(),
            initial_section: "Main Workout".to_string(),
            recovery_day: Some(7),
        }
    }
}

impl ImportConfig {
    /// Load and validate a YAML configuration file
    pub fn load(path: &Path) -> ImportResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a YAML config and validate it
    pub fn from_yaml_str(content: &str) -> ImportResult<Self> {
        let config: ImportConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to the defaults
    pub fn load_or_default(path: Option<&Path>) -> ImportResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject empty names, duplicate sheets, and days outside 1-7
    pub fn validate(&self) -> ImportResult<()> {
        let mut seen = HashSet::new();
        for mapping in &self.sheets {
            if mapping.sheet.is_empty() {
                return Err(ImportError::Config("sheet name must not be empty".to_string()));
            }
            if !(1..=7).contains(&mapping.day) {
                return Err(ImportError::Config(format!(
                    "sheet '{}' maps to day {}, expected 1-7",
                    mapping.sheet, mapping.day
                )));
            }
            if !seen.insert(mapping.sheet.as_str()) {
                return Err(ImportError::Config(format!(
                    "sheet '{}' is listed more than once",
                    mapping.sheet
                )));
            }
        }
        if let Some(day) = self.recovery_day {
            if !(1..=7).contains(&day) {
                return Err(ImportError::Config(format!(
                    "recovery_day {} is out of range, expected 1-7",
                    day
                )));
            }
        }
        Ok(())
    }

    /// Day number for a sheet name (exact match)
    pub fn day_for(&self, sheet: &str) -> Option<u8> {
        self.sheets
            .iter()
            .find(|m| m.sheet == sheet)
            .map(|m| m.day)
    }

    /// Workout description for `sheet`
    pub fn describe_workout(&self, sheet: &str) -> String {
        self.workout_description.replace("{sheet}", sheet)
    }
}
