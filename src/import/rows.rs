//! Row classification and exercise extraction
//!
//! Rows below the header are walked in order with a [`RowState`] carrying the
//! current section label and the next order number. Each row is one of:
//!
//! - skipped (empty row, empty name, name that is only an ordinal prefix)
//! - a section header (name present, sets and reps both empty)
//! - an exercise entry, emitted as an [`ExerciseRecord`]

use super::columns::{ColumnMap, Field};
use crate::types::{Category, Cell, ExerciseRecord};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Group label forced for finisher sections
pub const FINISHER_GROUP: &str = "Finisher";

/// "1A. ", "2.", "10b." at the start of an exercise name
fn ordinal_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(\d+[A-Z]?|\d+)\.\s*").expect("ordinal prefix pattern"))
}

/// "A. Strength" → "A"
fn lettered_section() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Z])\.\s+").expect("lettered section pattern"))
}

/// Per-sheet parsing state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    pub current_section: String,
    pub next_order: u32,
}

impl RowState {
    /// Fresh state for one sheet, starting in `initial_section`
    pub fn new(initial_section: impl Into<String>) -> Self {
        Self {
            current_section: initial_section.into(),
            next_order: 1,
        }
    }
}

/// Sheet-wide inputs that do not change from row to row
#[derive(Debug, Clone, Copy)]
pub struct SheetContext<'a> {
    pub columns: &'a ColumnMap,
    /// Force every exercise on this sheet to the recovery category
    pub recovery: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Skipped,
    Section,
    Exercise(ExerciseRecord),
}

//==============================================================================
// Group label rules
//==============================================================================

/// A rule inspects the section and raw exercise name and may assign a label.
/// Rules run in order; a later assignment replaces an earlier one.
type GroupRule = fn(section: &str, raw_name: &str) -> Option<String>;

const GROUP_RULES: [GroupRule; 3] = [section_letter, ordinal_letter, finisher_section];

fn section_letter(section: &str, _raw_name: &str) -> Option<String> {
    lettered_section()
        .captures(section)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn ordinal_letter(_section: &str, raw_name: &str) -> Option<String> {
    let prefix = ordinal_prefix().captures(raw_name)?.get(1)?.as_str();
    prefix
        .chars()
        .find(|c| c.is_ascii_uppercase())
        .map(|c| c.to_string())
}

fn finisher_section(section: &str, _raw_name: &str) -> Option<String> {
    section
        .to_uppercase()
        .contains("FINISHER")
        .then(|| FINISHER_GROUP.to_string())
}

/// Apply [`GROUP_RULES`] in order
pub fn derive_group_label(section: &str, raw_name: &str) -> Option<String> {
    GROUP_RULES
        .iter()
        .fold(None, |label, rule| rule(section, raw_name).or(label))
}

//==============================================================================
// Name, category and section flags
//==============================================================================

/// Strip the ordinal prefix and surrounding whitespace
pub fn clean_name(raw_name: &str) -> String {
    ordinal_prefix().replace(raw_name, "").trim().to_string()
}

/// Section kind flags as (is_complex, is_circuit)
pub fn section_flags(section: &str) -> (bool, bool) {
    let upper = section.to_uppercase();
    let is_complex = upper.contains("COMPLEX");
    let is_circuit = upper.contains("CIRCUIT") || upper.contains("FINISHER");
    (is_complex, is_circuit)
}

/// Category for an exercise in `section`; `recovery` wins over everything
pub fn derive_category(clean_name: &str, section: &str, recovery: bool) -> Category {
    if recovery {
        return Category::Recovery;
    }

    let (is_complex, is_circuit) = section_flags(section);
    if is_complex {
        Category::Complex
    } else if is_circuit {
        Category::Circuit
    } else if clean_name.contains("Cur") || clean_name.contains("Ext") {
        // Curls and extensions
        Category::Hypertrophy
    } else {
        Category::Strength
    }
}

//==============================================================================
// Step function
//==============================================================================

/// Classify one row, updating `state` and possibly emitting an exercise
pub fn classify_row(state: &mut RowState, row: &[Cell], ctx: &SheetContext<'_>) -> RowOutcome {
    if row.is_empty() {
        return RowOutcome::Skipped;
    }

    let columns = ctx.columns;
    let raw_name = columns.read(row, Field::Exercise).trim().to_string();
    if raw_name.is_empty() {
        return RowOutcome::Skipped;
    }

    let sets = columns.read(row, Field::Sets);
    let reps = columns.read(row, Field::Reps);

    if sets.is_empty() && reps.is_empty() {
        debug!("Section: {}", raw_name);
        state.current_section = raw_name;
        return RowOutcome::Section;
    }

    let section = state.current_section.as_str();
    let group_label = derive_group_label(section, &raw_name);

    let name = clean_name(&raw_name);
    if name.is_empty() {
        return RowOutcome::Skipped;
    }

    let category = derive_category(&name, section, ctx.recovery);
    let (is_complex, is_circuit) = section_flags(section);
    let complex_name = if is_complex || is_circuit {
        section.to_string()
    } else {
        String::new()
    };

    let record = ExerciseRecord {
        name,
        category,
        section_label: section.to_string(),
        group_label,
        order: state.next_order,
        sets,
        reps,
        rest_period: columns.read(row, Field::Rest),
        notes: columns.read(row, Field::Notes),
        focus: columns
            .has_focus()
            .then(|| columns.read(row, Field::Focus)),
        is_complex,
        is_circuit,
        complex_name,
    };
    state.next_order += 1;

    RowOutcome::Exercise(record)
}
