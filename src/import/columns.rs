//! Column mapping from header text

use crate::types::Cell;

/// Logical fields read from an exercise row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Exercise,
    Sets,
    Reps,
    Rest,
    Notes,
    Focus,
}

/// Header keywords in priority order. A cell maps to the first keyword it contains.
const KEYWORDS: [(&str, Field); 5] = [
    ("EXERCISE", Field::Exercise),
    ("SETS", Field::Sets),
    ("REPS", Field::Reps),
    ("REST", Field::Rest),
    ("NOTES", Field::Notes),
];

const FOCUS_KEYWORD: &str = "FOCUS";

/// Column index per field. Unresolved fields read as "" on every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub exercise: Option<usize>,
    pub sets: Option<usize>,
    pub reps: Option<usize>,
    pub rest: Option<usize>,
    pub notes: Option<usize>,
    pub focus: Option<usize>,
}

impl ColumnMap {
    /// Map the header row. Scans left to right; for the keyword fields a later
    /// matching cell overwrites an earlier one. FOCUS is searched separately and
    /// the first matching cell is kept.
    pub fn from_header(header: &[Cell]) -> Self {
        let mut map = ColumnMap::default();

        for (idx, cell) in header.iter().enumerate() {
            let text = cell.to_text().to_uppercase();
            if let Some((_, field)) = KEYWORDS.iter().find(|(kw, _)| text.contains(kw)) {
                *map.slot(*field) = Some(idx);
            }
        }

        map.focus = header
            .iter()
            .position(|cell| cell.to_text().to_uppercase().contains(FOCUS_KEYWORD));

        map
    }

    /// Column index resolved for `field`, if any
    pub fn get(&self, field: Field) -> Option<usize> {
        match field {
            Field::Exercise => self.exercise,
            Field::Sets => self.sets,
            Field::Reps => self.reps,
            Field::Rest => self.rest,
            Field::Notes => self.notes,
            Field::Focus => self.focus,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<usize> {
        match field {
            Field::Exercise => &mut self.exercise,
            Field::Sets => &mut self.sets,
            Field::Reps => &mut self.reps,
            Field::Rest => &mut self.rest,
            Field::Notes => &mut self.notes,
            Field::Focus => &mut self.focus,
        }
    }

    /// Raw text of `field` in `row`; "" when unresolved or past the row's end
    pub fn read(&self, row: &[Cell], field: Field) -> String {
        self.get(field)
            .and_then(|idx| row.get(idx))
            .map(Cell::to_text)
            .unwrap_or_default()
    }

    /// Whether the header carried a FOCUS column
    pub fn has_focus(&self) -> bool {
        self.focus.is_some()
    }
}
