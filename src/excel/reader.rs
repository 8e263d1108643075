//! Workbook reader implementation - spreadsheet file → cell grids

use crate::error::{ImportError, ImportResult};
use crate::types::{Cell, Grid, Row, Workbook};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Decodes a spreadsheet file into one [`Grid`] per sheet
pub struct WorkbookReader {
    path: PathBuf,
}

impl WorkbookReader {
    /// Create a reader for the workbook at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> ImportResult<Vec<String>> {
        let workbook = open_workbook_auto(&self.path).map_err(|e| {
            ImportError::Excel(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        Ok(workbook.sheet_names().to_vec())
    }

    /// Read every worksheet. Sheets that cannot be decoded (chart sheets,
    /// corrupt parts) are logged and left out.
    pub fn read(&self) -> ImportResult<Workbook> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            ImportError::Excel(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut result = Workbook::new();
        for sheet_name in workbook.sheet_names().to_vec() {
            match workbook.worksheet_range(&sheet_name) {
                Ok(range) => {
                    let grid = range_to_grid(&range);
                    debug!("Read {} ({} rows)", sheet_name, grid.len());
                    result.add_sheet(sheet_name, grid);
                }
                Err(e) => warn!("Skipping unreadable sheet {}: {}", sheet_name, e),
            }
        }

        Ok(result)
    }
}

/// Lay the used range out at its absolute position so row 0 / column 0 are A1
pub(crate) fn range_to_grid(range: &Range<Data>) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        return Grid::default();
    };

    let mut rows: Vec<Row> = vec![Vec::new(); start_row as usize];
    for data_row in range.rows() {
        let mut row: Row = vec![Cell::Empty; start_col as usize];
        row.extend(data_row.iter().map(convert_cell));
        rows.push(row);
    }

    Grid::new(rows)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        // #N/A, #DIV/0! and friends
        _ => Cell::Empty,
    }
}
