//! Starter workbook export

use crate::config::ImportConfig;
use crate::error::{ImportError, ImportResult};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Header row written to every day sheet
pub const TEMPLATE_HEADERS: [&str; 6] = ["Exercise", "Sets", "Reps", "Rest", "Notes", "Focus"];

/// Zero-based row of the header (row 3 in Excel terms)
const HEADER_ROW: u32 = 2;

/// Writes one sheet per configured sheet-table entry: title in A1, the column
/// header in row 3 and a short example block beneath it.
pub struct WorkbookTemplate {
    config: ImportConfig,
}

impl WorkbookTemplate {
    /// Create a template exporter for the configured day sheets
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Write one starter sheet per configured day to `output_path`
    pub fn export(&self, output_path: &Path) -> ImportResult<()> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        for mapping in &self.config.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&mapping.sheet).map_err(|e| {
                ImportError::Export(format!("Invalid sheet name '{}': {}", mapping.sheet, e))
            })?;
            write_day_sheet(worksheet, &mapping.sheet, &bold)
                .map_err(|e| ImportError::Export(format!("Failed to write {}: {}", mapping.sheet, e)))?;
        }

        workbook
            .save(output_path)
            .map_err(|e| ImportError::Export(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }
}

fn write_day_sheet(
    worksheet: &mut Worksheet,
    title: &str,
    bold: &Format,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    worksheet.write_string_with_format(0, 0, title, bold)?;

    for (col, header) in TEMPLATE_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(HEADER_ROW, col as u16, *header, bold)?;
    }
    worksheet.set_column_width(0, 32)?;
    worksheet.set_column_width(4, 40)?;

    let section_row = HEADER_ROW + 1;
    worksheet.write_string_with_format(section_row, 0, "A. Strength", bold)?;

    let example_row = section_row + 1;
    worksheet.write_string(example_row, 0, "1A. Back Squat")?;
    worksheet.write_number(example_row, 1, 4.0)?;
    worksheet.write_string(example_row, 2, "5")?;
    worksheet.write_string(example_row, 3, "2-3 min")?;
    worksheet.write_string(example_row, 4, "Replace with your own exercises")?;

    Ok(())
}
