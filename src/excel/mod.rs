//! Excel workbook access
//!
//! - Read: .xlsx/.xls/.ods → [`Workbook`](crate::types::Workbook) cell grids
//! - Template: starter .xlsx laid out the way the importer expects

mod reader;
mod template;

pub use reader::WorkbookReader;
pub use template::WorkbookTemplate;
