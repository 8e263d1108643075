//! Sheet selection: configured sheet table ∩ sheets present in the workbook

use crate::config::ImportConfig;
use crate::types::{Grid, Workbook};
use tracing::info;

/// A sheet that is both configured and present
#[derive(Debug, Clone, Copy)]
pub struct SelectedSheet<'a> {
    pub name: &'a str,
    pub day: u8,
    pub grid: &'a Grid,
}

/// Resolve the sheet table against the workbook, in table order.
/// Missing sheets are logged and skipped; sheets not in the table are ignored.
pub fn select_sheets<'a>(config: &'a ImportConfig, workbook: &'a Workbook) -> Vec<SelectedSheet<'a>> {
    config
        .sheets
        .iter()
        .filter_map(|mapping| match workbook.sheet(&mapping.sheet) {
            Some(grid) => Some(SelectedSheet {
                name: &mapping.sheet,
                day: mapping.day,
                grid,
            }),
            None => {
                info!("Skipping {} (not found)", mapping.sheet);
                None
            }
        })
        .collect()
}
