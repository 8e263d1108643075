//! Header row detection

use crate::types::{Cell, Grid};

/// Token that marks the column header row
pub const HEADER_TOKEN: &str = "EXERCISE";

/// Index of the first row whose joined, upper-cased text contains `EXERCISE`
pub fn locate_header(grid: &Grid) -> Option<usize> {
    grid.rows()
        .iter()
        .position(|row| !row.is_empty() && row_text(row).to_uppercase().contains(HEADER_TOKEN))
}

fn row_text(row: &[Cell]) -> String {
    row.iter().map(Cell::to_text).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_matching_row() {
        let grid = Grid::from_rows(vec![
            vec!["DAY 1 - Lower Power"],
            vec![],
            vec!["", "Exercise", "Sets", "Reps"],
            vec!["", "Exercises continue", "", ""],
        ]);
        assert_eq!(locate_header(&grid), Some(2));
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let grid = Grid::from_rows(vec![vec!["#", "exercise name"]]);
        assert_eq!(locate_header(&grid), Some(0));
    }

    #[test]
    fn test_token_split_across_cells_does_not_match() {
        let grid = Grid::from_rows(vec![vec!["EXER", "CISE"]]);
        assert_eq!(locate_header(&grid), None);
    }

    #[test]
    fn test_numeric_cells_are_coerced() {
        let grid = Grid::new(vec![
            vec![Cell::Number(1.0), Cell::Empty],
            vec![Cell::Number(2.0), Cell::from("EXERCISE")],
        ]);
        assert_eq!(locate_header(&grid), Some(1));
    }

    #[test]
    fn test_no_header() {
        let grid = Grid::from_rows(vec![vec!["Movement", "Sets"], vec!["Squat", "3"]]);
        assert_eq!(locate_header(&grid), None);
        assert_eq!(locate_header(&Grid::default()), None);
    }
}
