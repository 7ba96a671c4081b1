//! Weekday/date header-row location.

use once_cell::sync::Lazy;
use regex::Regex;

use super::weekday::Weekday;
use crate::grid::SheetGrid;

/// Date labels accepted in header cells: `3/31`, `03/31`, or `2025-03-31`.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}/\d{1,2}|\d{4}-\d{2}-\d{2}").unwrap());

/// The located header structure of one menu sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Row holding the weekday tokens. One day column per matching cell.
    pub weekday_row: usize,
    /// Row holding date labels, when dates live in their own row. May equal
    /// `weekday_row` for layouts like `"週一 3/31"`.
    pub date_row: Option<usize>,
}

/// Scan the grid top-to-bottom for the weekday header row and, separately,
/// the first row carrying date labels.
///
/// Returns `None` when no row contains a weekday token - the sheet has no
/// recognizable menu structure. The first matching row wins in both scans;
/// no attempt is made to disambiguate grids where several rows qualify.
pub fn locate_headers(grid: &SheetGrid) -> Option<HeaderLayout> {
    let weekday_row = (0..grid.row_count())
        .find(|&row| grid.row(row).any(|cell| Weekday::from_cell(&cell).is_some()))?;

    let date_row = (0..grid.row_count())
        .find(|&row| grid.row(row).any(|cell| DATE_PATTERN.is_match(&cell)));

    Some(HeaderLayout {
        weekday_row,
        date_row,
    })
}

/// Pull the date label out of a header cell, if present.
pub fn date_label_in(cell: &str) -> Option<String> {
    DATE_PATTERN.find(cell).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locates_weekday_and_date_rows() {
        let grid = SheetGrid::from_rows(
            "菜單",
            vec![
                vec!["康橋國際學校 週菜單"],
                vec!["", "3/31", "4/1"],
                vec!["", "週一", "週二"],
                vec!["主菜", "滷雞腿", "煎鮭魚"],
            ],
        );
        let layout = locate_headers(&grid).unwrap();
        assert_eq!(layout.weekday_row, 2);
        assert_eq!(layout.date_row, Some(1));
    }

    #[test]
    fn test_weekday_row_cells_contain_token() {
        // Invariant: the returned row holds at least one weekday token.
        let grid = SheetGrid::from_rows(
            "菜單",
            vec![vec!["標題"], vec!["週三"], vec!["週四"]],
        );
        let layout = locate_headers(&grid).unwrap();
        assert!(
            grid.row(layout.weekday_row)
                .any(|cell| Weekday::from_cell(&cell).is_some())
        );
        // First matching row wins.
        assert_eq!(layout.weekday_row, 1);
    }

    #[test]
    fn test_combined_weekday_date_row() {
        let grid = SheetGrid::from_rows(
            "菜單",
            vec![vec!["週一 3/31", "週二 4/1"], vec!["滷雞腿", "煎鮭魚"]],
        );
        let layout = locate_headers(&grid).unwrap();
        assert_eq!(layout.weekday_row, 0);
        assert_eq!(layout.date_row, Some(0));
    }

    #[test]
    fn test_no_weekday_row() {
        let grid = SheetGrid::from_rows("空白", vec![vec!["營養標示", "熱量"]]);
        assert_eq!(locate_headers(&grid), None);
    }

    #[test]
    fn test_iso_date_labels() {
        assert_eq!(date_label_in("2025-03-31"), Some("2025-03-31".to_string()));
        assert_eq!(date_label_in("週一 3/31"), Some("3/31".to_string()));
        assert_eq!(date_label_in("週一"), None);
    }
}
