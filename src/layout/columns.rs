//! Per-day dish-list extraction.

use super::header::{HeaderLayout, date_label_in};
use super::weekday::Weekday;
use crate::grid::SheetGrid;

/// Row labels marking rows that hold actual dishes. When a label column is
/// present, rows without one of these labels are nutrition metadata
/// (calories, serving sizes) and must not be read as dishes.
const ROW_LABEL_TOKENS: [&str; 6] = ["主食", "主菜", "副菜", "蔬菜", "main dish", "side dish"];

/// Rows matching any of these keywords are dropped regardless of position.
const EXCLUDED_KEYWORDS: [&str; 5] = ["套餐", "熱量", "大卡", "雜糧", "份"];

/// One dish cell inside a day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishEntry {
    /// 0-based grid row the dish was read from.
    pub row: usize,
    /// Cleaned dish text.
    pub text: String,
}

/// The dishes served on one weekday, in grid order.
///
/// Constructed once per sheet per audit run; immutable afterwards.
#[derive(Debug, Clone)]
pub struct DayColumn {
    pub weekday: Weekday,
    /// Raw date label from the date row or the weekday header cell.
    pub date_label: Option<String>,
    /// 0-based grid column this day occupies.
    pub column: usize,
    pub dishes: Vec<DishEntry>,
}

/// Build a [`DayColumn`] for every column whose header cell carries a
/// weekday token.
///
/// Dish entries are the non-header cells of the column. When a row-label
/// column is detected, only rows labeled as main/side dishes are kept; rows
/// matching the exclusion keywords are dropped either way.
pub fn extract_day_columns(grid: &SheetGrid, layout: HeaderLayout) -> Vec<DayColumn> {
    let label_col = detect_label_column(grid, layout);
    let mut columns = Vec::new();

    for col in 0..grid.column_count() {
        let header = grid.cell_clean(layout.weekday_row, col);
        let Some(weekday) = Weekday::from_cell(&header) else {
            continue;
        };

        let date_label = layout
            .date_row
            .and_then(|row| date_label_in(&grid.cell_clean(row, col)))
            .or_else(|| date_label_in(&header));

        let mut dishes = Vec::new();
        for row in layout.weekday_row + 1..grid.row_count() {
            if layout.date_row == Some(row) {
                continue;
            }
            let text = grid.cell_clean(row, col);
            if text.is_empty() || is_excluded(&text) {
                continue;
            }
            if let Some(label_col) = label_col {
                let label = grid.cell_clean(row, label_col);
                if is_excluded(&label) {
                    continue;
                }
                if !ROW_LABEL_TOKENS.iter().any(|t| label.contains(t)) {
                    continue;
                }
            }
            dishes.push(DishEntry { row, text });
        }

        columns.push(DayColumn {
            weekday,
            date_label,
            column: col,
            dishes,
        });
    }

    columns
}

/// Find the row-label column, if the sheet has one: a column to the left of
/// any day column whose cells below the header match the label tokens.
fn detect_label_column(grid: &SheetGrid, layout: HeaderLayout) -> Option<usize> {
    for col in 0..grid.column_count() {
        let header = grid.cell_clean(layout.weekday_row, col);
        if Weekday::from_cell(&header).is_some() {
            // Label columns sit left of the first day column.
            return None;
        }
        let has_labels = (layout.weekday_row + 1..grid.row_count()).any(|row| {
            let cell = grid.cell_clean(row, col);
            ROW_LABEL_TOKENS.iter().any(|t| cell.contains(t))
        });
        if has_labels {
            return Some(col);
        }
    }
    None
}

fn is_excluded(text: &str) -> bool {
    EXCLUDED_KEYWORDS.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::locate_headers;

    fn labeled_grid() -> SheetGrid {
        SheetGrid::from_rows(
            "小學菜單",
            vec![
                vec!["", "3/31", "4/1"],
                vec!["", "週一", "週二"],
                vec!["主食", "糙米飯", "白飯"],
                vec!["主菜", "滷雞腿", "煎鮭魚"],
                vec!["副菜", "炒青菜", "燙花椰菜"],
                vec!["熱量", "850大卡", "820大卡"],
            ],
        )
    }

    #[test]
    fn test_one_column_per_weekday_header() {
        let grid = labeled_grid();
        let layout = locate_headers(&grid).unwrap();
        let columns = extract_day_columns(&grid, layout);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].weekday, Weekday::Mon);
        assert_eq!(columns[0].date_label.as_deref(), Some("3/31"));
        assert_eq!(columns[1].weekday, Weekday::Tue);
        assert_eq!(columns[1].column, 2);
    }

    #[test]
    fn test_nutrition_rows_are_not_dishes() {
        let grid = labeled_grid();
        let layout = locate_headers(&grid).unwrap();
        let columns = extract_day_columns(&grid, layout);
        let monday: Vec<&str> = columns[0].dishes.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(monday, vec!["糙米飯", "滷雞腿", "炒青菜"]);
    }

    #[test]
    fn test_unlabeled_grid_takes_all_cells() {
        let grid = SheetGrid::from_rows(
            "菜單",
            vec![
                vec!["週一", "週二"],
                vec!["滷雞腿", "煎鮭魚"],
                vec!["炒青菜", ""],
            ],
        );
        let layout = locate_headers(&grid).unwrap();
        let columns = extract_day_columns(&grid, layout);
        assert_eq!(columns[0].dishes.len(), 2);
        assert_eq!(columns[1].dishes.len(), 1);
        assert_eq!(columns[0].dishes[1].row, 2);
    }

    #[test]
    fn test_excluded_keyword_rows_dropped_without_labels() {
        let grid = SheetGrid::from_rows(
            "菜單",
            vec![
                vec!["週三"],
                vec!["雜糧飯套餐"],
                vec!["咖哩雞"],
                vec!["熱量 900 大卡"],
            ],
        );
        let layout = locate_headers(&grid).unwrap();
        let columns = extract_day_columns(&grid, layout);
        let dishes: Vec<&str> = columns[0].dishes.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(dishes, vec!["咖哩雞"]);
    }

    #[test]
    fn test_date_in_weekday_cell() {
        let grid = SheetGrid::from_rows(
            "菜單",
            vec![vec!["週五 4/4"], vec!["烤鯖魚"]],
        );
        let layout = locate_headers(&grid).unwrap();
        let columns = extract_day_columns(&grid, layout);
        assert_eq!(columns[0].date_label.as_deref(), Some("4/4"));
        assert_eq!(columns[0].dishes.len(), 1);
    }
}
