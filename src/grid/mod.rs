//! Dense text view over one worksheet.
//!
//! The audit pipeline never touches the spreadsheet reader directly; it works
//! against [`SheetGrid`], a rows-by-columns grid of already-stringified cell
//! values. Missing and empty cells both read as the empty string, so lookup
//! never fails on ragged row lengths.

use crate::common::text::clean_cell_text;

const EMPTY_CELL: &str = "";

/// A rows × columns grid of text cells for a single worksheet.
///
/// Construction is the only mutation point; an audit run treats the grid as
/// read-only. Row and column indices are 0-based.
#[derive(Debug, Clone)]
pub struct SheetGrid {
    name: String,
    rows: Vec<Vec<String>>,
    column_count: usize,
}

impl SheetGrid {
    /// Create a grid from pre-stringified rows. Rows may be ragged; short
    /// rows read as empty cells past their end.
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        SheetGrid {
            name: name.into(),
            rows,
            column_count,
        }
    }

    /// Convenience constructor from `&str` rows, used heavily in tests.
    pub fn from_rows<R, C>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<C>>,
        C: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::new(name, rows)
    }

    /// The worksheet name this grid was read from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (the widest row).
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Whether the grid holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw cell text at `(row, col)`; out-of-range lookups yield `""`.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or(EMPTY_CELL)
    }

    /// Cleaned cell text at `(row, col)`: line breaks stripped, whitespace
    /// trimmed. This is what all structural matching operates on.
    pub fn cell_clean(&self, row: usize, col: usize) -> String {
        clean_cell_text(self.cell(row, col))
    }

    /// Iterate over the cleaned cells of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = String> + '_ {
        (0..self.column_count).map(move |col| self.cell_clean(row, col))
    }

    /// Iterate over the cleaned cells of one column.
    pub fn column(&self, col: usize) -> impl Iterator<Item = String> + '_ {
        (0..self.rows.len()).map(move |row| self.cell_clean(row, col))
    }

    /// All cell text in reading order, joined with newlines. Used for
    /// whole-sheet keyword scans such as vendor detection.
    pub fn joined_text(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows.len() {
            for col in 0..self.column_count {
                let cell = self.cell_clean(row, col);
                if !cell.is_empty() {
                    out.push_str(&cell);
                    out.push('\n');
                }
            }
        }
        out
    }
}
