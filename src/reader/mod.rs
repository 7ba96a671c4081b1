//! Workbook reading.
//!
//! This is a thin wrapper over calamine: open a workbook, stringify every
//! sheet into a [`SheetGrid`], and map reader failures into the crate's
//! error taxonomy. A failure here (corrupt, truncated, or password-protected
//! file) aborts the audit of that file only; the caller displays the cause.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::common::{Error, Result};
use crate::grid::SheetGrid;

/// Read every sheet of the workbook at `path` into a text grid.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Vec<SheetGrid>> {
    let mut workbook = open_workbook_auto(path.as_ref())?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(Error::EmptyWorkbook);
    }

    let mut grids = Vec::with_capacity(sheet_names.len());
    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| Error::Workbook(format!("sheet '{name}': {e}")))?;

        // calamine ranges are anchored at their first non-empty cell; pad
        // back to A1 so grid coordinates stay absolute for highlighting.
        let (start_row, start_col) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));
        let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row];
        for row in range.rows() {
            let mut cells = vec![String::new(); start_col];
            cells.extend(row.iter().map(data_to_string));
            rows.push(cells);
        }
        grids.push(SheetGrid::new(name.clone(), rows));
    }

    Ok(grids)
}

/// Stringify one cell value the way the audit expects to see it.
fn data_to_string(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // Integral floats print without the trailing ".0" so that weight
        // annotations like 150 read back as "150".
        Data::Float(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
        Data::Float(n) => format!("{n}"),
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        // Error cells carry no menu text.
        Data::Error(_) => String::new(),
        // Real Excel dates become ISO labels the date-row locator accepts.
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => format!("{}", dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_stringification() {
        assert_eq!(data_to_string(&Data::Float(150.0)), "150");
        assert_eq!(data_to_string(&Data::Float(0.5)), "0.5");
        assert_eq!(data_to_string(&Data::Empty), "");
    }

    #[test]
    fn test_read_back_written_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("週菜單").unwrap();
        sheet.write_string(0, 1, "週一").unwrap();
        sheet.write_string(1, 1, "煎鮭魚").unwrap();
        workbook.save(&path).unwrap();

        let grids = read_workbook(&path).unwrap();
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].name(), "週菜單");
        assert_eq!(grids[0].cell_clean(0, 1), "週一");
        assert_eq!(grids[0].cell_clean(1, 1), "煎鮭魚");
    }

    #[test]
    fn test_unreadable_file_is_workbook_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-workbook.xlsx");
        std::fs::write(&path, b"plain text, not a zip").unwrap();

        let err = read_workbook(&path).unwrap_err();
        assert!(matches!(err, Error::Workbook(_) | Error::Io(_)));
    }
}
