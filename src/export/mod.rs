//! Highlighted-copy export.
//!
//! Writes a fresh workbook carrying the audited sheets' text, with the cells
//! behind forbidden-spice and repetition findings filled in the two contract
//! review colors. This is a side effect on a new file; the original workbook
//! is never touched.

use std::collections::HashMap;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, Workbook};

use crate::common::Result;
use crate::grid::SheetGrid;
use crate::rules::{RuleKind, Violation};

/// Fill for forbidden-spice findings (light red).
const SPICE_FILL: Color = Color::RGB(0xFFC7CE);

/// Fill for same-day repetition findings (light amber).
const REPETITION_FILL: Color = Color::RGB(0xFFEB9C);

fn highlight_color(rule: RuleKind) -> Option<Color> {
    match rule {
        RuleKind::ForbiddenSpice => Some(SPICE_FILL),
        RuleKind::Repetition => Some(REPETITION_FILL),
        _ => None,
    }
}

/// Write a copy of the audited sheets to `path`, highlighting the cells of
/// every forbidden-spice and repetition finding.
pub fn export_highlighted_copy(
    sheets: &[(&SheetGrid, &[Violation])],
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    for (grid, violations) in sheets {
        let worksheet = workbook.add_worksheet().set_name(grid.name())?;

        let mut fills: HashMap<(usize, usize), Color> = HashMap::new();
        for violation in *violations {
            let Some(color) = highlight_color(violation.rule) else {
                continue;
            };
            for cell in violation.location.cell_refs() {
                fills.insert((cell.row, cell.col), color);
            }
        }

        for row in 0..grid.row_count() {
            for col in 0..grid.column_count() {
                let text = grid.cell(row, col);
                let fill = fills.get(&(row, col));
                if text.is_empty() && fill.is_none() {
                    continue;
                }
                let (r, c) = (row as u32, col as u16);
                match fill {
                    Some(color) => {
                        let format = Format::new().set_background_color(*color);
                        worksheet.write_string_with_format(r, c, text, &format)?;
                    }
                    None => {
                        worksheet.write_string(r, c, text)?;
                    }
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{CellRef, Location, Severity};

    fn spice_violation(row: usize, col: usize) -> Violation {
        Violation {
            rule: RuleKind::ForbiddenSpice,
            severity: Severity::Error,
            weekday: None,
            date_label: None,
            item: "麻辣豆腐".to_string(),
            message: "週一 偵測到辣味菜餚".to_string(),
            location: Location::Cell(CellRef { row, col }),
        }
    }

    #[test]
    fn test_highlight_colors_cover_both_categories() {
        assert_eq!(highlight_color(RuleKind::ForbiddenSpice), Some(SPICE_FILL));
        assert_eq!(highlight_color(RuleKind::Repetition), Some(REPETITION_FILL));
        assert_eq!(highlight_color(RuleKind::MarkerFrequency), None);
        assert_eq!(highlight_color(RuleKind::MissingPremiumIngredient), None);
    }

    #[test]
    fn test_exported_copy_round_trips_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highlighted.xlsx");

        let grid = SheetGrid::from_rows(
            "週菜單",
            vec![vec!["", "週一"], vec!["主菜", "麻辣豆腐"]],
        );
        let violations = vec![spice_violation(1, 1)];

        export_highlighted_copy(&[(&grid, violations.as_slice())], &path).unwrap();

        let grids = crate::reader::read_workbook(&path).unwrap();
        assert_eq!(grids[0].name(), "週菜單");
        assert_eq!(grids[0].cell_clean(0, 1), "週一");
        assert_eq!(grids[0].cell_clean(1, 1), "麻辣豆腐");
    }
}
