//! Per-file audit orchestration.
//!
//! One workbook is processed sheet by sheet, each sheet independently:
//! vendor selection, header location, day-column extraction, then rule
//! evaluation. A sheet without a recognizable weekday header is recorded as
//! skipped (with a warning) and the remaining sheets continue; only a
//! wholesale file-read failure aborts the file.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::common::Result;
use crate::grid::SheetGrid;
use crate::layout::{extract_day_columns, locate_headers};
use crate::reader::read_workbook;
use crate::rules::profile::select_vendor;
use crate::rules::{PassedCheck, SheetAudit, Vendor, VendorProfile, Violation, evaluate};

/// Options for one audit run.
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// Force this vendor profile instead of keyword detection.
    pub vendor_override: Option<Vendor>,
}

/// The audit outcome for one sheet.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub sheet_name: String,
    pub vendor: Vendor,
    pub violations: Vec<Violation>,
    pub passed: Vec<PassedCheck>,
    /// Why the sheet could not be audited, when its structure was not
    /// recognized. Skipping is a per-sheet condition, not an error.
    pub skipped_reason: Option<String>,
}

impl AuditReport {
    /// Whether the sheet was audited and came back without findings.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.skipped_reason.is_none()
    }
}

/// The audit outcome for a whole workbook.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file_name: String,
    pub sheets: Vec<AuditReport>,
}

impl FileReport {
    /// All violations across all sheets, in sheet order.
    pub fn all_violations(&self) -> impl Iterator<Item = &Violation> {
        self.sheets.iter().flat_map(|s| s.violations.iter())
    }
}

/// Audit every sheet of the workbook at `path`.
pub fn audit_file<P: AsRef<Path>>(path: P, options: &AuditOptions) -> Result<FileReport> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let grids = read_workbook(path)?;
    let sheets = grids
        .iter()
        .map(|grid| {
            let profile = profile_for(grid, &file_name, options);
            audit_sheet(grid, &profile)
        })
        .collect();

    Ok(FileReport { file_name, sheets })
}

/// Resolve the vendor profile for one sheet.
fn profile_for(grid: &SheetGrid, file_name: &str, options: &AuditOptions) -> VendorProfile {
    let vendor = options
        .vendor_override
        .unwrap_or_else(|| select_vendor(file_name, grid.name(), &grid.joined_text()));
    debug!(sheet = grid.name(), vendor = vendor.display_name(), "profile selected");
    VendorProfile::for_vendor(vendor)
}

/// Audit a single sheet grid against an already-selected profile.
pub fn audit_sheet(grid: &SheetGrid, profile: &VendorProfile) -> AuditReport {
    let Some(layout) = locate_headers(grid) else {
        warn!(sheet = grid.name(), "no weekday header row found, sheet skipped");
        return AuditReport {
            sheet_name: grid.name().to_string(),
            vendor: profile.vendor,
            violations: Vec::new(),
            passed: Vec::new(),
            skipped_reason: Some("找不到星期標題列,無法辨識菜單結構".to_string()),
        };
    };

    let day_columns = extract_day_columns(grid, layout);
    let audit = SheetAudit::new(grid, day_columns);
    let evaluation = evaluate(&audit, profile);

    AuditReport {
        sheet_name: grid.name().to_string(),
        vendor: profile.vendor,
        violations: evaluation.violations,
        passed: evaluation.passed,
        skipped_reason: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleKind;

    fn menu_grid() -> SheetGrid {
        SheetGrid::from_rows(
            "小學菜單",
            vec![
                vec!["", "3/31", "4/1"],
                vec!["", "週一", "週二"],
                vec!["主菜", "🌶️麻辣豆腐", "◎炸排骨"],
                vec!["副菜", "◎炸雞腿", "炒青菜"],
                vec!["主食", "糙米飯", "白飯"],
            ],
        )
    }

    #[test]
    fn test_full_sheet_audit() {
        let report = audit_sheet(&menu_grid(), &VendorProfile::default_profile());
        assert!(report.skipped_reason.is_none());

        let rules: Vec<RuleKind> = report.violations.iter().map(|v| v.rule).collect();
        assert!(rules.contains(&RuleKind::ForbiddenSpice));
        assert!(rules.contains(&RuleKind::MarkerFrequency));
        assert!(rules.contains(&RuleKind::MissingPremiumIngredient));
    }

    #[test]
    fn test_violations_carry_date_labels() {
        let report = audit_sheet(&menu_grid(), &VendorProfile::default_profile());
        let spice = report
            .violations
            .iter()
            .find(|v| v.rule == RuleKind::ForbiddenSpice)
            .unwrap();
        assert_eq!(spice.date_label.as_deref(), Some("3/31"));
    }

    #[test]
    fn test_sheet_without_header_is_skipped_not_error() {
        let grid = SheetGrid::from_rows("營養標示", vec![vec!["蛋白質", "脂肪"]]);
        let report = audit_sheet(&grid, &VendorProfile::default_profile());
        assert!(report.skipped_reason.is_some());
        assert!(report.violations.is_empty());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_file_audit_continues_past_skipped_sheets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let notes = workbook.add_worksheet();
        notes.set_name("營養標示").unwrap();
        notes.write_string(0, 0, "熱量統計").unwrap();
        let menu = workbook.add_worksheet();
        menu.set_name("週菜單").unwrap();
        menu.write_string(0, 0, "週一").unwrap();
        menu.write_string(1, 0, "煎鮭魚").unwrap();
        workbook.save(&path).unwrap();

        let report = audit_file(&path, &AuditOptions::default()).unwrap();
        assert_eq!(report.sheets.len(), 2);
        assert!(report.sheets[0].skipped_reason.is_some());
        assert!(report.sheets[1].skipped_reason.is_none());
        assert!(report.sheets[1].is_clean());
    }

    #[test]
    fn test_vendor_override() {
        let options = AuditOptions {
            vendor_override: Some(Vendor::FoodCourt),
        };
        let profile = profile_for(&menu_grid(), "menu.xlsx", &options);
        assert_eq!(profile.vendor, Vendor::FoodCourt);
    }
}
