//! Report rendering.
//!
//! Purely presentational: violation records in, text or JSON out. The table
//! mirrors the contract-review sheet the kitchen staff already use (date,
//! weekday, item, reason).

use crate::audit::{AuditReport, FileReport};
use crate::common::Result;
use crate::rules::{Severity, Violation};

/// Render one sheet's violations as an aligned text table.
///
/// Column padding counts characters, not display width, so CJK columns are
/// approximately rather than perfectly aligned in a terminal.
pub fn render_table(violations: &[Violation]) -> String {
    let header = ["日期", "星期", "項目", "原因"];
    let mut rows: Vec<[String; 4]> = vec![header.map(String::from)];
    for violation in violations {
        rows.push([
            violation.date_label.clone().unwrap_or_else(|| "-".to_string()),
            violation
                .weekday
                .map(|d| d.label().to_string())
                .unwrap_or_else(|| "全週".to_string()),
            violation.item.clone(),
            format!("{} {}", severity_symbol(violation.severity), violation.message),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let pad = widths[i] - cell.chars().count();
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Render the audit outcome of one sheet, including the mode banner, the
/// success state, and any passed-check notes.
pub fn render_sheet_report(report: &AuditReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "📋 {}(診斷模式:{})\n",
        report.sheet_name,
        report.vendor.display_name()
    ));

    if let Some(reason) = &report.skipped_reason {
        out.push_str(&format!("⚠️ 本頁未審核:{reason}\n"));
        return out;
    }

    if report.violations.is_empty() {
        out.push_str("🎉 本週菜單基礎規範審核通過。\n");
    } else {
        out.push_str(&render_table(&report.violations));
    }

    for passed in &report.passed {
        out.push_str(&format!("✅ {}\n", passed.message));
    }
    out
}

/// Render the whole workbook's audit report.
pub fn render_file_report(report: &FileReport) -> String {
    let mut out = format!("🍱 菜單審核報告:{}\n", report.file_name);
    for sheet in &report.sheets {
        out.push('\n');
        out.push_str(&render_sheet_report(sheet));
    }
    out
}

/// Serialize the whole report as pretty-printed JSON.
pub fn to_json(report: &FileReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn severity_symbol(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️",
    }
}
