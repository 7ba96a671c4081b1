//! Bento - contract-rule auditing for weekly school-cafeteria menu spreadsheets.
//!
//! This library takes an Excel workbook containing one or more weekly menu
//! sheets, locates the weekday/date header structure inside each sheet's cell
//! grid, slices out the per-day dish lists, and evaluates a fixed set of
//! contractual food-service rules against them.
//!
//! # Checks
//!
//! - **Marker frequency**: processed-food (`△`) and fried-food (`◎`) glyphs
//!   are capped per contract (default once per week)
//! - **Forbidden-spice days**: spicy dishes are disallowed on configured
//!   weekdays (default Monday, Tuesday, Thursday)
//! - **Premium fish**: at least one contractually defined high-value fish
//!   must appear somewhere in the week
//! - **Same-day repetition**: two dishes sharing the same main-ingredient
//!   prefix on a single day
//! - **Soup consistency** and **weight annotations**: vendor-specific checks
//!
//! # Example
//!
//! ```no_run
//! use bento::audit::{AuditOptions, audit_file};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = audit_file("menu.xlsx", &AuditOptions::default())?;
//! for sheet in &report.sheets {
//!     for violation in &sheet.violations {
//!         println!("{}", violation.message);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Auditing an in-memory grid
//!
//! ```
//! use bento::audit::audit_sheet;
//! use bento::grid::SheetGrid;
//! use bento::rules::profile::VendorProfile;
//!
//! let grid = SheetGrid::from_rows(
//!     "週菜單",
//!     vec![
//!         vec!["", "週一", "週二"],
//!         vec!["主菜", "鮭魚排", "滷雞腿"],
//!     ],
//! );
//! let report = audit_sheet(&grid, &VendorProfile::default_profile());
//! assert!(report.skipped_reason.is_none());
//! ```

/// Shared error taxonomy and cell-text helpers used across the crate.
pub mod common;

/// Dense text-cell grid view over one worksheet.
pub mod grid;

/// Workbook reading via calamine, producing [`grid::SheetGrid`] values.
pub mod reader;

/// Structural inference: weekday/date header location and day-column slicing.
pub mod layout;

/// Vendor profiles, violation records, and the rule evaluator.
pub mod rules;

/// Rendering of audit results as text tables and JSON.
pub mod report;

/// Highlighted-copy export of an audited workbook.
pub mod export;

/// Per-file audit orchestration tying the other modules together.
pub mod audit;

// Re-export commonly used types for convenience
pub use audit::{AuditOptions, AuditReport, FileReport, audit_file, audit_sheet};
pub use common::{Error, Result};
pub use grid::SheetGrid;
pub use rules::profile::{Vendor, VendorProfile};
pub use rules::violation::{Location, RuleKind, Severity, Violation};
