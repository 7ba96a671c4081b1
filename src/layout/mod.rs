//! Structural inference over the menu grid.
//!
//! Menu spreadsheets arrive with no fixed schema: the weekday header may sit
//! on any row, dates may live in their own row or inside the weekday cells,
//! and nutrition-metadata rows are interleaved with dishes. This module is
//! the best-effort step that recovers a per-day structure from the grid.
//! "Not found" is an explicit outcome here, never a panic: a sheet without a
//! recognizable weekday row is skipped upstream with a warning.

pub mod columns;
pub mod header;
pub mod weekday;

pub use columns::{DayColumn, DishEntry, extract_day_columns};
pub use header::{HeaderLayout, locate_headers};
pub use weekday::Weekday;
