//! Structured violation records.

use serde::Serialize;

use crate::layout::Weekday;

/// Identifies which contractual rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Processed/fried marker glyph over its frequency cap.
    MarkerFrequency,
    /// Spicy dish on a forbidden-spice weekday.
    ForbiddenSpice,
    /// No premium fish anywhere in the week.
    MissingPremiumIngredient,
    /// Two same-day dishes sharing a main-ingredient core.
    Repetition,
    /// More than one distinct soup in a single day.
    SoupConsistency,
    /// Missing contractual weight annotation on a named ingredient.
    WeightSpec,
}

impl RuleKind {
    /// Short human-readable rule name for table output.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::MarkerFrequency => "頻次檢核",
            RuleKind::ForbiddenSpice => "禁辣日檢核",
            RuleKind::MissingPremiumIngredient => "高級魚類檢核",
            RuleKind::Repetition => "菜色重複檢核",
            RuleKind::SoupConsistency => "湯品一致檢核",
            RuleKind::WeightSpec => "規格標註檢核",
        }
    }
}

/// How severe a finding is: errors are contract violations, warnings are
/// annotations to confirm by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A 0-based grid cell reference, used to map a violation back to the sheet
/// for highlight export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// Where in the sheet a violation was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Sheet-level finding with no cell to point at (e.g. a missing
    /// required ingredient).
    Sheet,
    /// A single offending cell.
    Cell(CellRef),
    /// Several cells involved in one finding (repetition pairs, all marked
    /// dishes of an over-limit week).
    Cells(Vec<CellRef>),
}

impl Location {
    /// The cells this finding maps back to, empty for sheet-level findings.
    pub fn cell_refs(&self) -> &[CellRef] {
        match self {
            Location::Sheet => &[],
            Location::Cell(cell) => std::slice::from_ref(cell),
            Location::Cells(cells) => cells,
        }
    }
}

/// One audit finding. Immutable once produced by the evaluator.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub rule: RuleKind,
    pub severity: Severity,
    /// Day the finding applies to; `None` for week- or sheet-level findings.
    pub weekday: Option<Weekday>,
    /// Raw date label of that day, when the sheet provides one.
    pub date_label: Option<String>,
    /// The offending dish text (or a joined list for multi-dish findings).
    pub item: String,
    /// Full user-facing message.
    pub message: String,
    pub location: Location,
}
