//! The rule evaluator.
//!
//! `evaluate` is stateless: it reads an immutable [`SheetAudit`] plus a
//! [`VendorProfile`] and produces violation records. No rule suppresses
//! another; the only coupling is that soup dishes are owned by the
//! soup-consistency check and skipped by the repetition check.

use regex::Regex;
use serde::Serialize;

use super::profile::{FrequencyScope, VendorProfile, WeightSpec};
use super::violation::{CellRef, Location, RuleKind, Severity, Violation};
use crate::common::text::{cjk_prefix, count_glyph};
use crate::grid::SheetGrid;
use crate::layout::{DayColumn, DishEntry};

/// Evaluator input for one sheet: the extracted day columns plus the full
/// sheet text for sheet-level keyword scans.
#[derive(Debug, Clone)]
pub struct SheetAudit {
    pub sheet_name: String,
    pub day_columns: Vec<DayColumn>,
    /// All cell text of the sheet, used by whole-sheet checks (premium
    /// fish) and vendor detection.
    pub full_text: String,
}

impl SheetAudit {
    pub fn new(grid: &SheetGrid, day_columns: Vec<DayColumn>) -> Self {
        SheetAudit {
            sheet_name: grid.name().to_string(),
            day_columns,
            full_text: grid.joined_text(),
        }
    }
}

/// A check that passed with something worth reporting (e.g. which premium
/// fish were found).
#[derive(Debug, Clone, Serialize)]
pub struct PassedCheck {
    pub rule: RuleKind,
    pub message: String,
}

/// The evaluator output for one sheet.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Evaluation {
    pub violations: Vec<Violation>,
    pub passed: Vec<PassedCheck>,
}

/// Apply the vendor's full rule set to one sheet.
pub fn evaluate(sheet: &SheetAudit, profile: &VendorProfile) -> Evaluation {
    let mut out = Evaluation::default();
    check_marker_frequency(sheet, profile, &mut out);
    check_forbidden_spice(sheet, profile, &mut out);
    check_premium_ingredient(sheet, profile, &mut out);
    check_repetition(sheet, profile, &mut out);
    if profile.check_soup_consistency {
        check_soup_consistency(sheet, profile, &mut out);
    }
    check_weight_specs(sheet, profile, &mut out);
    out
}

fn check_marker_frequency(sheet: &SheetAudit, profile: &VendorProfile, out: &mut Evaluation) {
    for marker in &profile.markers {
        match profile.frequency_scope {
            FrequencyScope::PerWeek => {
                let mut total = 0;
                let mut cells = Vec::new();
                for day in &sheet.day_columns {
                    for dish in &day.dishes {
                        let n = count_glyph(&dish.text, marker.glyph);
                        if n > 0 {
                            cells.push(CellRef {
                                row: dish.row,
                                col: day.column,
                            });
                        }
                        total += n;
                    }
                }
                if total > marker.limit {
                    out.violations.push(Violation {
                        rule: RuleKind::MarkerFrequency,
                        severity: Severity::Error,
                        weekday: None,
                        date_label: None,
                        item: marker.label.clone(),
                        message: format!(
                            "{}({})本週出現 {} 次(合約限 {} 次)",
                            marker.label, marker.glyph, total, marker.limit
                        ),
                        location: Location::Cells(cells),
                    });
                }
            }
            FrequencyScope::PerDay => {
                for day in &sheet.day_columns {
                    let mut total = 0;
                    let mut cells = Vec::new();
                    for dish in &day.dishes {
                        let n = count_glyph(&dish.text, marker.glyph);
                        if n > 0 {
                            cells.push(CellRef {
                                row: dish.row,
                                col: day.column,
                            });
                        }
                        total += n;
                    }
                    if total > marker.limit {
                        out.violations.push(Violation {
                            rule: RuleKind::MarkerFrequency,
                            severity: Severity::Error,
                            weekday: Some(day.weekday),
                            date_label: day.date_label.clone(),
                            item: marker.label.clone(),
                            message: format!(
                                "{}({}){} 出現 {} 次(合約限 {} 次)",
                                marker.label,
                                marker.glyph,
                                day.weekday.label(),
                                total,
                                marker.limit
                            ),
                            location: Location::Cells(cells),
                        });
                    }
                }
            }
        }
    }
}

fn check_forbidden_spice(sheet: &SheetAudit, profile: &VendorProfile, out: &mut Evaluation) {
    for day in &sheet.day_columns {
        if !profile.spice_days.contains(&day.weekday) {
            continue;
        }
        for dish in &day.dishes {
            if profile.spice_markers.iter().any(|m| dish.text.contains(m)) {
                out.violations.push(Violation {
                    rule: RuleKind::ForbiddenSpice,
                    severity: Severity::Error,
                    weekday: Some(day.weekday),
                    date_label: day.date_label.clone(),
                    item: dish.text.clone(),
                    message: format!(
                        "{} 偵測到辣味菜餚「{}」(依合約晚餐禁止)",
                        day.weekday.label(),
                        dish.text
                    ),
                    location: Location::Cell(CellRef {
                        row: dish.row,
                        col: day.column,
                    }),
                });
            }
        }
    }
}

fn check_premium_ingredient(sheet: &SheetAudit, profile: &VendorProfile, out: &mut Evaluation) {
    let found: Vec<&str> = profile
        .premium_keywords
        .iter()
        .filter(|k| sheet.full_text.contains(k.as_str()))
        .map(String::as_str)
        .collect();

    if found.is_empty() {
        out.violations.push(Violation {
            rule: RuleKind::MissingPremiumIngredient,
            severity: Severity::Error,
            weekday: None,
            date_label: None,
            item: "高級魚類".to_string(),
            message: "本週未偵測到合約定義之「高級魚類」".to_string(),
            location: Location::Sheet,
        });
    } else {
        out.passed.push(PassedCheck {
            rule: RuleKind::MissingPremiumIngredient,
            message: format!("已配置高級魚類:{}", found.join("、")),
        });
    }
}

fn check_repetition(sheet: &SheetAudit, profile: &VendorProfile, out: &mut Evaluation) {
    for day in &sheet.day_columns {
        // Soup dishes belong to the soup-consistency check; exempt
        // categories (seasonal fruit/vegetables) repeat by design.
        let candidates: Vec<(&DishEntry, String)> = day
            .dishes
            .iter()
            .filter(|d| !is_exempt(&d.text, profile) && !is_soup(&d.text, profile))
            .filter_map(|d| {
                let core = cjk_prefix(&d.text, profile.core_prefix_len);
                (!core.is_empty()).then_some((d, core))
            })
            .collect();

        for i in 0..candidates.len() {
            for j in i + 1..candidates.len() {
                let (first, first_core) = &candidates[i];
                let (second, second_core) = &candidates[j];
                if first_core == second_core {
                    out.violations.push(Violation {
                        rule: RuleKind::Repetition,
                        severity: Severity::Error,
                        weekday: Some(day.weekday),
                        date_label: day.date_label.clone(),
                        item: format!("{} / {}", first.text, second.text),
                        message: format!(
                            "{} 菜色重複:「{}」與「{}」共用主要食材「{}」",
                            day.weekday.label(),
                            first.text,
                            second.text,
                            first_core
                        ),
                        location: Location::Cells(vec![
                            CellRef {
                                row: first.row,
                                col: day.column,
                            },
                            CellRef {
                                row: second.row,
                                col: day.column,
                            },
                        ]),
                    });
                }
            }
        }
    }
}

fn check_soup_consistency(sheet: &SheetAudit, profile: &VendorProfile, out: &mut Evaluation) {
    for day in &sheet.day_columns {
        let soups: Vec<&DishEntry> = day
            .dishes
            .iter()
            .filter(|d| is_soup(&d.text, profile))
            .collect();

        let mut distinct: Vec<&str> = Vec::new();
        for soup in &soups {
            if !distinct.contains(&soup.text.as_str()) {
                distinct.push(&soup.text);
            }
        }

        if distinct.len() > 1 {
            out.violations.push(Violation {
                rule: RuleKind::SoupConsistency,
                severity: Severity::Error,
                weekday: Some(day.weekday),
                date_label: day.date_label.clone(),
                item: distinct.join("、"),
                message: format!(
                    "{} 湯品不一致:{}(同日應供應單一湯品)",
                    day.weekday.label(),
                    distinct.join("、")
                ),
                location: Location::Cells(
                    soups
                        .iter()
                        .map(|d| CellRef {
                            row: d.row,
                            col: day.column,
                        })
                        .collect(),
                ),
            });
        }
    }
}

fn check_weight_specs(sheet: &SheetAudit, profile: &VendorProfile, out: &mut Evaluation) {
    for spec in &profile.weight_specs {
        let Some(pattern) = compile_weight_pattern(spec) else {
            continue;
        };
        for day in &sheet.day_columns {
            for dish in &day.dishes {
                if dish.text.contains(&spec.ingredient) && !pattern.is_match(&dish.text) {
                    out.violations.push(Violation {
                        rule: RuleKind::WeightSpec,
                        severity: profile.weight_severity,
                        weekday: Some(day.weekday),
                        date_label: day.date_label.clone(),
                        item: dish.text.clone(),
                        message: format!(
                            "「{}」含{},生重需符合 {} 規範,請確認標註",
                            dish.text, spec.ingredient, spec.hint
                        ),
                        location: Location::Cell(CellRef {
                            row: dish.row,
                            col: day.column,
                        }),
                    });
                }
            }
        }
    }
}

fn compile_weight_pattern(spec: &WeightSpec) -> Option<Regex> {
    match Regex::new(&spec.pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(
                ingredient = %spec.ingredient,
                %err,
                "skipping weight check with invalid pattern"
            );
            None
        }
    }
}

fn is_exempt(text: &str, profile: &VendorProfile) -> bool {
    profile.exempt_keywords.iter().any(|k| text.contains(k))
}

fn is_soup(text: &str, profile: &VendorProfile) -> bool {
    profile.soup_keywords.iter().any(|k| text.contains(k))
}
