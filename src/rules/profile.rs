//! Vendor profiles: the contractual rule parameters per catering supplier.
//!
//! Profiles are plain immutable values handed to the evaluator at call time.
//! Nothing here is module-level mutable state; two audits with different
//! profiles can run back to back without interference.

use serde::Serialize;

use super::violation::Severity;
use crate::layout::Weekday;

/// The known catering suppliers / menu modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    /// Fallback when no mode keyword matches.
    General,
    /// 新北食品, elementary-school group catering.
    Elementary,
    /// 新北食品, food-court counter service.
    FoodCourt,
    /// 暖禾餐飲 light-meal menus.
    LightMeal,
}

impl Vendor {
    /// Mode name shown in reports, mirroring the supplier contract wording.
    pub fn display_name(&self) -> &'static str {
        match self {
            Vendor::General => "通用模式",
            Vendor::Elementary => "新北食品-小學部",
            Vendor::FoodCourt => "新北食品-美食街",
            Vendor::LightMeal => "暖禾輕食",
        }
    }
}

/// Scope over which a marker glyph's frequency cap applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyScope {
    /// Count across every day of the sheet (the contract's reading of
    /// "once per week").
    PerWeek,
    /// Count within each day column separately.
    PerDay,
}

/// One capped marker glyph.
#[derive(Debug, Clone)]
pub struct MarkerRule {
    /// The reserved glyph as it appears in dish cells.
    pub glyph: char,
    /// Category name used in messages, e.g. 加工品.
    pub label: String,
    /// Maximum allowed occurrences within the configured scope.
    pub limit: usize,
}

/// A contractual weight-annotation requirement for a named ingredient.
#[derive(Debug, Clone)]
pub struct WeightSpec {
    /// Ingredient keyword that triggers the check.
    pub ingredient: String,
    /// Regex the dish text must match when the ingredient is present.
    pub pattern: String,
    /// Human-readable form of the requirement for messages.
    pub hint: String,
}

/// The full rule-parameter bundle for one vendor.
///
/// Every sheet maps to exactly one profile; [`select_vendor`] falls back to
/// [`Vendor::General`] when no mode keyword matches.
#[derive(Debug, Clone)]
pub struct VendorProfile {
    pub vendor: Vendor,
    /// Capped marker glyphs (processed-food, fried-food).
    pub markers: Vec<MarkerRule>,
    pub frequency_scope: FrequencyScope,
    /// Weekdays on which spicy dishes are contractually disallowed.
    pub spice_days: Vec<Weekday>,
    /// Substrings marking a dish as spicy.
    pub spice_markers: Vec<String>,
    /// Premium fish keywords; at least one must appear in the week.
    pub premium_keywords: Vec<String>,
    /// Dish categories exempt from the repetition check.
    pub exempt_keywords: Vec<String>,
    /// Substrings marking a dish as a soup or stew.
    pub soup_keywords: Vec<String>,
    /// Length of the CJK core prefix used for repetition detection.
    pub core_prefix_len: usize,
    /// Whether the one-soup-per-day consistency check applies.
    pub check_soup_consistency: bool,
    /// Ingredient weight-annotation requirements.
    pub weight_specs: Vec<WeightSpec>,
    /// Severity for weight-annotation findings.
    pub weight_severity: Severity,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl VendorProfile {
    /// The fallback profile ([`Vendor::General`]).
    pub fn default_profile() -> Self {
        Self::for_vendor(Vendor::General)
    }

    /// Build the rule parameters contracted for `vendor`.
    pub fn for_vendor(vendor: Vendor) -> Self {
        let base = VendorProfile {
            vendor,
            markers: vec![
                MarkerRule {
                    glyph: '△',
                    label: "加工品".to_string(),
                    limit: 1,
                },
                MarkerRule {
                    glyph: '◎',
                    label: "油炸類".to_string(),
                    limit: 1,
                },
            ],
            frequency_scope: FrequencyScope::PerWeek,
            spice_days: vec![Weekday::Mon, Weekday::Tue, Weekday::Thu],
            spice_markers: strings(&["辣", "🌶"]),
            premium_keywords: strings(&[
                "鮪魚",
                "鬼頭刀",
                "旗魚",
                "鮭魚",
                "扁鱈",
                "海鸚哥魚",
                "鯛魚",
            ]),
            exempt_keywords: strings(&["季節水果", "水果", "時蔬", "季節時蔬"]),
            soup_keywords: strings(&["湯", "羹"]),
            core_prefix_len: 2,
            check_soup_consistency: true,
            weight_specs: Vec::new(),
            weight_severity: Severity::Warning,
        };

        match vendor {
            Vendor::General | Vendor::Elementary => base,
            Vendor::FoodCourt => VendorProfile {
                // Food-court mains carry raw-weight marks per the rider
                // agreement; soups are ordered a la carte there, so the
                // consistency check does not apply.
                check_soup_consistency: false,
                weight_specs: vec![
                    weight_spec("雞腿"),
                    weight_spec("排骨"),
                    weight_spec("雞排"),
                    weight_spec("魚排"),
                ],
                ..base
            },
            Vendor::LightMeal => VendorProfile {
                check_soup_consistency: false,
                ..base
            },
        }
    }
}

fn weight_spec(ingredient: &str) -> WeightSpec {
    WeightSpec {
        ingredient: ingredient.to_string(),
        pattern: r"1[0-5]0\s*g".to_string(),
        hint: "100g-150g".to_string(),
    }
}

/// Pick the vendor profile for one sheet by keyword match over the file
/// name, the sheet name, and the sheet's own text, in that order of
/// precedence within a single joined haystack.
pub fn select_vendor(file_name: &str, sheet_name: &str, sheet_text: &str) -> Vendor {
    let haystack = format!("{file_name}\n{sheet_name}\n{sheet_text}");
    let lower = haystack.to_lowercase();
    if haystack.contains("小學菜單") || haystack.contains("幼兒餐") {
        Vendor::Elementary
    } else if haystack.contains("美食街") {
        Vendor::FoodCourt
    } else if haystack.contains("輕食") || lower.contains("light meal") {
        Vendor::LightMeal
    } else {
        Vendor::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sheet_maps_to_a_profile() {
        assert_eq!(select_vendor("menu.xlsx", "工作表1", ""), Vendor::General);
        assert_eq!(
            select_vendor("小學菜單0331.xlsx", "", ""),
            Vendor::Elementary
        );
        assert_eq!(select_vendor("", "美食街菜單", ""), Vendor::FoodCourt);
        assert_eq!(select_vendor("", "", "本週輕食菜單如下"), Vendor::LightMeal);
    }

    #[test]
    fn test_elementary_takes_precedence() {
        // A combined workbook mentioning both modes resolves to the
        // first keyword in detection order.
        assert_eq!(
            select_vendor("", "小學菜單", "美食街備註"),
            Vendor::Elementary
        );
    }

    #[test]
    fn test_food_court_profile_has_weight_specs() {
        let profile = VendorProfile::for_vendor(Vendor::FoodCourt);
        assert!(!profile.weight_specs.is_empty());
        assert!(!profile.check_soup_consistency);
        assert_eq!(profile.weight_severity, Severity::Warning);
    }

    #[test]
    fn test_default_limits() {
        let profile = VendorProfile::default_profile();
        assert!(profile.markers.iter().all(|m| m.limit == 1));
        assert_eq!(profile.spice_days.len(), 3);
        assert!(!profile.spice_days.contains(&Weekday::Wed));
        assert!(!profile.spice_days.contains(&Weekday::Fri));
    }
}
