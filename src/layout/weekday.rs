//! School-week weekday type and header-token matching.

use serde::Serialize;

/// A school weekday (menus cover Monday through Friday only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

/// Header tokens recognized per weekday. The Chinese variants cover the
/// 週/周/星期/禮拜 prefixes seen across supplier templates.
const TOKENS: [(Weekday, [&str; 4], &str); 5] = [
    (Weekday::Mon, ["週一", "周一", "星期一", "禮拜一"], "monday"),
    (Weekday::Tue, ["週二", "周二", "星期二", "禮拜二"], "tuesday"),
    (Weekday::Wed, ["週三", "周三", "星期三", "禮拜三"], "wednesday"),
    (Weekday::Thu, ["週四", "周四", "星期四", "禮拜四"], "thursday"),
    (Weekday::Fri, ["週五", "周五", "星期五", "禮拜五"], "friday"),
];

impl Weekday {
    /// All school weekdays in order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Match a header cell against the known weekday tokens.
    ///
    /// Chinese tokens match as substrings (`"週一 3/31"` is a Monday header);
    /// English names match case-insensitively.
    pub fn from_cell(text: &str) -> Option<Weekday> {
        let lower = text.to_lowercase();
        for (day, zh_tokens, english) in TOKENS {
            if zh_tokens.iter().any(|t| text.contains(t)) || lower.contains(english) {
                return Some(day);
            }
        }
        None
    }

    /// Canonical Chinese label, as used in violation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "週一",
            Weekday::Tue => "週二",
            Weekday::Wed => "週三",
            Weekday::Thu => "週四",
            Weekday::Fri => "週五",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
