//! Cell-text normalization and glyph helpers.
//!
//! Menu cells frequently carry soft line breaks (a dish name wrapped inside
//! the cell) and full-width padding spaces. All rule matching operates on
//! cleaned text so that a wrapped `"蒜泥\n白肉"` compares equal to
//! `"蒜泥白肉"`.

/// Normalize raw cell text: strip embedded line breaks and trim surrounding
/// whitespace (including full-width ideographic spaces).
pub fn clean_cell_text(raw: &str) -> String {
    let joined: String = raw.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    joined
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{3000}')
        .to_string()
}

/// Count occurrences of a single marker glyph in a piece of text.
///
/// The count is distributive over concatenation: counting in a joined string
/// equals the sum of counts in its parts.
pub fn count_glyph(text: &str, glyph: char) -> usize {
    text.chars().filter(|c| *c == glyph).count()
}

/// Whether a character belongs to the CJK Unified Ideographs blocks used by
/// dish names (base block plus Extension A).
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

/// Extract the CJK-only prefix of `text`, up to `len` characters.
///
/// Non-ideographic characters (marker glyphs, digits, punctuation, Latin
/// annotations) are filtered out before the prefix is taken, so `"◎炸雞腿"`
/// and `"炸雞腿"` yield the same core.
pub fn cjk_prefix(text: &str, len: usize) -> String {
    text.chars().filter(|c| is_cjk(*c)).take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_line_breaks() {
        assert_eq!(clean_cell_text("蒜泥\n白肉"), "蒜泥白肉");
        assert_eq!(clean_cell_text("  滷雞腿 \r\n"), "滷雞腿");
        assert_eq!(clean_cell_text("\u{3000}青菜\u{3000}"), "青菜");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean_cell_text(""), "");
        assert_eq!(clean_cell_text(" \n "), "");
    }

    #[test]
    fn test_count_glyph() {
        assert_eq!(count_glyph("◎炸雞腿", '◎'), 1);
        assert_eq!(count_glyph("◎炸雞腿 ◎炸排骨", '◎'), 2);
        assert_eq!(count_glyph("滷雞腿", '◎'), 0);
    }

    #[test]
    fn test_cjk_prefix_filters_markers() {
        assert_eq!(cjk_prefix("◎炸雞腿", 2), "炸雞");
        assert_eq!(cjk_prefix("蒜泥白肉", 2), "蒜泥");
        assert_eq!(cjk_prefix("100g 雞排", 2), "雞排");
    }

    #[test]
    fn test_cjk_prefix_short_input() {
        assert_eq!(cjk_prefix("湯", 2), "湯");
        assert_eq!(cjk_prefix("ABC", 2), "");
    }

    proptest::proptest! {
        // Counting in a joined string equals the sum of the per-part counts.
        #[test]
        fn count_distributes_over_concatenation(a in ".*", b in ".*") {
            let joined = format!("{a}{b}");
            proptest::prop_assert_eq!(
                count_glyph(&joined, '◎'),
                count_glyph(&a, '◎') + count_glyph(&b, '◎')
            );
        }

        // Cleaning is idempotent.
        #[test]
        fn clean_is_idempotent(s in ".*") {
            let once = clean_cell_text(&s);
            proptest::prop_assert_eq!(clean_cell_text(&once), once);
        }
    }
}
