//! Display width calculation for terminal rendering.
//!
//! Widths are always computed against an explicit [`WidthMethod`]; there is
//! no process-wide setting.

use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Check for a zero width joiner (U+200D).
#[inline]
#[must_use]
pub fn is_zwj(c: char) -> bool {
    c == ZERO_WIDTH_JOINER
}

/// Check for a variation selector (VS1-VS16 and the supplementary VS17-VS256).
#[must_use]
pub fn is_variation_selector(c: char) -> bool {
    matches!(c, '\u{FE00}'..='\u{FE0F}' | '\u{E0100}'..='\u{E01EF}')
}

/// Check for a Fitzpatrick skin tone modifier.
#[must_use]
pub fn is_emoji_modifier(c: char) -> bool {
    matches!(c, '\u{1F3FB}'..='\u{1F3FF}')
}

fn is_regional_indicator(c: char) -> bool {
    matches!(c, '\u{1F1E6}'..='\u{1F1FF}')
}

/// Get the display width of a single code point.
///
/// Control characters report 0. Regional indicators are counted as emoji so a
/// flag pair never renders narrower than its neighbours.
#[must_use]
pub fn display_width_char_with_method(c: char, method: WidthMethod) -> usize {
    // Fast path: ASCII printable characters are always width 1
    if (' '..='~').contains(&c) {
        return 1;
    }
    if is_regional_indicator(c) {
        return 2;
    }
    let width = match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c),
    };
    width.unwrap_or(0).min(2)
}

/// Get the display width of a code point with the default method.
#[inline]
#[must_use]
pub fn display_width_char(c: char) -> usize {
    display_width_char_with_method(c, WidthMethod::default())
}

/// Width of one grapheme cluster, in `0..=2`.
///
/// A cluster that carries a joiner, variation selector, skin tone modifier or
/// combining mark after its base takes the width of the base alone. Any other
/// cluster sums its code points, capped at 2.
#[must_use]
pub fn cluster_width(cluster: &str, method: WidthMethod) -> usize {
    let mut chars = cluster.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    let first_width = display_width_char_with_method(first, method);

    let mut total = first_width;
    for c in chars {
        if is_zwj(c)
            || is_variation_selector(c)
            || is_emoji_modifier(c)
            || display_width_char_with_method(c, method) == 0
        {
            return first_width;
        }
        total += display_width_char_with_method(c, method);
    }
    total.min(2)
}

/// Get the display width of a string using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|b| (b' '..=b'~').contains(b)).count();
    }
    crate::unicode::graphemes(s)
        .map(|g| cluster_width(g, method))
        .sum()
}

/// Get the display width of a string with the default method.
#[must_use]
pub fn display_width(s: &str) -> usize {
    display_width_with_method(s, WidthMethod::default())
}

/// Check if a character is a zero-width character.
#[must_use]
pub fn is_zero_width(c: char) -> bool {
    display_width_char(c) == 0
}

/// Check if a character is wide (takes 2 columns).
#[must_use]
pub fn is_wide(c: char) -> bool {
    display_width_char(c) == 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width_char('a'), 1);
        assert_eq!(display_width_char('\t'), 0);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width("漢字"), 4);
        assert_eq!(display_width("你好世界"), 8);
        assert!(is_wide('漢'));
    }

    #[test]
    fn test_emoji_width() {
        assert_eq!(display_width("😀"), 2);
        assert_eq!(cluster_width("🇺🇸", WidthMethod::WcWidth), 2);
    }

    #[test]
    fn test_modifiers_never_add_width() {
        assert_eq!(cluster_width("👋🏻", WidthMethod::WcWidth), 2);
        assert_eq!(cluster_width("👨\u{200D}👩\u{200D}👧", WidthMethod::WcWidth), 2);
        assert_eq!(cluster_width("e\u{0301}", WidthMethod::WcWidth), 1);
        // Text-presentation base keeps its own width even with VS16.
        assert_eq!(cluster_width("\u{2764}\u{FE0F}", WidthMethod::WcWidth), 1);
    }

    #[test]
    fn test_zero_width() {
        assert!(is_zero_width('\u{0301}'));
        assert!(is_zero_width('\u{200B}'));
        assert_eq!(cluster_width("\u{0301}", WidthMethod::WcWidth), 0);
        assert_eq!(cluster_width("", WidthMethod::WcWidth), 0);
    }

    #[test]
    fn test_width_methods() {
        // Ambiguous width character: Circled digit one (U+2460)
        let ch = '①';
        assert_eq!(display_width_char_with_method(ch, WidthMethod::WcWidth), 1);
        assert_eq!(display_width_char_with_method(ch, WidthMethod::Unicode), 2);
        assert_eq!(display_width_with_method("①", WidthMethod::Unicode), 2);
    }
}
