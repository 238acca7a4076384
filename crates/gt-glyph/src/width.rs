// SPDX-License-Identifier: MIT
//
// Text length measures.
//
// Table layout counts characters by default: a combining mark or a tab is
// one unit like any other char. Callers aligning for a terminal can opt in
// to display columns instead, where CJK takes two and control chars none.

use unicode_width::UnicodeWidthChar;

/// How the length of rendered text is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Measure {
    /// One unit per `char`.
    #[default]
    Chars,
    /// Terminal display columns, per Unicode Standard Annex #11.
    Columns,
}

impl Measure {
    /// Length of `s` under this measure.
    ///
    /// ```
    /// use gt_glyph::Measure;
    ///
    /// assert_eq!(Measure::Chars.len("e\u{301}"), 2);
    /// assert_eq!(Measure::Columns.len("e\u{301}"), 1);
    /// assert_eq!(Measure::Columns.len("中"), 2);
    /// ```
    #[must_use]
    pub fn len(self, s: &str) -> usize {
        match self {
            Self::Chars => s.chars().count(),
            Self::Columns => string_width(s),
        }
    }
}

/// Display width of a character in terminal columns (0 for control chars).
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Display width of a string in terminal columns.
#[must_use]
pub fn string_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts_chars() {
        assert_eq!(Measure::default(), Measure::Chars);
    }

    #[test]
    fn measures_agree_on_ascii() {
        let s = "| name  score";
        assert_eq!(Measure::Chars.len(s), s.len());
        assert_eq!(Measure::Columns.len(s), s.len());
    }

    #[test]
    fn measures_disagree_on_tab() {
        assert_eq!(Measure::Chars.len("a\tb"), 3);
        assert_eq!(Measure::Columns.len("a\tb"), 2);
    }

    #[test]
    fn measures_disagree_on_wide_chars() {
        assert_eq!(Measure::Chars.len("中文"), 2);
        assert_eq!(Measure::Columns.len("中文"), 4);
    }

    #[test]
    fn combining_mark_has_no_column() {
        assert_eq!(Measure::Chars.len("\u{301}"), 1);
        assert_eq!(Measure::Columns.len("\u{301}"), 0);
        assert_eq!(char_width('a'), 1);
    }
}
