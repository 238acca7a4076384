//! Justification modes and the padding loop.
//!
//! Padding adds spaces until the text is at least as long as the target.
//! Text that is already long enough comes back untouched; the loop never
//! truncates. Length counts chars unless a [`Measure`] says otherwise.
//!
//! | Mode     | Where spaces go                          |
//! |----------|------------------------------------------|
//! | `Center` | front, back, front, back, ...            |
//! | `Left`   | back only (text hugs the left edge)      |
//! | `Right`  | front only (text hugs the right edge)    |
//!
//! Center starts in front, so an odd amount of padding leaves the extra
//! space before the text: `"ab"` in 5 chars is `"  ab "`.

use std::fmt;

use gt_glyph::Measure;

/// The single padding character.
pub const PAD: char = ' ';

/// Alignment of a cell's text within its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Justify {
    /// Centered, extra space in front.
    #[default]
    Center,
    /// Left-aligned.
    Left,
    /// Right-aligned.
    Right,
}

impl Justify {
    /// Decode the numeric form: `1` is left, `2` is right, anything else
    /// is center.
    ///
    /// ```
    /// use gt_table::Justify;
    ///
    /// assert_eq!(Justify::from_code(1), Justify::Left);
    /// assert_eq!(Justify::from_code(-7), Justify::Center);
    /// ```
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Left,
            2 => Self::Right,
            _ => Self::Center,
        }
    }

    /// Decode a name, ignoring ASCII case. Unknown names are center.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("left") {
            Self::Left
        } else if name.eq_ignore_ascii_case("right") {
            Self::Right
        } else {
            Self::Center
        }
    }

    /// The numeric form accepted by [`from_code`](Self::from_code).
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Center => 0,
            Self::Left => 1,
            Self::Right => 2,
        }
    }

    /// Pad `text` with spaces until it is at least `width` chars long.
    ///
    /// ```
    /// use gt_table::Justify;
    ///
    /// assert_eq!(Justify::Right.pad("ab".into(), 6), "    ab");
    /// assert_eq!(Justify::Center.pad("ab".into(), 5), "  ab ");
    /// assert_eq!(Justify::Left.pad("abcdef".into(), 3), "abcdef");
    /// ```
    #[must_use]
    pub fn pad(self, text: String, width: usize) -> String {
        self.pad_measured(text, width, Measure::Chars)
    }

    /// Pad `text` until it is at least `width` long under `measure`.
    ///
    /// Each space counts as one unit under either measure, so the number
    /// of spaces added is exactly the shortfall.
    ///
    /// ```
    /// use gt_glyph::Measure;
    /// use gt_table::Justify;
    ///
    /// assert_eq!(Justify::Left.pad_measured("中".into(), 3, Measure::Columns), "中 ");
    /// assert_eq!(Justify::Left.pad_measured("中".into(), 3, Measure::Chars), "中  ");
    /// ```
    #[must_use]
    pub fn pad_measured(self, text: String, width: usize, measure: Measure) -> String {
        let current = measure.len(&text);
        if current >= width {
            return text;
        }
        let missing = width - current;
        let (front, back) = match self {
            Self::Left => (0, missing),
            Self::Right => (missing, 0),
            // Alternation starting in front gives the front the odd one.
            Self::Center => (missing.div_ceil(2), missing / 2),
        };

        let mut out = String::with_capacity(text.len() + missing);
        out.extend(std::iter::repeat_n(PAD, front));
        out.push_str(&text);
        out.extend(std::iter::repeat_n(PAD, back));
        out
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pad(justify: Justify, text: &str, width: usize) -> String {
        justify.pad(text.to_string(), width)
    }

    // ── Literal cases ────────────────────────────────────────────────────

    #[test]
    fn left_pads_back() {
        assert_eq!(pad(Justify::Left, "ab", 6), "ab    ");
    }

    #[test]
    fn right_pads_front() {
        assert_eq!(pad(Justify::Right, "ab", 6), "    ab");
    }

    #[test]
    fn center_odd_padding_goes_front_first() {
        assert_eq!(pad(Justify::Center, "ab", 5), "  ab ");
    }

    #[test]
    fn center_even_padding_is_balanced() {
        assert_eq!(pad(Justify::Center, "ab", 6), "  ab  ");
    }

    #[test]
    fn center_single_pad_goes_front() {
        assert_eq!(pad(Justify::Center, "ab", 3), " ab");
    }

    // ── Edge cases ───────────────────────────────────────────────────────

    #[test]
    fn wider_text_is_not_truncated() {
        for justify in [Justify::Left, Justify::Right, Justify::Center] {
            assert_eq!(pad(justify, "abcdef", 3), "abcdef");
        }
    }

    #[test]
    fn exact_width_is_unchanged() {
        assert_eq!(pad(Justify::Center, "abc", 3), "abc");
    }

    #[test]
    fn zero_width_never_pads() {
        assert_eq!(pad(Justify::Right, "", 0), "");
        assert_eq!(pad(Justify::Left, "x", 0), "x");
    }

    #[test]
    fn empty_text_fills_width() {
        assert_eq!(pad(Justify::Center, "", 4), "    ");
    }

    #[test]
    fn combining_mark_counts_as_a_char() {
        assert_eq!(pad(Justify::Left, "e\u{301}", 3), "e\u{301} ");
        assert_eq!(pad(Justify::Left, "e\u{301}", 3).chars().count(), 3);
    }

    #[test]
    fn tab_counts_as_a_char() {
        assert_eq!(pad(Justify::Left, "\t", 3), "\t  ");
        assert_eq!(pad(Justify::Right, "\t", 3).chars().count(), 3);
    }

    #[test]
    fn wide_char_counts_as_one_by_default() {
        assert_eq!(pad(Justify::Left, "中", 3), "中  ");
    }

    #[test]
    fn columns_measure_is_opt_in() {
        let wide = Justify::Left.pad_measured("中".to_string(), 3, Measure::Columns);
        assert_eq!(wide, "中 ");
        let tab = Justify::Center.pad_measured("\t".to_string(), 3, Measure::Columns);
        assert_eq!(tab, "  \t ");
    }

    // ── Decoding ─────────────────────────────────────────────────────────

    #[test]
    fn from_code_round_trips_known_modes() {
        for justify in [Justify::Center, Justify::Left, Justify::Right] {
            assert_eq!(Justify::from_code(justify.code()), justify);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_center() {
        assert_eq!(Justify::from_code(3), Justify::Center);
        assert_eq!(Justify::from_code(i64::MIN), Justify::Center);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Justify::from_name("LEFT"), Justify::Left);
        assert_eq!(Justify::from_name(" Right "), Justify::Right);
        assert_eq!(Justify::from_name("middle"), Justify::Center);
    }

    #[test]
    fn display_names() {
        assert_eq!(Justify::Left.to_string(), "left");
        assert_eq!(Justify::default().to_string(), "center");
    }
}
