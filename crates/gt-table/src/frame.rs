//! Frame configuration: which parts of the border are drawn, and with what.
//!
//! The default frame draws a `-` border above and below the rows and
//! prefixes every row with `"| "`. Border and marker characters must be
//! exactly one column wide, otherwise the border would stop matching the
//! longest line.

use gt_glyph::char_width;

use crate::error::{Result, TableError};

bitflags::bitflags! {
    /// Parts of the frame to draw. Combine with bitwise OR:
    ///
    /// ```
    /// use gt_table::Frame;
    ///
    /// let borders = Frame::TOP | Frame::BOTTOM;
    /// assert!(borders.contains(Frame::TOP));
    /// assert!(!borders.contains(Frame::MARKER));
    /// assert_eq!(Frame::default(), Frame::all());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Frame: u8 {
        /// Horizontal border above the rows.
        const TOP    = 1 << 0;
        /// Horizontal border below the rows.
        const BOTTOM = 1 << 1;
        /// Marker and space in front of every row.
        const MARKER = 1 << 2;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::all()
    }
}

/// Characters and parts used to frame a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameStyle {
    border: char,
    marker: char,
    parts: Frame,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            border: '-',
            marker: '|',
            parts: Frame::all(),
        }
    }
}

impl FrameStyle {
    /// A full frame with custom border and marker characters.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidFrameChar`] if either character is not exactly
    /// one terminal column wide.
    ///
    /// ```
    /// use gt_table::FrameStyle;
    ///
    /// assert!(FrameStyle::new('=', '#').is_ok());
    /// assert!(FrameStyle::new('中', '#').is_err());
    /// ```
    pub fn new(border: char, marker: char) -> Result<Self> {
        Ok(Self {
            border: single_column(border)?,
            marker: single_column(marker)?,
            parts: Frame::all(),
        })
    }

    /// Restrict the frame to `parts`.
    #[must_use]
    pub const fn with_parts(self, parts: Frame) -> Self {
        Self { parts, ..self }
    }

    /// Border character.
    #[inline]
    #[must_use]
    pub const fn border(self) -> char {
        self.border
    }

    /// Row marker character.
    #[inline]
    #[must_use]
    pub const fn marker(self) -> char {
        self.marker
    }

    /// Parts that are drawn.
    #[inline]
    #[must_use]
    pub const fn parts(self) -> Frame {
        self.parts
    }

    /// Text placed in front of every rendered row (empty without `MARKER`).
    #[must_use]
    pub fn prefix(self) -> String {
        if self.parts.contains(Frame::MARKER) {
            format!("{} ", self.marker)
        } else {
            String::new()
        }
    }

    /// A horizontal border `width` columns long.
    #[must_use]
    pub fn border_line(self, width: usize) -> String {
        std::iter::repeat_n(self.border, width).collect()
    }
}

fn single_column(ch: char) -> Result<char> {
    match char_width(ch) {
        1 => Ok(ch),
        width => Err(TableError::InvalidFrameChar { ch, width }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_style() {
        let style = FrameStyle::default();
        assert_eq!(style.border(), '-');
        assert_eq!(style.marker(), '|');
        assert_eq!(style.parts(), Frame::all());
        assert_eq!(style.prefix(), "| ");
    }

    #[test]
    fn border_line_repeats_char() {
        assert_eq!(FrameStyle::default().border_line(4), "----");
        assert_eq!(FrameStyle::default().border_line(0), "");
    }

    #[test]
    fn custom_chars() {
        let style = FrameStyle::new('═', '║').expect("box drawing chars are one column");
        assert_eq!(style.prefix(), "║ ");
        assert_eq!(style.border_line(2), "══");
    }

    #[test]
    fn wide_border_rejected() {
        assert_eq!(
            FrameStyle::new('中', '|'),
            Err(TableError::InvalidFrameChar { ch: '中', width: 2 })
        );
    }

    #[test]
    fn zero_width_marker_rejected() {
        assert_eq!(
            FrameStyle::new('-', '\t'),
            Err(TableError::InvalidFrameChar { ch: '\t', width: 0 })
        );
    }

    #[test]
    fn without_marker_prefix_is_empty() {
        let style = FrameStyle::default().with_parts(Frame::TOP | Frame::BOTTOM);
        assert_eq!(style.prefix(), "");
    }

    #[test]
    fn frame_bits_fit_in_u8() {
        assert_eq!(Frame::all().bits(), 0b111);
    }
}
