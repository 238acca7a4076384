//! Cell — the extrinsic state of one table position.
//!
//! A cell owns its text, target width and justification. It owns no
//! glyphs: at render time every character is resolved through the
//! [`GlyphCache`], and the cache's shared glyph decides what is emitted.

use gt_glyph::{GlyphCache, Measure};

use crate::justify::Justify;

/// Width given to freshly constructed cells.
pub const DEFAULT_WIDTH: usize = 10;

/// One table cell.
///
/// Fields are public: callers set them directly between renders.
///
/// ```
/// use gt_glyph::GlyphCache;
/// use gt_table::{Cell, Justify};
///
/// let cache = GlyphCache::new();
/// let mut cell = Cell::default();
/// cell.text = "ab".into();
/// cell.width = 6;
/// cell.justify = Justify::Left;
/// assert_eq!(cell.render(&cache), "ab    ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Raw text, rendered glyph by glyph.
    pub text: String,
    /// Minimum rendered length (chars unless rendered with another measure).
    pub width: usize,
    /// Alignment within `width`.
    pub justify: Justify,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            text: String::new(),
            width: DEFAULT_WIDTH,
            justify: Justify::Center,
        }
    }
}

impl Cell {
    /// A default-width, centered cell holding `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the width.
    #[must_use]
    pub fn with_width(self, width: usize) -> Self {
        Self { width, ..self }
    }

    /// Set the justification.
    #[must_use]
    pub fn with_justify(self, justify: Justify) -> Self {
        Self { justify, ..self }
    }

    /// Replace the text, keeping width and justification.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Resolve the text through `cache` and pad it to `width` chars.
    ///
    /// Output is never shorter than `width` chars and never truncated.
    #[must_use]
    pub fn render(&self, cache: &GlyphCache) -> String {
        self.render_measured(cache, Measure::Chars)
    }

    /// [`render`](Self::render), with `width` counted under `measure`.
    #[must_use]
    pub fn render_measured(&self, cache: &GlyphCache, measure: Measure) -> String {
        let glyphs: String = self
            .text
            .chars()
            .map(|ch| cache.glyph_for(ch).display_char())
            .collect();
        self.justify.pad_measured(glyphs, self.width, measure)
    }

    /// Length of [`render_measured`](Self::render_measured)'s output under
    /// the same measure.
    #[must_use]
    pub fn rendered_len(&self, cache: &GlyphCache, measure: Measure) -> usize {
        measure.len(&self.render_measured(cache, measure))
    }
}
