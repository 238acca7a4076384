// SPDX-License-Identifier: MIT
//
// Glyph — the intrinsic, shareable half of a rendered character.
//
// A glyph carries nothing but its character code. It is created once by
// the cache on first request and never mutated afterwards, which is what
// makes it safe to share across every cell that renders the same code.

use crate::width::char_width;

/// Replacement character used when a glyph code is not a Unicode scalar.
pub const REPLACEMENT: char = '\u{FFFD}';

/// A shared, immutable character glyph.
///
/// Glyphs are only ever built by [`GlyphCache`](crate::GlyphCache), which
/// guarantees one instance per code. Compare glyphs by identity with
/// [`Arc::ptr_eq`](std::sync::Arc::ptr_eq) when the flyweight contract
/// matters; the derived `PartialEq` compares codes only.
///
/// ```
/// use gt_glyph::GlyphCache;
///
/// let cache = GlyphCache::new();
/// let a = cache.glyph_for('a');
/// assert_eq!(a.code(), u32::from('a'));
/// assert_eq!(a.character(), Some('a'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    code: u32,
}

impl Glyph {
    #[inline]
    #[must_use]
    pub(crate) const fn new(code: u32) -> Self {
        Self { code }
    }

    /// The character code this glyph represents.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self.code
    }

    /// The code as a `char`, or `None` for surrogates and out-of-range codes.
    #[inline]
    #[must_use]
    pub const fn character(self) -> Option<char> {
        char::from_u32(self.code)
    }

    /// The character to emit when rendering.
    ///
    /// Codes that are not Unicode scalar values render as U+FFFD.
    #[inline]
    #[must_use]
    pub fn display_char(self) -> char {
        self.character().unwrap_or(REPLACEMENT)
    }

    /// Display width in terminal columns (0 for control characters).
    #[inline]
    #[must_use]
    pub fn width(self) -> usize {
        char_width(self.display_char())
    }
}

impl std::fmt::Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.character() {
            Some(ch) => write!(f, "Glyph({ch:?})"),
            None => write!(f, "Glyph(invalid {:#x})", self.code),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
