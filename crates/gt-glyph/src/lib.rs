// SPDX-License-Identifier: MIT
//
// gt-glyph — the flyweight layer of glyph-table.
//
// Every character a table ever renders is resolved through a GlyphCache.
// The cache hands out one shared, immutable Glyph per character code, so
// a table full of repeated letters holds a handful of glyphs rather than
// one per character position. Cells keep only extrinsic state (their text,
// width, justification) and look glyphs up at render time.
//
//   char code ──► GlyphCache::get_glyph ──► Arc<Glyph> (shared, immutable)
//
// The cache is an ordinary value. Callers construct one and pass it down
// explicitly; `GlyphCache::shared()` exists for programs that want a
// single process-wide instance.

pub mod cache;
pub mod glyph;
pub mod transform;
pub mod width;

pub use cache::{CacheStats, GlyphCache};
pub use glyph::Glyph;
pub use transform::GlyphTransform;
pub use width::{Measure, char_width, string_width};
