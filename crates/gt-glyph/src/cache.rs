// SPDX-License-Identifier: MIT
//
// GlyphCache — the flyweight factory.
//
// Maps a character code to its one shared Glyph. Lookups take `&self`;
// the map lives behind a mutex and the check-then-insert happens under a
// single lock acquisition, so two threads racing on the first request for
// a code still observe the same Arc.
//
// The cache only grows. Entries are never evicted, so a code maps to the
// same glyph for the whole life of the cache; only the hit/miss counters
// can be reset.

use std::sync::Arc;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::glyph::Glyph;
use crate::transform::GlyphTransform;

/// Hit/miss counters for a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the map.
    pub hits: u64,
    /// Lookups that created a new glyph.
    pub misses: u64,
}

impl CacheStats {
    /// Total number of lookups.
    #[inline]
    #[must_use]
    pub const fn lookups(self) -> u64 {
        self.hits + self.misses
    }
}

#[derive(Default)]
struct Inner {
    glyphs: AHashMap<u32, Arc<Glyph>>,
    stats: CacheStats,
}

/// Shared store of immutable glyphs, one per character code.
///
/// ```
/// use std::sync::Arc;
/// use gt_glyph::GlyphCache;
///
/// let cache = GlyphCache::new();
/// let a = cache.get_glyph(65);
/// let b = cache.get_glyph(65);
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(cache.len(), 1);
/// ```
pub struct GlyphCache {
    transform: GlyphTransform,
    inner: Mutex<Inner>,
}

static SHARED: Lazy<GlyphCache> = Lazy::new(GlyphCache::new);

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphCache {
    // ─── Construction ────────────────────────────────────────────────────

    /// An empty cache with the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transform(GlyphTransform::Identity)
    }

    /// An empty cache that stores `transform(code)` for each requested code.
    #[must_use]
    pub fn with_transform(transform: GlyphTransform) -> Self {
        Self {
            transform,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// An empty identity cache with room for `capacity` codes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transform: GlyphTransform::Identity,
            inner: Mutex::new(Inner {
                glyphs: AHashMap::with_capacity(capacity),
                stats: CacheStats::default(),
            }),
        }
    }

    /// A process-wide identity cache.
    ///
    /// Nothing in the table layer uses this implicitly; it is here for
    /// programs that want every table to share one set of glyphs.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    // ─── Lookup ──────────────────────────────────────────────────────────

    /// The glyph for `code`, created on first request.
    ///
    /// Every call with the same code returns the same `Arc` for as long as
    /// the cache lives. Any `u32` is accepted.
    #[must_use]
    pub fn get_glyph(&self, code: u32) -> Arc<Glyph> {
        let mut inner = self.inner.lock();
        if let Some(glyph) = inner.glyphs.get(&code) {
            let glyph = Arc::clone(glyph);
            inner.stats.hits += 1;
            return glyph;
        }

        let glyph = Arc::new(Glyph::new(self.transform.apply(code)));
        inner.glyphs.insert(code, Arc::clone(&glyph));
        inner.stats.misses += 1;
        tracing::trace!(code, cached = inner.glyphs.len(), "glyph cache miss");
        glyph
    }

    /// The glyph for a `char`.
    #[inline]
    #[must_use]
    pub fn glyph_for(&self, ch: char) -> Arc<Glyph> {
        self.get_glyph(u32::from(ch))
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// The transform applied to newly created glyphs.
    #[inline]
    #[must_use]
    pub const fn transform(&self) -> GlyphTransform {
        self.transform
    }

    /// Number of distinct codes cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().glyphs.len()
    }

    /// Whether nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().glyphs.is_empty()
    }

    /// Whether a glyph for `code` is already cached.
    #[must_use]
    pub fn contains(&self, code: u32) -> bool {
        self.inner.lock().glyphs.contains_key(&code)
    }

    /// Hit/miss counters since creation or the last [`reset_stats`](Self::reset_stats).
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }

    // ─── Mutation ────────────────────────────────────────────────────────

    /// Zero the hit/miss counters. Cached glyphs are kept.
    pub fn reset_stats(&self) {
        self.inner.lock().stats = CacheStats::default();
    }
}

impl std::fmt::Debug for GlyphCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("GlyphCache")
            .field("transform", &self.transform)
            .field("len", &inner.glyphs.len())
            .field("stats", &inner.stats)
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
