// SPDX-License-Identifier: MIT
//
// Glyph transforms — how a cache maps a requested code to the code it stores.
//
// The identity transform is the default. Case transforms let a whole table
// render upper- or lower-cased without touching any cell's text.

/// Mapping applied when a cache builds a glyph for a new code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum GlyphTransform {
    /// Store the requested code unchanged.
    #[default]
    Identity,
    /// Store the simple uppercase mapping of the code.
    Uppercase,
    /// Store the simple lowercase mapping of the code.
    Lowercase,
}

impl GlyphTransform {
    /// Apply the transform to a character code.
    ///
    /// Case mappings that expand to several characters (`ß` → `SS`) leave
    /// the code unchanged, as do codes that are not Unicode scalars.
    ///
    /// ```
    /// use gt_glyph::GlyphTransform;
    ///
    /// assert_eq!(GlyphTransform::Uppercase.apply(u32::from('a')), u32::from('A'));
    /// assert_eq!(GlyphTransform::Uppercase.apply(u32::from('ß')), u32::from('ß'));
    /// ```
    #[must_use]
    pub fn apply(self, code: u32) -> u32 {
        let Some(ch) = char::from_u32(code) else {
            return code;
        };
        let mapped = match self {
            Self::Identity => return code,
            Self::Uppercase => single(ch.to_uppercase()),
            Self::Lowercase => single(ch.to_lowercase()),
        };
        mapped.map_or(code, u32::from)
    }
}

/// The only item of a case-mapping iterator, if it has exactly one.
fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    let first = it.next()?;
    it.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_code() {
        assert_eq!(GlyphTransform::Identity.apply(u32::from('q')), u32::from('q'));
    }

    #[test]
    fn lowercase_maps_ascii() {
        assert_eq!(GlyphTransform::Lowercase.apply(u32::from('Q')), u32::from('q'));
    }

    #[test]
    fn uppercase_maps_non_ascii() {
        assert_eq!(GlyphTransform::Uppercase.apply(u32::from('é')), u32::from('É'));
    }

    #[test]
    fn uncased_characters_pass_through() {
        assert_eq!(GlyphTransform::Uppercase.apply(u32::from('7')), u32::from('7'));
        assert_eq!(GlyphTransform::Lowercase.apply(u32::from('中')), u32::from('中'));
    }

    #[test]
    fn invalid_code_passes_through() {
        assert_eq!(GlyphTransform::Uppercase.apply(0xD800), 0xD800);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(GlyphTransform::default(), GlyphTransform::Identity);
    }
}
