//! Substituting views over a character-to-glyph map.
//!
//! The host font supplies its `cmap` mapping through [`CmapLookup`]; the
//! facades here pair it with a [`GsubTable`] so that rendering sees
//! substituted glyphs and text extraction can map them back to characters.

use unicode_script::{Script, UnicodeScript};

use crate::error::SubstError;
use crate::gsub::GsubTable;

/// Character-to-glyph mapping provided by the host font's `cmap` table.
pub trait CmapLookup {
    /// The glyph for a character code, or `None` when the character is
    /// unmapped.
    fn glyph_id(&self, character_code: u32) -> Option<u16>;

    /// The character codes that map to a glyph, in cmap order.
    fn char_codes(&self, glyph_id: u16) -> Vec<u32>;
}

/// A cmap view that substitutes glyphs according to the characters' Unicode
/// scripts and a set of enabled features.
///
/// The view borrows its collaborators; it owns nothing but the feature set.
pub struct SubstitutingCmap<'a, C> {
    cmap: &'a C,
    gsub: &'a GsubTable,
    enabled_features: Option<Vec<u32>>,
}

impl<'a, C: CmapLookup> SubstitutingCmap<'a, C> {
    /// `enabled_features` of `None` enables every feature the font carries.
    pub fn new(cmap: &'a C, gsub: &'a GsubTable, enabled_features: Option<Vec<u32>>) -> Self {
        SubstitutingCmap {
            cmap,
            gsub,
            enabled_features,
        }
    }

    /// The substituted glyph for a character code, or `None` when unmapped.
    pub fn glyph_id(&self, character_code: u32) -> Option<u16> {
        let glyph = self.cmap.glyph_id(character_code)?;
        let script = script_of(character_code);
        Some(
            self.gsub
                .substitute(glyph, script, self.enabled_features.as_deref()),
        )
    }

    /// The character codes behind a substituted glyph.
    pub fn char_codes(&self, glyph_id: u16) -> Result<Vec<u32>, SubstError> {
        Ok(self.cmap.char_codes(self.gsub.unsubstitute(glyph_id)?))
    }
}

/// A cmap view for vertical writing; substitution applies unconditionally.
pub struct VerticalSubstitutingCmap<'a, C> {
    cmap: &'a C,
    gsub: &'a GsubTable,
}

impl<'a, C: CmapLookup> VerticalSubstitutingCmap<'a, C> {
    pub fn new(cmap: &'a C, gsub: &'a GsubTable) -> Self {
        VerticalSubstitutingCmap { cmap, gsub }
    }

    /// The vertically substituted glyph for a character code.
    pub fn glyph_id(&self, character_code: u32) -> Option<u16> {
        self.cmap
            .glyph_id(character_code)
            .map(|glyph| self.gsub.vertical_substitute(glyph))
    }

    /// The character codes behind a vertically substituted glyph.
    pub fn char_codes(&self, glyph_id: u16) -> Result<Vec<u32>, SubstError> {
        Ok(self
            .cmap
            .char_codes(self.gsub.vertical_unsubstitute(glyph_id)?))
    }
}

/// The Unicode Script property of a character code.
fn script_of(character_code: u32) -> Script {
    char::from_u32(character_code).map_or(Script::Unknown, |ch| ch.script())
}
