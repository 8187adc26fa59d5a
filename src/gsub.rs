//! Glyph substitution (`GSUB`) evaluation.
//!
//! > The Glyph Substitution (GSUB) table provides data for substition of
//! > glyphs for appropriate rendering of scripts ... or for advanced
//! > typographic effects, such as ligatures.
//!
//! — <https://docs.microsoft.com/en-us/typography/opentype/spec/gsub>
//!
//! Evaluation walks scripts → language systems → features → lookups and
//! applies the first single-substitution lookup that covers the glyph.
//! Substitutions are memoised so that text extraction can invert them with
//! [`GsubTable::unsubstitute`].

use std::sync::Mutex;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use unicode_script::Script;

use crate::binary::read::{ReadBinary, ReadCtxt};
use crate::error::{ParseError, SubstError};
use crate::layout::{
    FeatureList, FeatureRecord, LangSys, LookupList, LookupTable, ScriptList, ScriptRecord,
    LOOKUP_TYPE_SINGLE, NO_REQUIRED_FEATURE,
};
use crate::script;
use crate::tag;

/// A glyph substitution `GSUB` table in a TrueType or OpenType font.
///
/// Parse one from the raw table bytes with
/// [`ReadScope::read`](crate::binary::read::ReadScope::read):
///
/// ```
/// use glyphsub::binary::read::ReadScope;
/// use glyphsub::gsub::GsubTable;
/// # fn example(gsub_data: &[u8]) -> Result<(), glyphsub::error::ParseError> {
/// let gsub = ReadScope::new(gsub_data).read::<GsubTable>()?;
/// # Ok(())
/// # }
/// ```
///
/// A parsed table is immutable apart from its substitution caches and the
/// last-used-script hint, both of which sit behind locks so one table can be
/// shared by every thread rendering the font.
pub struct GsubTable {
    pub(crate) scripts: Vec<ScriptRecord>,
    pub(crate) features: Vec<FeatureRecord>,
    pub(crate) lookups: Vec<LookupTable>,
    pub(crate) supported_scripts: FxHashSet<u32>,
    forward_cache: Mutex<FxHashMap<u16, u16>>,
    reverse_cache: Mutex<FxHashMap<u16, u16>>,
    last_used_script: Mutex<Option<u32>>,
}

impl ReadBinary for GsubTable {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let table = ctxt.scope();
        let _major_version = ctxt.read_u16be()?;
        let minor_version = ctxt.read_u16be()?;
        let script_list_offset = usize::from(ctxt.read_u16be()?);
        let feature_list_offset = usize::from(ctxt.read_u16be()?);
        let lookup_list_offset = usize::from(ctxt.read_u16be()?);
        if minor_version == 1 {
            // Feature variations are not evaluated. This is the hook if
            // variable font support is ever needed.
            let _feature_variations_offset = ctxt.read_u32be()?;
        }

        let scripts = table.offset(script_list_offset).read::<ScriptList>()?;
        let features = table.offset(feature_list_offset).read::<FeatureList>()?;
        let lookups = table.offset(lookup_list_offset).read::<LookupList>()?;
        let supported_scripts = scripts.iter().map(|record| record.script_tag).collect();

        Ok(GsubTable {
            scripts,
            features,
            lookups,
            supported_scripts,
            forward_cache: Mutex::new(FxHashMap::default()),
            reverse_cache: Mutex::new(FxHashMap::default()),
            last_used_script: Mutex::new(None),
        })
    }
}

impl GsubTable {
    /// Substitute `glyph` according to `script` and the enabled features.
    ///
    /// `enabled_features` of `None` enables every feature the font carries;
    /// an empty slice enables none (required features still apply). The
    /// first single-substitution lookup selected by the feature walk is
    /// applied; lookups never compound.
    ///
    /// The first substitution computed for a glyph wins: script detection
    /// for indeterminate scripts (common punctuation, inherited marks)
    /// depends on context, so later calls could in principle resolve
    /// differently, but text extraction needs a one-to-one mapping.
    pub fn substitute(&self, glyph: u16, script: Script, enabled_features: Option<&[u32]>) -> u16 {
        if let Some(&cached) = self.forward_cache.lock().unwrap().get(&glyph) {
            return cached;
        }
        let langsys_tables = self.langsys_tables(self.script_tag(script));
        if langsys_tables.is_empty() {
            return glyph;
        }
        let features = self.feature_records(&langsys_tables, enabled_features);
        for lookup in self.lookup_tables(&features) {
            if lookup.lookup_type != LOOKUP_TYPE_SINGLE {
                continue;
            }
            return match lookup.apply_glyph(glyph) {
                Some(substitute) => self.record_substitution(glyph, substitute),
                None => glyph,
            };
        }
        glyph
    }

    /// Recover the glyph that [`substitute`](Self::substitute) replaced with
    /// `glyph`.
    ///
    /// Only substitutions actually performed can be inverted; asking about
    /// any other glyph is a programming error in the caller and fails with
    /// [`SubstError::UnknownReverseMapping`].
    pub fn unsubstitute(&self, glyph: u16) -> Result<u16, SubstError> {
        self.reverse_cache
            .lock()
            .unwrap()
            .get(&glyph)
            .copied()
            .ok_or(SubstError::UnknownReverseMapping(glyph))
    }

    /// Substitute `glyph` for vertical writing.
    ///
    /// Vertical substitution is applied unconditionally with a fixed `latn`
    /// script and no feature whitelist, so the font's `vert`/`vrt2` lookups
    /// fire without the caller naming them. This mirrors how vertical CJK
    /// fonts are laid out in practice; a script-aware caller may prefer
    /// [`substitute`](Self::substitute).
    pub fn vertical_substitute(&self, glyph: u16) -> u16 {
        self.substitute(glyph, Script::Latin, None)
    }

    /// Invert a substitution performed by
    /// [`vertical_substitute`](Self::vertical_substitute).
    pub fn vertical_unsubstitute(&self, glyph: u16) -> Result<u16, SubstError> {
        self.unsubstitute(glyph)
    }

    /// The OpenType script tag to evaluate under for a Unicode script.
    ///
    /// Indeterminate scripts (inherited marks, or the default tag when the
    /// font does not declare `DFLT`) inherit the last supported script this
    /// table resolved, falling back to the first script the font declares.
    fn script_tag(&self, script: Script) -> u32 {
        let tags = script::candidate_tags(script);
        let indeterminate = script == Script::Inherited
            || (tags.len() == 1
                && tags[0] == tag::DFLT
                && !self.supported_scripts.contains(&tag::DFLT));
        if indeterminate {
            if let Some(hint) = *self.last_used_script.lock().unwrap() {
                return hint;
            }
            // No past context and no way to peek ahead, so guess the first
            // script the font declares.
            if let Some(record) = self.scripts.first() {
                *self.last_used_script.lock().unwrap() = Some(record.script_tag);
                return record.script_tag;
            }
            return tags[0];
        }
        for &candidate in tags {
            if self.supported_scripts.contains(&candidate) {
                // A font is assumed to serve one revision of a script, or
                // to prefer the newest when it serves several.
                *self.last_used_script.lock().unwrap() = Some(candidate);
                return candidate;
            }
        }
        tags[0]
    }

    /// Every language system declared under `script_tag`, default first.
    fn langsys_tables(&self, script_tag: u32) -> Vec<&LangSys> {
        let mut tables = Vec::new();
        for record in self
            .scripts
            .iter()
            .filter(|record| record.script_tag == script_tag)
        {
            tables.extend(record.script_table.default_langsys.as_ref());
            tables.extend(
                record
                    .script_table
                    .langsys_records
                    .iter()
                    .map(|langsys| &langsys.langsys_table),
            );
        }
        tables
    }

    /// The feature records selected by the language systems.
    ///
    /// Required features are included regardless of the whitelist. Indices
    /// that fall outside the feature list are skipped.
    fn feature_records(
        &self,
        langsys_tables: &[&LangSys],
        enabled_features: Option<&[u32]>,
    ) -> Vec<&FeatureRecord> {
        let mut records = Vec::new();
        for langsys in langsys_tables {
            if langsys.required_feature_index != NO_REQUIRED_FEATURE {
                match self.features.get(usize::from(langsys.required_feature_index)) {
                    Some(record) => records.push(record),
                    None => debug!(
                        "skipping out of range required feature index {}",
                        langsys.required_feature_index
                    ),
                }
            }
            for &feature_index in &langsys.feature_indices {
                match self.features.get(usize::from(feature_index)) {
                    Some(record) => {
                        let enabled = enabled_features
                            .map_or(true, |tags| tags.contains(&record.feature_tag));
                        if enabled {
                            records.push(record);
                        }
                    }
                    None => debug!("skipping out of range feature index {}", feature_index),
                }
            }
        }
        records
    }

    /// The lookups referenced by the feature records, in feature order.
    /// Indices that fall outside the lookup list are skipped.
    fn lookup_tables(&self, feature_records: &[&FeatureRecord]) -> Vec<&LookupTable> {
        let mut tables = Vec::new();
        for record in feature_records {
            for &lookup_index in &record.feature_table.lookup_indices {
                match self.lookups.get(usize::from(lookup_index)) {
                    Some(lookup) => tables.push(lookup),
                    None => debug!("skipping out of range lookup index {}", lookup_index),
                }
            }
        }
        tables
    }

    /// Memoise a performed substitution, first writer wins.
    fn record_substitution(&self, glyph: u16, substitute: u16) -> u16 {
        let winner = *self
            .forward_cache
            .lock()
            .unwrap()
            .entry(glyph)
            .or_insert(substitute);
        self.reverse_cache
            .lock()
            .unwrap()
            .entry(winner)
            .or_insert(glyph);
        winner
    }
}
