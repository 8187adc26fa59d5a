//! `GSUB` layout structures and their parsing.
//!
//! The structures here mirror the on-disk layout of the script list, feature
//! list, and lookup list that make up a `GSUB` table. Only lookup type 1
//! (single substitution) carries subtables; every other lookup type is read
//! past and left inert.
//!
//! See <https://docs.microsoft.com/en-us/typography/opentype/spec/gsub>.

use log::debug;

use crate::binary::read::{ReadBinary, ReadCtxt};
use crate::error::ParseError;

/// Lookup type of single substitution lookups, the only type evaluated.
pub(crate) const LOOKUP_TYPE_SINGLE: u16 = 1;

/// Required-feature index value meaning "no required feature".
pub(crate) const NO_REQUIRED_FEATURE: u16 = 0xFFFF;

pub struct ScriptRecord {
    pub script_tag: u32,
    pub(crate) script_table: ScriptTable,
}

pub struct ScriptTable {
    pub(crate) default_langsys: Option<LangSys>,
    pub(crate) langsys_records: Vec<LangSysRecord>,
}

pub struct LangSysRecord {
    pub langsys_tag: u32,
    pub(crate) langsys_table: LangSys,
}

pub struct LangSys {
    pub(crate) required_feature_index: u16,
    pub(crate) feature_indices: Vec<u16>,
}

pub struct FeatureRecord {
    pub feature_tag: u32,
    pub(crate) feature_table: FeatureTable,
}

pub struct FeatureTable {
    pub(crate) lookup_indices: Vec<u16>,
}

pub struct LookupTable {
    pub(crate) lookup_type: u16,
    pub lookup_flag: LookupFlag,
    pub(crate) mark_filtering_set: Option<u16>,
    pub(crate) subtables: Vec<SingleSubst>,
}

#[derive(Clone, Copy)]
pub struct LookupFlag(pub u16);

impl LookupFlag {
    pub fn use_mark_filtering_set(self) -> bool {
        (self.0 & 0x0010) != 0
    }
}

pub enum SingleSubst {
    Format1 {
        coverage: Coverage,
        delta_glyph_id: i16,
    },
    Format2 {
        coverage: Coverage,
        substitute_glyph_ids: Vec<u16>,
    },
}

pub enum Coverage {
    Format1 {
        glyph_array: Vec<u16>,
    },
    Format2 {
        ranges: Vec<CoverageRangeRecord>,
    },
}

pub struct CoverageRangeRecord {
    pub(crate) start_glyph: u16,
    pub(crate) end_glyph: u16,
    pub(crate) start_coverage_index: u16,
}

/// Marker for reading the script list into its records.
pub(crate) enum ScriptList {}

/// Marker for reading the feature list into its records.
pub(crate) enum FeatureList {}

/// Marker for reading the lookup list into its tables.
pub(crate) enum LookupList {}

impl ReadBinary for ScriptList {
    type HostType = Vec<ScriptRecord>;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Vec<ScriptRecord>, ParseError> {
        let scope = ctxt.scope();
        let script_count = usize::from(ctxt.read_u16be()?);
        // Records first, then their tables, so every sibling offset is
        // known before descending.
        let mut records = Vec::with_capacity(script_count);
        for _ in 0..script_count {
            records.push((ctxt.read_tag()?, usize::from(ctxt.read_u16be()?)));
        }
        records
            .into_iter()
            .map(|(script_tag, offset)| {
                Ok(ScriptRecord {
                    script_tag,
                    script_table: scope.offset(offset).read::<ScriptTable>()?,
                })
            })
            .collect()
    }
}

impl ReadBinary for ScriptTable {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let scope = ctxt.scope();
        let default_langsys_offset = usize::from(ctxt.read_u16be()?);
        let langsys_count = usize::from(ctxt.read_u16be()?);
        let mut records = Vec::with_capacity(langsys_count);
        for _ in 0..langsys_count {
            records.push((ctxt.read_tag()?, usize::from(ctxt.read_u16be()?)));
        }
        let default_langsys = if default_langsys_offset != 0 {
            Some(scope.offset(default_langsys_offset).read::<LangSys>()?)
        } else {
            None
        };
        let langsys_records = records
            .into_iter()
            .map(|(langsys_tag, offset)| {
                Ok(LangSysRecord {
                    langsys_tag,
                    langsys_table: scope.offset(offset).read::<LangSys>()?,
                })
            })
            .collect::<Result<_, ParseError>>()?;
        Ok(ScriptTable {
            default_langsys,
            langsys_records,
        })
    }
}

impl ReadBinary for LangSys {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let _lookup_order = ctxt.read_u16be()?; // reserved, should be zero
        let required_feature_index = ctxt.read_u16be()?;
        let feature_index_count = usize::from(ctxt.read_u16be()?);
        let feature_indices = ctxt.read_u16be_array(feature_index_count)?;
        Ok(LangSys {
            required_feature_index,
            feature_indices,
        })
    }
}

impl ReadBinary for FeatureList {
    type HostType = Vec<FeatureRecord>;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Vec<FeatureRecord>, ParseError> {
        let scope = ctxt.scope();
        let feature_count = usize::from(ctxt.read_u16be()?);
        let mut records = Vec::with_capacity(feature_count);
        for _ in 0..feature_count {
            records.push((ctxt.read_tag()?, usize::from(ctxt.read_u16be()?)));
        }
        records
            .into_iter()
            .map(|(feature_tag, offset)| {
                Ok(FeatureRecord {
                    feature_tag,
                    feature_table: scope.offset(offset).read::<FeatureTable>()?,
                })
            })
            .collect()
    }
}

impl ReadBinary for FeatureTable {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let _feature_params = ctxt.read_u16be()?; // reserved, should be zero
        let lookup_index_count = usize::from(ctxt.read_u16be()?);
        let lookup_indices = ctxt.read_u16be_array(lookup_index_count)?;
        Ok(FeatureTable { lookup_indices })
    }
}

impl ReadBinary for LookupList {
    type HostType = Vec<LookupTable>;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Vec<LookupTable>, ParseError> {
        let scope = ctxt.scope();
        let lookup_count = usize::from(ctxt.read_u16be()?);
        let lookup_offsets = ctxt.read_u16be_array(lookup_count)?;
        lookup_offsets
            .into_iter()
            .map(|offset| scope.offset(usize::from(offset)).read::<LookupTable>())
            .collect()
    }
}

impl ReadBinary for LookupTable {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let scope = ctxt.scope();
        let lookup_type = ctxt.read_u16be()?;
        let lookup_flag = LookupFlag(ctxt.read_u16be()?);
        let subtable_count = usize::from(ctxt.read_u16be()?);
        let subtable_offsets = ctxt.read_u16be_array(subtable_count)?;
        let mark_filtering_set = if lookup_flag.use_mark_filtering_set() {
            Some(ctxt.read_u16be()?)
        } else {
            None
        };
        let subtables = if lookup_type == LOOKUP_TYPE_SINGLE {
            subtable_offsets
                .into_iter()
                .map(|offset| scope.offset(usize::from(offset)).read::<SingleSubst>())
                .collect::<Result<_, ParseError>>()?
        } else {
            debug!(
                "GSUB lookup type {} is not supported and will be ignored",
                lookup_type
            );
            Vec::new()
        };
        Ok(LookupTable {
            lookup_type,
            lookup_flag,
            mark_filtering_set,
            subtables,
        })
    }
}

impl ReadBinary for SingleSubst {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let scope = ctxt.scope();
        match ctxt.read_u16be()? {
            1 => {
                let coverage_offset = usize::from(ctxt.read_u16be()?);
                let delta_glyph_id = ctxt.read_i16be()?;
                let coverage = scope.offset(coverage_offset).read::<Coverage>()?;
                Ok(SingleSubst::Format1 {
                    coverage,
                    delta_glyph_id,
                })
            }
            2 => {
                let coverage_offset = usize::from(ctxt.read_u16be()?);
                let glyph_count = usize::from(ctxt.read_u16be()?);
                let substitute_glyph_ids = ctxt.read_u16be_array(glyph_count)?;
                let coverage = scope.offset(coverage_offset).read::<Coverage>()?;
                Ok(SingleSubst::Format2 {
                    coverage,
                    substitute_glyph_ids,
                })
            }
            _ => Err(ParseError::CorruptTable("unknown substitution format")),
        }
    }
}

impl ReadBinary for Coverage {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        match ctxt.read_u16be()? {
            1 => {
                let glyph_count = usize::from(ctxt.read_u16be()?);
                // The glyph indices must be in numerical order for binary
                // searching of the list.
                let glyph_array = ctxt.read_u16be_array(glyph_count)?;
                Ok(Coverage::Format1 { glyph_array })
            }
            2 => {
                let range_count = usize::from(ctxt.read_u16be()?);
                let mut ranges = Vec::with_capacity(range_count);
                for _ in 0..range_count {
                    let start_glyph = ctxt.read_u16be()?;
                    let end_glyph = ctxt.read_u16be()?;
                    let start_coverage_index = ctxt.read_u16be()?;
                    ranges.push(CoverageRangeRecord {
                        start_glyph,
                        end_glyph,
                        start_coverage_index,
                    });
                }
                Ok(Coverage::Format2 { ranges })
            }
            _ => Err(ParseError::CorruptTable("unknown coverage format")),
        }
    }
}

impl LookupTable {
    /// Substitute `glyph` through the first subtable that covers it.
    pub(crate) fn apply_glyph(&self, glyph: u16) -> Option<u16> {
        self.subtables
            .iter()
            .find_map(|subtable| subtable.apply_glyph(glyph))
    }
}

impl SingleSubst {
    /// The substitute for `glyph`, or `None` when this subtable does not
    /// cover it.
    pub fn apply_glyph(&self, glyph: u16) -> Option<u16> {
        match self {
            SingleSubst::Format1 {
                coverage,
                delta_glyph_id,
            } => coverage.coverage_index(glyph).map(|_| {
                // Addition of deltaGlyphID is modulo 65536.
                ((i32::from(glyph) + i32::from(*delta_glyph_id)) & 0xFFFF) as u16
            }),
            SingleSubst::Format2 {
                coverage,
                substitute_glyph_ids,
            } => {
                let index = coverage.coverage_index(glyph)?;
                // A coverage index beyond the substitute array is possible
                // in a malformed font; treat it as uncovered.
                substitute_glyph_ids.get(usize::from(index)).copied()
            }
        }
    }
}

impl Coverage {
    /// The coverage index of `glyph`, or `None` when not covered.
    pub fn coverage_index(&self, glyph: u16) -> Option<u16> {
        match self {
            Coverage::Format1 { glyph_array } => glyph_array
                .binary_search(&glyph)
                .ok()
                .map(|index| index as u16),
            Coverage::Format2 { ranges } => ranges
                .iter()
                .find(|range| range.start_glyph <= glyph && glyph <= range.end_glyph)
                .map(|range| {
                    (u32::from(range.start_coverage_index)
                        + u32::from(glyph - range.start_glyph)) as u16
                }),
        }
    }
}
