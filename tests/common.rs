//! Helpers for assembling synthetic `GSUB` tables in tests.

#![allow(dead_code)]

pub struct LangSysDef {
    pub required_feature_index: u16,
    pub feature_indices: Vec<u16>,
}

impl LangSysDef {
    /// A language system with no required feature.
    pub fn new(feature_indices: Vec<u16>) -> Self {
        LangSysDef {
            required_feature_index: 0xFFFF,
            feature_indices,
        }
    }
}

pub struct ScriptDef {
    pub tag: [u8; 4],
    pub default_langsys: Option<LangSysDef>,
    pub langsys_records: Vec<([u8; 4], LangSysDef)>,
}

impl ScriptDef {
    /// A script whose only language system is the default one.
    pub fn new(tag: [u8; 4], default_langsys: LangSysDef) -> Self {
        ScriptDef {
            tag,
            default_langsys: Some(default_langsys),
            langsys_records: Vec::new(),
        }
    }
}

pub struct FeatureDef {
    pub tag: [u8; 4],
    pub lookup_indices: Vec<u16>,
}

pub enum CoverageDef {
    Glyphs(Vec<u16>),
    Ranges(Vec<(u16, u16, u16)>),
}

pub enum SubtableDef {
    Delta {
        coverage: CoverageDef,
        delta: i16,
    },
    Array {
        coverage: CoverageDef,
        substitutes: Vec<u16>,
    },
}

pub struct LookupDef {
    pub lookup_type: u16,
    pub lookup_flag: u16,
    pub subtables: Vec<SubtableDef>,
}

impl LookupDef {
    /// A type 1 lookup with no flags set.
    pub fn single(subtables: Vec<SubtableDef>) -> Self {
        LookupDef {
            lookup_type: 1,
            lookup_flag: 0,
            subtables,
        }
    }
}

fn push_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn build_langsys(def: &LangSysDef) -> Vec<u8> {
    let mut buf = Vec::new();
    push_u16(&mut buf, 0); // lookupOrder
    push_u16(&mut buf, def.required_feature_index);
    push_u16(&mut buf, def.feature_indices.len() as u16);
    for &index in &def.feature_indices {
        push_u16(&mut buf, index);
    }
    buf
}

fn build_script_table(def: &ScriptDef) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut tables: Vec<Vec<u8>> = Vec::new();
    let mut offset = 4 + 6 * def.langsys_records.len();
    let default_offset = match &def.default_langsys {
        Some(langsys) => {
            let bytes = build_langsys(langsys);
            let o = offset;
            offset += bytes.len();
            tables.push(bytes);
            o
        }
        None => 0,
    };
    push_u16(&mut buf, default_offset as u16);
    push_u16(&mut buf, def.langsys_records.len() as u16);
    for (tag, langsys) in &def.langsys_records {
        let bytes = build_langsys(langsys);
        buf.extend_from_slice(tag);
        push_u16(&mut buf, offset as u16);
        offset += bytes.len();
        tables.push(bytes);
    }
    for table in tables {
        buf.extend_from_slice(&table);
    }
    buf
}

fn build_script_list(scripts: &[ScriptDef]) -> Vec<u8> {
    let tables: Vec<Vec<u8>> = scripts.iter().map(build_script_table).collect();
    let mut buf = Vec::new();
    push_u16(&mut buf, scripts.len() as u16);
    let mut offset = 2 + 6 * scripts.len();
    for (def, table) in scripts.iter().zip(&tables) {
        buf.extend_from_slice(&def.tag);
        push_u16(&mut buf, offset as u16);
        offset += table.len();
    }
    for table in tables {
        buf.extend_from_slice(&table);
    }
    buf
}

fn build_feature_table(def: &FeatureDef) -> Vec<u8> {
    let mut buf = Vec::new();
    push_u16(&mut buf, 0); // featureParams
    push_u16(&mut buf, def.lookup_indices.len() as u16);
    for &index in &def.lookup_indices {
        push_u16(&mut buf, index);
    }
    buf
}

fn build_feature_list(features: &[FeatureDef]) -> Vec<u8> {
    let tables: Vec<Vec<u8>> = features.iter().map(build_feature_table).collect();
    let mut buf = Vec::new();
    push_u16(&mut buf, features.len() as u16);
    let mut offset = 2 + 6 * features.len();
    for (def, table) in features.iter().zip(&tables) {
        buf.extend_from_slice(&def.tag);
        push_u16(&mut buf, offset as u16);
        offset += table.len();
    }
    for table in tables {
        buf.extend_from_slice(&table);
    }
    buf
}

fn build_coverage(def: &CoverageDef) -> Vec<u8> {
    let mut buf = Vec::new();
    match def {
        CoverageDef::Glyphs(glyphs) => {
            push_u16(&mut buf, 1);
            push_u16(&mut buf, glyphs.len() as u16);
            for &glyph in glyphs {
                push_u16(&mut buf, glyph);
            }
        }
        CoverageDef::Ranges(ranges) => {
            push_u16(&mut buf, 2);
            push_u16(&mut buf, ranges.len() as u16);
            for &(start, end, start_coverage_index) in ranges {
                push_u16(&mut buf, start);
                push_u16(&mut buf, end);
                push_u16(&mut buf, start_coverage_index);
            }
        }
    }
    buf
}

fn build_subtable(def: &SubtableDef) -> Vec<u8> {
    let mut buf = Vec::new();
    match def {
        SubtableDef::Delta { coverage, delta } => {
            push_u16(&mut buf, 1);
            push_u16(&mut buf, 6); // coverage follows the fixed fields
            push_u16(&mut buf, *delta as u16);
            buf.extend_from_slice(&build_coverage(coverage));
        }
        SubtableDef::Array {
            coverage,
            substitutes,
        } => {
            push_u16(&mut buf, 2);
            push_u16(&mut buf, (6 + 2 * substitutes.len()) as u16);
            push_u16(&mut buf, substitutes.len() as u16);
            for &substitute in substitutes {
                push_u16(&mut buf, substitute);
            }
            buf.extend_from_slice(&build_coverage(coverage));
        }
    }
    buf
}

fn build_lookup(def: &LookupDef) -> Vec<u8> {
    let subtables: Vec<Vec<u8>> = def.subtables.iter().map(build_subtable).collect();
    let uses_mark_filtering_set = def.lookup_flag & 0x0010 != 0;
    let mut buf = Vec::new();
    push_u16(&mut buf, def.lookup_type);
    push_u16(&mut buf, def.lookup_flag);
    push_u16(&mut buf, def.subtables.len() as u16);
    let mut offset =
        6 + 2 * def.subtables.len() + if uses_mark_filtering_set { 2 } else { 0 };
    for subtable in &subtables {
        push_u16(&mut buf, offset as u16);
        offset += subtable.len();
    }
    if uses_mark_filtering_set {
        push_u16(&mut buf, 0); // markFilteringSet
    }
    for subtable in subtables {
        buf.extend_from_slice(&subtable);
    }
    buf
}

fn build_lookup_list(lookups: &[LookupDef]) -> Vec<u8> {
    let tables: Vec<Vec<u8>> = lookups.iter().map(build_lookup).collect();
    let mut buf = Vec::new();
    push_u16(&mut buf, lookups.len() as u16);
    let mut offset = 2 + 2 * lookups.len();
    for table in &tables {
        push_u16(&mut buf, offset as u16);
        offset += table.len();
    }
    for table in tables {
        buf.extend_from_slice(&table);
    }
    buf
}

/// Serialise a complete `GSUB` table with the given minor version.
///
/// Minor version 1 inserts the (unused) featureVariationsOffset between the
/// header and the lists.
pub fn build_gsub_versioned(
    minor_version: u16,
    scripts: &[ScriptDef],
    features: &[FeatureDef],
    lookups: &[LookupDef],
) -> Vec<u8> {
    let script_list = build_script_list(scripts);
    let feature_list = build_feature_list(features);
    let lookup_list = build_lookup_list(lookups);
    let header_len = if minor_version == 1 { 14 } else { 10 };

    let mut buf = Vec::new();
    push_u16(&mut buf, 1);
    push_u16(&mut buf, minor_version);
    push_u16(&mut buf, header_len as u16);
    push_u16(&mut buf, (header_len + script_list.len()) as u16);
    push_u16(
        &mut buf,
        (header_len + script_list.len() + feature_list.len()) as u16,
    );
    if minor_version == 1 {
        buf.extend_from_slice(&0u32.to_be_bytes()); // featureVariationsOffset
    }
    buf.extend_from_slice(&script_list);
    buf.extend_from_slice(&feature_list);
    buf.extend_from_slice(&lookup_list);
    buf
}

/// Serialise a version 1.0 `GSUB` table.
pub fn build_gsub(
    scripts: &[ScriptDef],
    features: &[FeatureDef],
    lookups: &[LookupDef],
) -> Vec<u8> {
    build_gsub_versioned(0, scripts, features, lookups)
}

/// One `latn` script with a default language system, a `liga` feature, and
/// a format 1 single substitution with delta +5 covering glyph 10.
pub fn liga_delta_font() -> Vec<u8> {
    build_gsub(
        &[ScriptDef::new(*b"latn", LangSysDef::new(vec![0]))],
        &[FeatureDef {
            tag: *b"liga",
            lookup_indices: vec![0],
        }],
        &[LookupDef::single(vec![SubtableDef::Delta {
            coverage: CoverageDef::Glyphs(vec![10]),
            delta: 5,
        }])],
    )
}
