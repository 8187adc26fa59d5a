#![warn(rust_2018_idioms)]

//! # OpenType glyph substitution
//!
//! `glyphsub` parses the `GSUB` table of a TrueType or OpenType font and
//! evaluates single glyph substitutions on behalf of a text layout or
//! rendering stage. Given a glyph, the Unicode script of the originating
//! character, and a set of enabled feature tags, it returns the substituted
//! glyph; given a substituted glyph it recovers the original, which text
//! extraction relies on.
//!
//! Two invocation modes are supported: general feature-driven substitution
//! through [`SubstitutingCmap`], and a vertical-writing mode through
//! [`VerticalSubstitutingCmap`] that applies the font's vertical features
//! unconditionally, as vertical CJK typesetting expects.
//!
//! Only GSUB lookup type 1 (single substitution) is evaluated. Other lookup
//! types parse cleanly but never substitute, so fonts that rely on them
//! shape as if those features were absent. `GPOS` positioning is out of
//! scope entirely.
//!
//! The host font supplies its character-to-glyph mapping through the
//! [`CmapLookup`] trait; this crate performs no `cmap` parsing of its own.

pub mod binary;
pub mod cmap;
pub mod error;
pub mod gsub;
pub mod layout;
pub mod script;
pub mod tag;

pub use crate::cmap::{CmapLookup, SubstitutingCmap, VerticalSubstitutingCmap};
pub use crate::gsub::GsubTable;
