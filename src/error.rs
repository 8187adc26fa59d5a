//! Error types

use std::fmt;

/// Errors that originate when parsing the `GSUB` table
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    /// The data ended inside a required field.
    ShortRead,
    /// A format, count, or range that cannot describe a valid table.
    CorruptTable(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ShortRead => write!(f, "end of data reached unexpectedly"),
            ParseError::CorruptTable(reason) => write!(f, "corrupt GSUB table: {}", reason),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that originate when evaluating substitutions
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SubstError {
    /// A glyph passed to `unsubstitution` that was never produced by
    /// `substitution`.
    UnknownReverseMapping(u16),
}

impl fmt::Display for SubstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstError::UnknownReverseMapping(glyph) => {
                write!(f, "no reverse mapping for glyph {}", glyph)
            }
        }
    }
}

impl std::error::Error for SubstError {}
