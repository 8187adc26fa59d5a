//! Utilities and constants for OpenType tags.
//!
//! See also the [`tag!`](../macro.tag.html) macro for creating tags from a
//! byte string.

use crate::error::ParseError;
use std::{fmt, str};

/// Generate a 4-byte OpenType tag from a byte string
///
/// Example:
///
/// ```
/// use glyphsub::tag;
/// assert_eq!(tag!(b"liga"), 0x6C696761);
/// ```
#[macro_export]
macro_rules! tag {
    ($w:expr) => {
        $crate::tag::tag_from_bytes(*$w)
    };
}

#[doc(hidden)]
pub const fn tag_from_bytes(chars: [u8; 4]) -> u32 {
    ((chars[0] as u32) << 24)
        | ((chars[1] as u32) << 16)
        | ((chars[2] as u32) << 8)
        | (chars[3] as u32)
}

/// Build a tag from a string of up to four ASCII characters.
///
/// Shorter strings are padded with spaces, as OpenType requires.
pub fn from_string(s: &str) -> Result<u32, ParseError> {
    if s.len() > 4 {
        return Err(ParseError::CorruptTable("tag longer than four characters"));
    }

    let mut tag: u32 = 0;
    let mut count = 0;

    for c in s.chars() {
        if !c.is_ascii() || c.is_ascii_control() {
            return Err(ParseError::CorruptTable("tag is not printable ASCII"));
        }
        tag = (tag << 8) | (c as u32);
        count += 1;
    }

    while count < 4 {
        tag = (tag << 8) | (' ' as u32);
        count += 1;
    }

    Ok(tag)
}

/// Wrapper type for a tag that implements `Display`
///
/// ASCII tags print as a string, anything else as hex.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct DisplayTag(pub u32);

impl fmt::Display for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_be_bytes();
        if bytes.iter().all(|c| c.is_ascii() && !c.is_ascii_control()) {
            let s = str::from_utf8(&bytes).unwrap(); // unwrap safe due to above check
            s.fmt(f)
        } else {
            write!(f, "0x{:08x}", self.0)
        }
    }
}

impl fmt::Debug for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_string().fmt(f)
    }
}

/// `DFLT`
pub const DFLT: u32 = tag!(b"DFLT");
/// `kana`
pub const KANA: u32 = tag!(b"kana");
/// `latn`
pub const LATN: u32 = tag!(b"latn");
/// `liga`
pub const LIGA: u32 = tag!(b"liga");
/// `vert`
pub const VERT: u32 = tag!(b"vert");
/// `vrt2`
pub const VRT2: u32 = tag!(b"vrt2");
