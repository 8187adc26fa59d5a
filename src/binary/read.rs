//! A cursor over raw big-endian font data.

use crate::error::ParseError;

/// A slice of font data that remembers its position in the containing table.
///
/// Offsets stored in OpenType structures are relative to the start of the
/// enclosing structure. Deriving a child scope with [`ReadScope::offset`]
/// makes the child's own relative offsets resolve against the right base.
#[derive(Clone, Copy, Debug)]
pub struct ReadScope<'a> {
    base: usize,
    data: &'a [u8],
}

/// A read cursor within a [`ReadScope`].
#[derive(Clone)]
pub struct ReadCtxt<'a> {
    scope: ReadScope<'a>,
    offset: usize,
}

/// Types that can be decoded from a [`ReadCtxt`].
pub trait ReadBinary {
    type HostType: Sized;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self::HostType, ParseError>;
}

impl<'a> ReadScope<'a> {
    pub fn new(data: &'a [u8]) -> ReadScope<'a> {
        ReadScope { base: 0, data }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The absolute position of this scope within the original data.
    pub fn base(&self) -> usize {
        self.base
    }

    /// The scope starting `offset` bytes into this one.
    ///
    /// An offset past the end of the data yields an empty scope; the error
    /// surfaces as [`ParseError::ShortRead`] on the next read.
    pub fn offset(&self, offset: usize) -> ReadScope<'a> {
        ReadScope {
            base: self.base + offset,
            data: self.data.get(offset..).unwrap_or(&[]),
        }
    }

    pub fn ctxt(&self) -> ReadCtxt<'a> {
        ReadCtxt {
            scope: *self,
            offset: 0,
        }
    }

    pub fn read<T: ReadBinary>(&self) -> Result<T::HostType, ParseError> {
        T::read(&mut self.ctxt())
    }
}

impl<'a> ReadCtxt<'a> {
    /// The scope beginning at the current read position.
    pub fn scope(&self) -> ReadScope<'a> {
        self.scope.offset(self.offset)
    }

    fn read_bytes(&mut self, length: usize) -> Result<&'a [u8], ParseError> {
        let end = self
            .offset
            .checked_add(length)
            .ok_or(ParseError::ShortRead)?;
        let bytes = self
            .scope
            .data
            .get(self.offset..end)
            .ok_or(ParseError::ShortRead)?;
        self.offset = end;
        Ok(bytes)
    }

    pub fn read_u16be(&mut self) -> Result<u16, ParseError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i16be(&mut self) -> Result<i16, ParseError> {
        self.read_u16be().map(|value| value as i16)
    }

    pub fn read_u32be(&mut self) -> Result<u32, ParseError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a 4-byte ASCII tag.
    pub fn read_tag(&mut self) -> Result<u32, ParseError> {
        self.read_u32be()
    }

    /// Read `count` big-endian `u16` values.
    pub fn read_u16be_array(&mut self, count: usize) -> Result<Vec<u16>, ParseError> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_u16be()?);
        }
        Ok(values)
    }
}
