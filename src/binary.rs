//! Reading of binary font data.

pub mod read;
