use std::io::{Cursor, Read};

use byteorder::ReadBytesExt;

use crate::{attrs::FacetValue, FcodeError, Result};

type Endian = byteorder::BigEndian;

/// The stream primitives the attr decoder needs from the pod store: a
/// positioned big-endian byte stream plus the pod's name table, symbol
/// table, and fcode format version.
pub trait Input {
    fn u2(&mut self) -> Result<u16>;

    fn bytes(&mut self, len: u16) -> Result<Vec<u8>>;

    /// Reads an interned-name reference and resolves it against the pod's
    /// name table.
    fn name(&mut self) -> Result<String>;

    /// Advances the stream by at most `n` bytes and returns the count
    /// actually skipped. Short counts signal a truncated stream and are the
    /// caller's problem to diagnose.
    fn skip(&mut self, n: u16) -> Result<u16>;

    /// Resolves a symbol-table index to a fully qualified name.
    fn symbol_qname(&mut self, index: u16) -> Result<String>;

    /// Parses a serialized initial-value literal for a facet. The decoder
    /// stores whatever comes back without inspecting it.
    fn init_val(&mut self, literal: String) -> Result<FacetValue>;

    fn fcode_version(&self) -> u32;

    fn utf(&mut self) -> Result<String> {
        let len = self.u2()?;
        let bytes = self.bytes(len)?;
        Ok(String::from_utf8_lossy(&bytes).into())
    }
}

/// Cursor-backed [`Input`] over an in-memory attr table, with the name and
/// symbol tables supplied up front.
pub struct PodInput<'a> {
    r: Cursor<&'a [u8]>,
    names: Vec<String>,
    symbols: Vec<String>,
    version: u32,
}
impl<'a> PodInput<'a> {
    pub fn new(buf: &'a [u8], version: u32) -> Self {
        Self {
            r: Cursor::new(buf),
            names: Vec::new(),
            symbols: Vec::new(),
            version,
        }
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn with_symbols(mut self, symbols: Vec<String>) -> Self {
        self.symbols = symbols;
        self
    }
}
impl Input for PodInput<'_> {
    fn u2(&mut self) -> Result<u16> {
        Ok(self.r.read_u16::<Endian>()?)
    }

    fn bytes(&mut self, len: u16) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; len as usize];
        self.r.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    fn name(&mut self) -> Result<String> {
        let index = self.u2()?;
        self.names
            .get(index as usize)
            .cloned()
            .ok_or(FcodeError::InvalidNameIndex(index))
    }

    fn skip(&mut self, n: u16) -> Result<u16> {
        let pos = self.r.position();
        let len = self.r.get_ref().len() as u64;
        let skipped = u64::from(n).min(len - pos);
        self.r.set_position(pos + skipped);
        Ok(skipped as u16)
    }

    fn symbol_qname(&mut self, index: u16) -> Result<String> {
        self.symbols
            .get(index as usize)
            .cloned()
            .ok_or(FcodeError::InvalidSymbolIndex(index))
    }

    fn init_val(&mut self, literal: String) -> Result<FacetValue> {
        Ok(FacetValue::new(literal))
    }

    fn fcode_version(&self) -> u32 {
        self.version
    }
}

#[cfg(test)]
mod skip_tests {
    use super::*;

    #[test]
    fn it_should_skip_exactly_n_bytes() {
        let mut input = PodInput::new(&[0xAA, 0xBB, 0x12, 0x34], 0);
        assert_eq!(input.skip(2).unwrap(), 2);
        assert_eq!(input.u2().unwrap(), 0x1234);
    }

    #[test]
    fn it_should_stop_at_the_end_of_the_stream() {
        let mut input = PodInput::new(&[0xAA, 0xBB, 0xCC, 0xDD], 0);
        assert_eq!(input.skip(10).unwrap(), 4);
    }
}

#[cfg(test)]
mod utf_tests {
    use super::*;

    #[test]
    fn it_should_read_a_length_prefixed_string() {
        let mut input = PodInput::new(&[0x00, 0x05, b'a', b'.', b'f', b'a', b'n'], 0);
        assert_eq!(input.utf().unwrap(), "a.fan");
    }

    #[test]
    fn it_should_fail_if_the_string_is_truncated() {
        let mut input = PodInput::new(&[0x00, 0x05, b'a'], 0);
        assert!(input.utf().is_err());
    }
}
