//! BitReader: decodes a huffman bitstring back into symbols.
//!
//! The inverse table (code to symbol) is built once up front. Bits are then read one at a
//! time into a candidate code, and a symbol is emitted whenever the candidate matches.
//! Because the table is prefix-free the first match is always the right one.
//!

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::tools::symbol_map::Symbol;

/// What to do with bits left at the end of the stream that never complete a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBits {
    /// Fail with IncompleteDecode.
    #[default]
    Strict,
    /// Drop them with a warning.
    Lenient,
}

/// Reads a bitstring using a code table.
#[derive(Debug)]
pub struct BitReader<'a, S> {
    inverse: FxHashMap<&'a str, S>,
    max_len: usize,
}

impl<'a, S: Symbol> BitReader<'a, S> {
    /// Build the inverse lookup for `table`.
    pub fn new(table: &'a CodeTable<S>) -> Self {
        Self {
            inverse: table.iter().map(|(s, c)| (c, s)).collect(),
            max_len: table.max_code_len(),
        }
    }

    /// Decode `bits`. Returns the symbols and the count of trailing bits that were not used.
    pub fn read(&self, bits: &str) -> Result<(Vec<S>, usize)> {
        let mut out = Vec::with_capacity(bits.len() / self.max_len.max(1));
        let mut start = 0;
        for (idx, b) in bits.bytes().enumerate() {
            if b != b'0' && b != b'1' {
                return Err(HuffError::MalformedContainer(format!(
                    "invalid bit {:?} at position {}",
                    b as char, idx
                )));
            }
            let candidate = &bits[start..=idx];
            if let Some(&sym) = self.inverse.get(candidate) {
                out.push(sym);
                start = idx + 1;
            } else if candidate.len() >= self.max_len {
                // Nothing this long is in the table, so no later bit can complete it.
                return Ok((out, bits.len() - start));
            }
        }
        Ok((out, bits.len() - start))
    }
}

/// Decode a bitstring with `table`, applying `policy` to any leftover bits.
pub fn decode<S: Symbol>(bits: &str, table: &CodeTable<S>, policy: TrailingBits) -> Result<Vec<S>> {
    let (symbols, trailing) = BitReader::new(table).read(bits)?;
    if trailing > 0 {
        match policy {
            TrailingBits::Strict => return Err(HuffError::IncompleteDecode { bits: trailing }),
            TrailingBits::Lenient => warn!("Dropping {} undecodable trailing bit(s)", trailing),
        }
    }
    debug!("Decoded {} bits into {} symbols", bits.len(), symbols.len());
    Ok(symbols)
}
