use log::debug;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::tools::symbol_map::Symbol;

/// Writes the huffman bitstring for a run of symbols. The output is text made of '0' and '1'.
pub struct BitWriter<'a, S> {
    /// Output buffer holding the bits written so far.
    output: String,
    /// Table used to look up each symbol.
    table: &'a CodeTable<S>,
}

impl<'a, S: Symbol> BitWriter<'a, S> {
    /// Create a new BitWriter with an output buffer sized for `capacity` bits.
    pub fn new(table: &'a CodeTable<S>, capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            table,
        }
    }

    /// Put the code for one symbol on the stream.
    pub fn put(&mut self, sym: S) -> Result<()> {
        let code = self
            .table
            .get(sym)
            .ok_or(HuffError::UnknownSymbol { key: sym.key() })?;
        self.output.push_str(code);
        Ok(())
    }

    /// Count of bits written so far.
    pub fn loc(&self) -> usize {
        self.output.len()
    }

    /// Hand back the finished bitstring.
    pub fn finish(self) -> String {
        self.output
    }
}

/// Encode every symbol with its code, in order.
pub fn encode<S: Symbol>(symbols: &[S], table: &CodeTable<S>) -> Result<String> {
    // Average code length is rarely above 8 bits for text.
    let mut bw = BitWriter::new(table, symbols.len() * 8);
    for &sym in symbols {
        bw.put(sym)?;
    }
    debug!("Encoded {} symbols into {} bits", symbols.len(), bw.loc());
    Ok(bw.finish())
}

/// Bytes needed to hold `bits` once packed, rounding the last partial byte up.
pub fn packed_len(bits: &str) -> usize {
    (bits.len() + 7) / 8
}

#[cfg(test)]
mod test {
    use super::*;

    fn abcd() -> CodeTable<u8> {
        CodeTable::from_codes(vec![
            (b'a' as u32, "0".to_string()),
            (b'b' as u32, "10".to_string()),
            (b'c' as u32, "110".to_string()),
            (b'd' as u32, "111".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn encode_test() {
        let encoded = encode("abcdaba".as_bytes(), &abcd()).unwrap();
        assert_eq!(encoded, "0101101110100");
    }

    #[test]
    fn encode_empty_test() {
        assert_eq!(encode(&[], &abcd()).unwrap(), "");
    }

    #[test]
    fn unknown_symbol_test() {
        let result = encode("abe".as_bytes(), &abcd());
        assert!(matches!(
            result,
            Err(HuffError::UnknownSymbol { key }) if key == b'e' as u32
        ));
    }

    #[test]
    fn packed_len_test() {
        assert_eq!(packed_len(""), 0);
        assert_eq!(packed_len("0"), 1);
        assert_eq!(packed_len("01011011"), 1);
        assert_eq!(packed_len("0101101110100"), 2);
    }
}
