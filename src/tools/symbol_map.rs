use std::{fmt::Debug, fmt::Display, fmt::Formatter, hash::Hash};

use crate::error::{HuffError, Result};

/// Stands in for a line feed when the alphabet is code points, since the container
/// uses line feeds as delimiters.
pub const LINE_SENTINEL: char = '\0';

/// One unit of the input alphabet.
///
/// The container stores every symbol as its integer key, so a symbol must convert to a
/// `u32` and back. `split` and `join` turn raw input into symbols and decoded symbols
/// back into output bytes.
pub trait Symbol: Copy + Ord + Hash + Debug + Send + Sync {
    /// Integer form written to the container.
    fn key(self) -> u32;
    /// Rebuild a symbol from its container key. None if the key is out of range.
    fn from_key(key: u32) -> Option<Self>;
    /// Break raw input into symbols.
    fn split(data: &[u8]) -> Result<Vec<Self>>;
    /// Reassemble decoded symbols into output bytes.
    fn join(symbols: &[Self]) -> Vec<u8>;
}

impl Symbol for u8 {
    fn key(self) -> u32 {
        self as u32
    }

    fn from_key(key: u32) -> Option<Self> {
        u8::try_from(key).ok()
    }

    fn split(data: &[u8]) -> Result<Vec<Self>> {
        Ok(data.to_vec())
    }

    fn join(symbols: &[Self]) -> Vec<u8> {
        symbols.to_vec()
    }
}

impl Symbol for char {
    fn key(self) -> u32 {
        self as u32
    }

    fn from_key(key: u32) -> Option<Self> {
        char::from_u32(key)
    }

    /// Input must be UTF-8 without NUL characters. Line feeds become LINE_SENTINEL.
    fn split(data: &[u8]) -> Result<Vec<Self>> {
        let text = std::str::from_utf8(data).map_err(|e| {
            HuffError::InvalidInput(format!("code point mode needs UTF-8 input ({})", e))
        })?;
        if let Some(pos) = text.find(LINE_SENTINEL) {
            return Err(HuffError::InvalidInput(format!(
                "NUL character at byte {} collides with the line feed sentinel",
                pos
            )));
        }
        Ok(text
            .chars()
            .map(|c| if c == '\n' { LINE_SENTINEL } else { c })
            .collect())
    }

    fn join(symbols: &[Self]) -> Vec<u8> {
        symbols
            .iter()
            .map(|&c| if c == LINE_SENTINEL { '\n' } else { c })
            .collect::<String>()
            .into_bytes()
    }
}

/// Which kind of symbol the compressor works on. Compression and decompression of one
/// container must use the same alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Every byte is a symbol. Any input round-trips.
    #[default]
    Bytes,
    /// Every Unicode scalar value of a UTF-8 input is a symbol.
    CodePoints,
}
impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
