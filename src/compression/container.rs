//! The unencrypted container: a line-oriented UTF-8 text holding the payload bits and the
//! code table that decodes them.
//!
//! ```text
//! 0101101110100
//! ----DATA----
//! 97:0
//! 98:10
//! 99:110
//! 100:111
//! ----END CODES----
//! ```
//!
//! Table entries are `<key>:<code>` with the decimal symbol key, so colons, line feeds and
//! any other control character can be stored as symbols.

use log::{debug, warn};

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::tools::symbol_map::Symbol;

pub const DATA_MARK: &str = "----DATA----";
pub const END_MARK: &str = "----END CODES----";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<S> {
    pub table: CodeTable<S>,
    pub payload: String,
}

impl<S: Symbol> Container<S> {
    pub fn new(table: CodeTable<S>, payload: String) -> Self {
        Self { table, payload }
    }

    /// Write the container as text.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = String::with_capacity(self.payload.len() + 32 + self.table.len() * 16);
        out.push_str(&self.payload);
        out.push('\n');
        out.push_str(DATA_MARK);
        out.push('\n');
        for (sym, code) in self.table.iter() {
            out.push_str(&format!("{}:{}\n", sym.key(), code));
        }
        out.push_str(END_MARK);
        out.push('\n');
        out.into_bytes()
    }

    /// Read a container back. The first line is the payload; the table follows the data
    /// marker and runs to the end marker or to the end of the input.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data).map_err(|_| {
            HuffError::MalformedContainer("not a text container (is it encrypted?)".into())
        })?;
        let mut lines = text.lines();

        let payload = lines
            .next()
            .ok_or_else(|| HuffError::MalformedContainer("file is empty".into()))?;

        let mut skipped = 0;
        loop {
            match lines.next() {
                Some(DATA_MARK) => break,
                Some(_) => skipped += 1,
                None => {
                    return Err(HuffError::MalformedContainer(format!(
                        "missing {} line",
                        DATA_MARK
                    )))
                }
            }
        }
        if skipped > 0 {
            warn!("Ignored {} line(s) between payload and code table", skipped);
        }

        let mut pairs = vec![];
        for line in lines {
            if line == END_MARK {
                break;
            }
            pairs.push(parse_entry(line)?);
        }
        let table = CodeTable::from_codes(pairs)?;
        debug!(
            "Parsed container: {} payload bits, {} table entries",
            payload.len(),
            table.len()
        );
        Ok(Self::new(table, payload.to_string()))
    }
}

/// Split one `<key>:<code>` table line.
fn parse_entry(line: &str) -> Result<(u32, String)> {
    let bad = || HuffError::MalformedContainer(format!("bad table line {:?}", line));
    let (key, code) = line.split_once(':').ok_or_else(bad)?;
    let key = key.parse::<u32>().map_err(|_| bad())?;
    Ok((key, code.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitstream::bitwriter::encode;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::freqs;

    fn abcd() -> Container<u8> {
        let table = CodeTable::from_codes(vec![
            (97, "0".to_string()),
            (98, "10".to_string()),
            (99, "110".to_string()),
            (100, "111".to_string()),
        ])
        .unwrap();
        Container::new(table, "0101101110100".to_string())
    }

    #[test]
    fn serialize_layout() {
        let text = String::from_utf8(abcd().serialize()).unwrap();
        assert_eq!(
            text,
            "0101101110100\n----DATA----\n97:0\n98:10\n99:110\n100:111\n----END CODES----\n"
        );
    }

    #[test]
    fn parse_round_trip() {
        let c = abcd();
        assert_eq!(Container::parse(&c.serialize()).unwrap(), c);
    }

    #[test]
    fn awkward_symbols_round_trip() {
        let data = "a:b\nc\r\n::\t\0".as_bytes();
        let table = CodeTable::from_tree(&build_tree(&freqs(data)).unwrap());
        let payload = encode(data, &table).unwrap();
        let c = Container::new(table, payload);
        assert_eq!(Container::parse(&c.serialize()).unwrap(), c);
    }

    #[test]
    fn code_point_keys_round_trip() {
        let data = "naïve → ∑\u{1F600}".chars().collect::<Vec<_>>();
        let table = CodeTable::from_tree(&build_tree(&freqs(&data)).unwrap());
        let payload = encode(&data, &table).unwrap();
        let c = Container::new(table, payload);
        assert_eq!(Container::parse(&c.serialize()).unwrap(), c);
    }

    #[test]
    fn end_marker_may_be_missing() {
        let c = Container::<u8>::parse(b"0101\n----DATA----\n97:0\n98:1").unwrap();
        assert_eq!(c.payload, "0101");
        assert_eq!(c.table.get(b'b'), Some("1"));
    }

    #[test]
    fn lines_before_data_marker_are_skipped() {
        let c = Container::<u8>::parse(b"01\nstray\n----DATA----\n97:0\n98:1\n----END CODES----\n")
            .unwrap();
        assert_eq!(c.payload, "01");
    }

    #[test]
    fn lines_after_end_marker_are_ignored() {
        let c = Container::<u8>::parse(b"01\n----DATA----\n97:0\n98:1\n----END CODES----\nzzz\n")
            .unwrap();
        assert_eq!(c.table.len(), 2);
    }

    #[test]
    fn missing_data_marker() {
        let result = Container::<u8>::parse(b"0101\n97:0\n98:1\n");
        assert!(matches!(result, Err(HuffError::MalformedContainer(_))));
        let result = Container::<u8>::parse(b"");
        assert!(matches!(result, Err(HuffError::MalformedContainer(_))));
    }

    #[test]
    fn bad_table_lines() {
        for text in [
            "01\n----DATA----\n97-0\n",
            "01\n----DATA----\nx:0\n",
            "01\n----DATA----\n97:\n",
            "01\n----DATA----\n----END CODES----\n",
            "01\n----DATA----\n97:0\n98:01\n",
        ] {
            let result = Container::<u8>::parse(text.as_bytes());
            assert!(
                matches!(result, Err(HuffError::MalformedContainer(_))),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn binary_data_is_not_a_container() {
        let result = Container::<u8>::parse(&[0xff, 0x00, 0x9c]);
        assert!(matches!(result, Err(HuffError::MalformedContainer(_))));
    }
}
