use std::collections::BTreeMap;

use log::{debug, info};

use crate::bitstream::bitwriter::{encode, packed_len};
use crate::crypto::authenticator::Authenticator;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::build_tree;
use crate::tools::data_io::{read_input, write_output};
use crate::tools::freq_count::freqs;
use crate::tools::options::HuffOpts;
use crate::tools::symbol_map::{Alphabet, Symbol};

use super::container::Container;

/// Everything one compression run produces.
#[derive(Debug, Clone)]
pub struct Compressed {
    /// Code table keyed by the integer value of each symbol
    pub codes: BTreeMap<u32, String>,
    /// Encoded payload as '0'/'1' text
    pub encoded: String,
    /// Serialized container, sealed when a password was given
    pub container: Vec<u8>,
    /// Input length in bytes
    pub original_size: usize,
    /// Payload length in bytes if the bits were packed
    pub compressed_size: usize,
    pub encrypted: bool,
}

/// Compress `input`. The container is sealed when `password` is present and not empty.
pub fn compress(input: &[u8], password: Option<&str>, opts: &HuffOpts) -> Result<Compressed> {
    match opts.alphabet {
        Alphabet::Bytes => compress_with::<u8>(input, password, opts),
        Alphabet::CodePoints => compress_with::<char>(input, password, opts),
    }
}

fn compress_with<S: Symbol>(
    input: &[u8],
    password: Option<&str>,
    opts: &HuffOpts,
) -> Result<Compressed> {
    let symbols = S::split(input)?;
    let freqs = freqs(&symbols);
    debug!(
        "{} symbols in input, {} distinct",
        symbols.len(),
        freqs.len()
    );

    let root = build_tree(&freqs)?;
    let table = CodeTable::from_tree(&root);
    let encoded = encode(&symbols, &table)?;
    let codes = table.to_keyed();

    let container = Container::new(table, encoded);
    let mut blob = container.serialize();
    let encoded = container.payload;

    let password = password.filter(|p| !p.is_empty());
    if let Some(pw) = password {
        blob = Authenticator::new(opts.kdf).encrypt(&blob, pw)?;
    }

    let compressed_size = packed_len(&encoded);
    info!(
        "Compressed {} bytes to {} bits ({} bytes packed), container is {} bytes",
        input.len(),
        encoded.len(),
        compressed_size,
        blob.len()
    );
    Ok(Compressed {
        codes,
        encoded,
        container: blob,
        original_size: input.len(),
        compressed_size,
        encrypted: password.is_some(),
    })
}

/// Compress the input file named in opts and write the container.
pub fn compress_file(opts: &HuffOpts) -> Result<()> {
    let input = opts
        .input
        .as_deref()
        .ok_or_else(|| HuffError::InvalidInput("no input file given".into()))?;
    let data = read_input(input)?;
    let result = compress(&data, opts.password(), opts)?;
    let output = opts
        .output_path()
        .ok_or_else(|| HuffError::InvalidInput("no output file given".into()))?;
    write_output(&output, &result.container, opts.force_overwrite)?;
    info!("Compression successful. Output written to {}", output);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::crypto::authenticator::test::quick;

    fn opts() -> HuffOpts {
        let mut opts = HuffOpts::new();
        opts.kdf = quick().params();
        opts
    }

    #[test]
    fn plain_container_is_text() {
        let result = compress("abcdaba".as_bytes(), None, &opts()).unwrap();
        assert!(!result.encrypted);
        assert_eq!(result.original_size, 7);
        assert_eq!(result.compressed_size, packed_len(&result.encoded));
        let text = String::from_utf8(result.container).unwrap();
        assert!(text.starts_with(&format!("{}\n----DATA----\n", result.encoded)));
        assert!(text.ends_with("----END CODES----\n"));
        assert_eq!(result.codes.len(), 4);
    }

    #[test]
    fn empty_password_stays_plain() {
        let result = compress(b"hello", Some(""), &opts()).unwrap();
        assert!(!result.encrypted);
        assert!(result.container.starts_with(result.encoded.as_bytes()));
    }

    #[test]
    fn password_seals_container() {
        let result = compress(b"hello", Some("pw"), &opts()).unwrap();
        assert!(result.encrypted);
        assert!(!result.container.starts_with(result.encoded.as_bytes()));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            compress(b"", None, &opts()),
            Err(HuffError::EmptyInput)
        ));
    }

    #[test]
    fn code_point_table_uses_char_keys() {
        let mut opts = opts();
        opts.alphabet = Alphabet::CodePoints;
        let result = compress("é→é\n".as_bytes(), None, &opts).unwrap();
        let keys = result.codes.keys().copied().collect::<Vec<_>>();
        assert_eq!(keys, vec![0, 'é' as u32, '→' as u32]);
    }

    #[test]
    fn single_symbol_input() {
        let result = compress(b"aaaa", None, &opts()).unwrap();
        assert_eq!(result.encoded, "0000");
        assert_eq!(result.codes.get(&(b'a' as u32)).map(String::as_str), Some("0"));
        assert_eq!(result.codes.len(), 1);
    }
}
