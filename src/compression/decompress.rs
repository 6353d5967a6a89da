use log::info;

use crate::bitstream::bitreader::decode;
use crate::crypto::authenticator::Authenticator;
use crate::error::{HuffError, Result};
use crate::tools::data_io::{read_input, write_output};
use crate::tools::options::HuffOpts;
use crate::tools::symbol_map::{Alphabet, Symbol};

use super::container::Container;

/// Restore the original bytes from a container. When a password is given the container is
/// opened first, so a wrong password is reported before any huffman decoding happens.
pub fn decompress(blob: &[u8], password: Option<&str>, opts: &HuffOpts) -> Result<Vec<u8>> {
    let opened;
    let text = match password.filter(|p| !p.is_empty()) {
        Some(pw) => {
            opened = Authenticator::new(opts.kdf).decrypt(blob, pw)?;
            info!("Password accepted.");
            &opened[..]
        }
        None => blob,
    };
    match opts.alphabet {
        Alphabet::Bytes => decode_with::<u8>(text, opts),
        Alphabet::CodePoints => decode_with::<char>(text, opts),
    }
}

fn decode_with<S: Symbol>(text: &[u8], opts: &HuffOpts) -> Result<Vec<u8>> {
    let container = Container::<S>::parse(text)?;
    let symbols = decode(&container.payload, &container.table, opts.trailing_bits)?;
    Ok(S::join(&symbols))
}

/// Decompress the container named in opts and write the restored file.
pub fn decompress_file(opts: &HuffOpts) -> Result<()> {
    let input = opts
        .input
        .as_deref()
        .ok_or_else(|| HuffError::InvalidInput("no input file given".into()))?;
    let blob = read_input(input)?;
    let data = decompress(&blob, opts.password(), opts)?;
    let output = opts
        .output_path()
        .ok_or_else(|| HuffError::InvalidInput("no output file given".into()))?;
    write_output(&output, &data, opts.force_overwrite)?;
    info!("Decompression successful. Output written to {}", output);
    Ok(())
}

/// Decompress the container named in opts without writing anything.
pub fn test_file(opts: &HuffOpts) -> Result<()> {
    let input = opts
        .input
        .as_deref()
        .ok_or_else(|| HuffError::InvalidInput("no input file given".into()))?;
    let blob = read_input(input)?;
    let data = decompress(&blob, opts.password(), opts)?;
    info!("{}: ok, {} bytes", input, data.len());
    Ok(())
}
