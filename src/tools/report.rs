//! JSON views of the compressor's results, for callers that want the code table and the
//! encoded bits rather than a container file.

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::bitstream::bitreader::decode;
use crate::bitstream::bitwriter::packed_len;
use crate::compression::compress::{compress, Compressed};
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::tools::data_io::read_input;
use crate::tools::options::HuffOpts;
use crate::tools::symbol_map::{Alphabet, Symbol};

/// What a compression produced, keyed the same way as the container table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressReport {
    pub encoded_data: String,
    pub codes: BTreeMap<u32, String>,
    pub compressed_size: usize,
    pub original_size: usize,
}

impl From<Compressed> for CompressReport {
    fn from(c: Compressed) -> Self {
        Self {
            encoded_data: c.encoded,
            codes: c.codes,
            compressed_size: c.compressed_size,
            original_size: c.original_size,
        }
    }
}

/// A bitstring and the table needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeRequest {
    pub encoded_data: String,
    pub codes: BTreeMap<u32, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompressReport {
    pub decoded_data: String,
}

/// Decode a request. The table gets the same checks as one read from a container.
/// Output that is not UTF-8 is rendered lossily.
pub fn decode_request(req: &DecodeRequest, opts: &HuffOpts) -> Result<DecompressReport> {
    let bytes = match opts.alphabet {
        Alphabet::Bytes => decode_with::<u8>(req, opts)?,
        Alphabet::CodePoints => decode_with::<char>(req, opts)?,
    };
    Ok(DecompressReport {
        decoded_data: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

fn decode_with<S: Symbol>(req: &DecodeRequest, opts: &HuffOpts) -> Result<Vec<u8>> {
    let table = CodeTable::<S>::from_codes(req.codes.clone())?;
    let symbols = decode(&req.encoded_data, &table, opts.trailing_bits)?;
    Ok(S::join(&symbols))
}

/// Compress the input file named in opts and print the report as JSON.
pub fn compress_json(opts: &HuffOpts) -> Result<()> {
    let input = opts
        .input
        .as_deref()
        .ok_or_else(|| HuffError::InvalidInput("no input file given".into()))?;
    let data = read_input(input)?;
    let report = CompressReport::from(compress(&data, None, opts)?);
    info!(
        "{} bits, {} of {} bytes",
        report.encoded_data.len(),
        packed_len(&report.encoded_data),
        report.original_size
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Read a JSON decode request from the input file named in opts and print the result as JSON.
pub fn decode_json(opts: &HuffOpts) -> Result<()> {
    let input = opts
        .input
        .as_deref()
        .ok_or_else(|| HuffError::InvalidInput("no input file given".into()))?;
    let req: DecodeRequest = serde_json::from_slice(&read_input(input)?)?;
    let report = decode_request(&req, opts)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
