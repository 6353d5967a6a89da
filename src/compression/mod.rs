//! The compression module runs the whole pipeline in both directions.
//!
//! Compression happens in the following steps:
//! - Split the input into symbols and count them.
//! - Build the huffman tree and derive the code table.
//! - Encode the symbols into a bitstring.
//! - Serialize the bitstring and the table into a text container.
//! - Seal the container with a password, if one was given.
//!
//! Decompression is the inverse. A sealed container is opened first, so a wrong password
//! or tampered data is caught before any decoding is attempted.
//!

pub mod compress;
pub mod container;
pub mod decompress;
