//! hufflock, a password protected huffman file compressor.
//!
//! Version 0.1.0
//!
//! Builds a huffman code for the whole input, stores the encoded bits and the code table in
//! a small text container, and optionally seals that container with AES-256-GCM under a key
//! derived from a password with Argon2id. Inputs are held in memory in full.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> hufflock -p secret notes.txt`
//!
//! This will compress the file and create the file notes.txt.huf.
//! `hufflock -d -p secret notes.txt.huf` restores it.
//!
pub mod bitstream;
pub mod compression;
pub mod crypto;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress, Compressed};
pub use compression::decompress::decompress;
pub use error::{HuffError, Result};
