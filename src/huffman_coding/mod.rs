//! The huffman module builds the code tree for an input and the code table derived from it.
//!
//! The tree is built by repeatedly merging the two lightest nodes. Ties are broken by the
//! order in which nodes entered the working set, so a given frequency table always yields
//! the same tree and the same codes.
//!
//! The code table maps every symbol to a string of '0' and '1'. It is prefix-free, which is
//! what lets the decoder read codes back without any length information.
//!

pub mod code_table;
pub mod huffman;
