//! The bitstream module encodes symbols into a huffman bitstring and decodes them back.
//!
//! Bitstrings are kept as text made of '0' and '1', which is also how the container stores
//! them. The payload length is not recorded anywhere; the decoder stops at the end of the
//! text and applies the trailing bit policy to whatever is left over.
//!
pub mod bitreader;
pub mod bitwriter;
