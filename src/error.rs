//! Error types shared by every stage of the compressor.

use thiserror::Error;

/// Everything that can go wrong while compressing, sealing, opening or decoding a container.
#[derive(Debug, Error)]
pub enum HuffError {
    /// There were no symbols to build a code from.
    #[error("nothing to compress: input is empty")]
    EmptyInput,

    /// A symbol was handed to the encoder that its code table does not know about.
    #[error("symbol {key} has no entry in the code table")]
    UnknownSymbol { key: u32 },

    /// The container text could not be parsed.
    #[error("corrupt or invalid file: {0}")]
    MalformedContainer(String),

    /// The AEAD tag did not verify. Wrong password and tampering look the same here.
    #[error("incorrect password or corrupted data")]
    Authentication,

    /// The sealed blob cannot even hold a salt, a nonce and a tag.
    #[error("encrypted data is too short ({len} bytes, need at least {min})")]
    MalformedCiphertext { len: usize, min: usize },

    /// Bits were left over at the end of the payload that never formed a complete code.
    #[error("{bits} trailing bit(s) do not form a complete code")]
    IncompleteDecode { bits: usize },

    /// The input cannot be represented in the selected alphabet.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("cipher failure: {0}")]
    Cipher(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HuffError>;
