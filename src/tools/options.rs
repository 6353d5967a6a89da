/// hufflock options - structs and impls describing one run of the program
use std::{fmt::Debug, fmt::Display, fmt::Formatter};

use crate::bitstream::bitreader::TrailingBits;
use crate::crypto::authenticator::KdfParams;
use crate::tools::symbol_map::Alphabet;

/// Suffix added to compressed files
pub const SUFFIX: &str = ".huf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Defines the operational modes
pub enum Mode {
    /// Compress a file into a container
    Zip,
    /// Restore a file from a container
    Unzip,
    /// Decompress and discard, checking the container is intact
    Test,
    /// Print the compression report as JSON instead of writing a container
    Json,
    /// Decode a JSON request holding a bitstring and its code table
    DecodeJson,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Clone)]
/// Defines all user settable options to control program behavior
pub struct HuffOpts {
    /// Compress/Decompress/Test/Json/DecodeJson
    pub op_mode: Mode,
    /// Name of the file to read for input
    pub input: Option<String>,
    /// Name of the file to write, when the default is not wanted
    pub output: Option<String>,
    /// Password for sealing or opening the container
    pub password: Option<String>,
    /// Byte or code point symbols
    pub alphabet: Alphabet,
    /// What to do with undecodable bits at the end of a payload
    pub trailing_bits: TrailingBits,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Argon2 work parameters for password mode
    pub kdf: KdfParams,
}

impl HuffOpts {
    /// Instanciated on program start - sets default parameters
    pub fn new() -> Self {
        Self {
            op_mode: Mode::Zip,
            input: None,
            output: None,
            password: None,
            alphabet: Alphabet::Bytes,
            trailing_bits: TrailingBits::Strict,
            force_overwrite: false,
            kdf: KdfParams::default(),
        }
    }

    /// The password, if one was given and it is not empty
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    /// Where output goes: the explicit output path, or one derived from the input name.
    pub fn output_path(&self) -> Option<String> {
        if self.output.is_some() {
            return self.output.clone();
        }
        let input = self.input.as_ref()?;
        match self.op_mode {
            Mode::Zip => Some(format!("{}{}", input, SUFFIX)),
            Mode::Unzip => Some(match input.strip_suffix(SUFFIX) {
                Some(stem) if !stem.is_empty() => stem.to_string(),
                _ => format!("{}.out", input),
            }),
            Mode::Test | Mode::Json | Mode::DecodeJson => None,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for HuffOpts {
    /// Never show the password
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuffOpts")
            .field("op_mode", &self.op_mode)
            .field("input", &self.input)
            .field("output", &self.output)
            .field("password", &self.password().map(|_| "<redacted>"))
            .field("alphabet", &self.alphabet)
            .field("trailing_bits", &self.trailing_bits)
            .field("force_overwrite", &self.force_overwrite)
            .field("kdf", &self.kdf)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_output_names() {
        let mut opts = HuffOpts::new();
        opts.input = Some("notes.txt".into());
        assert_eq!(opts.output_path().as_deref(), Some("notes.txt.huf"));

        opts.op_mode = Mode::Unzip;
        opts.input = Some("notes.txt.huf".into());
        assert_eq!(opts.output_path().as_deref(), Some("notes.txt"));
        opts.input = Some("notes.bin".into());
        assert_eq!(opts.output_path().as_deref(), Some("notes.bin.out"));

        opts.output = Some("elsewhere".into());
        assert_eq!(opts.output_path().as_deref(), Some("elsewhere"));

        opts.output = None;
        opts.op_mode = Mode::Test;
        assert_eq!(opts.output_path(), None);
    }

    #[test]
    fn empty_password_means_none() {
        let mut opts = HuffOpts::new();
        opts.password = Some(String::new());
        assert_eq!(opts.password(), None);
        opts.password = Some("pw".into());
        assert_eq!(opts.password(), Some("pw"));
    }

    #[test]
    fn debug_hides_password() {
        let mut opts = HuffOpts::new();
        opts.password = Some("sw0rdfish".into());
        let shown = format!("{:?}", opts);
        assert!(!shown.contains("sw0rdfish"));
        assert!(shown.contains("<redacted>"));
    }
}
