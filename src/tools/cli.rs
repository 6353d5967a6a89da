use clap::Parser;
use log::{info, warn};

use super::options::{HuffOpts, Mode};
use crate::bitstream::bitreader::TrailingBits;
use crate::tools::symbol_map::Alphabet;

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A password protected huffman file compressor",
    long_about = "
    Builds a huffman code for the input, stores the encoded bits and the code table in a
    text container, and seals that container with AES-256-GCM when a password is given.
    The key is derived from the password with Argon2id.

    When more than one mode flag is given, --decode-json wins over --json, which wins
    over --test, which wins over --decompress."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input file (default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Test compressed file integrity
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Print the code table and encoded bits as JSON instead of writing a container
    #[clap(short = 'j', long = "json")]
    json: bool,

    /// Decode a JSON file holding encodedData and codes, printing decodedData
    #[clap(long = "decode-json")]
    decode_json: bool,

    /// Output file name
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Password for sealing or opening the container
    #[clap(short = 'p', long = "password")]
    password: Option<String>,

    /// Use Unicode code points as symbols instead of bytes
    #[clap(short = 'u', long = "unicode")]
    unicode: bool,

    /// Drop undecodable trailing bits instead of failing
    #[clap(long = "lenient")]
    lenient: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Sets verbosity. -v1 shows very little, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Parse the command line, set the log level and return the options for this run.
pub fn init_opts() -> HuffOpts {
    let args = Args::parse();
    set_log_level(args.v);
    let opts = opts_from_args(args);

    // Below we report initialization status to the user
    info!("---- hufflock Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.input {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("No input file given"),
    }
    info!("Alphabet set to {}", opts.alphabet);
    if opts.password().is_some() {
        info!("Password mode on")
    };
    if opts.trailing_bits == TrailingBits::Lenient {
        info!("Trailing bits will be dropped")
    };
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- hufflock Initialization End ----");
    opts
}

/// Put command line information from CLAP into our internal structure.
pub fn opts_from_args(args: Args) -> HuffOpts {
    let mut opts = HuffOpts::new();

    opts.op_mode = if args.decode_json {
        Mode::DecodeJson
    } else if args.json {
        Mode::Json
    } else if args.test {
        Mode::Test
    } else if args.decompress {
        Mode::Unzip
    } else {
        Mode::Zip
    };

    opts.input = args.filename;
    opts.output = args.output;
    opts.password = args.password;
    if args.unicode {
        opts.alphabet = Alphabet::CodePoints
    };
    if args.lenient {
        opts.trailing_bits = TrailingBits::Lenient
    };
    opts.force_overwrite = args.force;
    opts
}

/// Set the log level
fn set_log_level(v: u8) {
    match v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(argv: &[&str]) -> HuffOpts {
        opts_from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_to_compress() {
        let opts = parse(&["hufflock", "notes.txt"]);
        assert_eq!(opts.op_mode, Mode::Zip);
        assert_eq!(opts.input.as_deref(), Some("notes.txt"));
        assert_eq!(opts.alphabet, Alphabet::Bytes);
        assert_eq!(opts.trailing_bits, TrailingBits::Strict);
        assert!(!opts.force_overwrite);
    }

    #[test]
    fn decompress_flags() {
        let opts = parse(&[
            "hufflock", "-d", "-p", "secret", "-o", "out.txt", "-u", "--lenient", "-f",
            "notes.huf",
        ]);
        assert_eq!(opts.op_mode, Mode::Unzip);
        assert_eq!(opts.password(), Some("secret"));
        assert_eq!(opts.output.as_deref(), Some("out.txt"));
        assert_eq!(opts.alphabet, Alphabet::CodePoints);
        assert_eq!(opts.trailing_bits, TrailingBits::Lenient);
        assert!(opts.force_overwrite);
    }

    #[test]
    fn mode_precedence() {
        assert_eq!(parse(&["hufflock", "-t", "-d", "x"]).op_mode, Mode::Test);
        assert_eq!(parse(&["hufflock", "-j", "-t", "x"]).op_mode, Mode::Json);
        assert_eq!(
            parse(&["hufflock", "--decode-json", "-j", "x"]).op_mode,
            Mode::DecodeJson
        );
    }

    #[test]
    fn verbosity_takes_a_value() {
        let args = Args::try_parse_from(["hufflock", "-v", "5", "x"]).unwrap();
        assert_eq!(args.v, 5);
        let args = Args::try_parse_from(["hufflock", "x"]).unwrap();
        assert_eq!(args.v, 3);
    }
}
