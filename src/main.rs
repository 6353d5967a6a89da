//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use hufflock::compression::compress::compress_file;
use hufflock::compression::decompress::{decompress_file, test_file};
use hufflock::tools::cli::init_opts;
use hufflock::tools::options::Mode;
use hufflock::tools::report::{compress_json, decode_json};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace. The command line narrows it.
    // Logs go to stderr so JSON output on stdout stays clean.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger was already initialized");
    }

    let opts = init_opts();

    //----- Figure how what we need to do and go do it
    let result = match opts.op_mode {
        Mode::Zip => compress_file(&opts),
        Mode::Unzip => decompress_file(&opts),
        Mode::Test => test_file(&opts),
        Mode::Json => compress_json(&opts),
        Mode::DecodeJson => decode_json(&opts),
    };

    match result {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
