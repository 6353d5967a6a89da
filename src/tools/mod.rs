//! The tools module provides the helpers around the compression core.
//!
//! The tools are:
//! - cli: Command line interface.
//! - data_io: Read the whole input file and write the output file.
//! - freq_count: Frequency count of the input symbols.
//! - options: Settings for one run of the program.
//! - report: JSON views of compression results and JSON decode requests.
//! - symbol_map: The byte and code point alphabets, and the line feed sentinel.
//!
pub mod cli;
pub mod data_io;
pub mod freq_count;
pub mod options;
pub mod report;
pub mod symbol_map;
