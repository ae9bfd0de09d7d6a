//! dpipe — stream a file through the deflate codec.
//!
//! `dpipe <compress|decompress> <source> <destination>`
//!
//! Exit codes: 0 success, 1 usage or unknown operation, 2 operation
//! failure (open failure, corrupt or truncated stream).

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use dpipe_core::core::{
    compress_stream, decompress_stream, ApiConfig, CompressParams, DecompressParams,
};
use dpipe_core::io::{InputSource, OutputSink};

const USAGE: &str = "Usage: dpipe <compress|decompress> <source> <destination>";

fn run(args: &[String]) -> u8 {
    if args.len() != 3 {
        eprintln!("{USAGE}");
        return 1;
    }

    let mode = args[0].as_str();
    let source = PathBuf::from(&args[1]);
    let destination = PathBuf::from(&args[2]);

    match mode {
        "compress" => match compress_stream(
            InputSource::File(source),
            OutputSink::File(destination),
            CompressParams::default(),
            ApiConfig::default(),
        ) {
            Ok(snapshot) => {
                println!(
                    "compressed {} bytes into {} bytes",
                    snapshot.bytes_read, snapshot.bytes_written
                );
                0
            }
            Err(e) => {
                eprintln!("compression failed: {e}");
                2
            }
        },
        "decompress" => match decompress_stream(
            InputSource::File(source),
            OutputSink::File(destination),
            DecompressParams,
            ApiConfig::default(),
        ) {
            Ok(snapshot) => {
                println!(
                    "decompressed {} bytes into {} bytes",
                    snapshot.bytes_read, snapshot.bytes_written
                );
                0
            }
            Err(e) => {
                eprintln!("decompression failed: {e}");
                2
            }
        },
        _ => {
            eprintln!("invalid operation: use 'compress' or 'decompress'");
            1
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    ExitCode::from(run(&args))
}
