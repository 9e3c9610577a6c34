//! This is the command line tool that loads an input file and either encodes
//! or decodes it with the selected algorithm.

extern crate clap;
extern crate env_logger;
extern crate log;

use arbcompress::lz::{LZ78Decoder, LZ78Encoder};
use arbcompress::pipeline::{BlockPipelineDecoder, BlockPipelineEncoder};
use arbcompress::rle::{RunLengthDecoder, RunLengthEncoder};
use arbcompress::utils::signatures::{
    BWT_EXTENSION, LZ_EXTENSION, RLE_EXTENSION,
};
use arbcompress::{Context, Decoder, Encoder, DEFAULT_BLOCK_SIZE};
use clap::{value_parser, Arg, ArgAction, Command};

use std::process::ExitCode;
use std::{fs, time::Instant};

/// The algorithms that the tool can select.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Lz,
    Bwt,
    Rle,
}

impl Mode {
    fn parse(name: &str) -> Self {
        match name {
            "bwt" => Mode::Bwt,
            "rle" => Mode::Rle,
            _ => Mode::Lz,
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            Mode::Lz => LZ_EXTENSION,
            Mode::Bwt => BWT_EXTENSION,
            Mode::Rle => RLE_EXTENSION,
        }
    }
}

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Operation completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

fn handle_buffers(
    is_compress: bool,
    mode: Mode,
    ctx: Context,
    input: &[u8],
    output: &mut Vec<u8>,
) -> arbcompress::Result<(usize, usize)> {
    if is_compress {
        log::info!("Encoding using the {:?} algorithm", mode);
        let written = match mode {
            Mode::Lz => LZ78Encoder::new(input, output, ctx).encode()?,
            Mode::Bwt => BlockPipelineEncoder::new(input, output, ctx).encode()?,
            Mode::Rle => RunLengthEncoder::new(input, output, ctx).encode()?,
        };
        return Ok((input.len(), written));
    }

    log::info!("Decoding using the {:?} algorithm", mode);
    match mode {
        Mode::Lz => LZ78Decoder::new(input, output).decode(),
        Mode::Bwt => BlockPipelineDecoder::new(input, output).decode(),
        Mode::Rle => RunLengthDecoder::new(input, output).decode(),
    }
}

/// Come up with an output file name for 'input_path'.
fn output_path(input_path: &str, mode: Mode, is_compress: bool) -> String {
    let ext = mode.extension();
    if is_compress {
        return input_path.to_string() + ext;
    }
    match input_path.strip_suffix(ext) {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => input_path.to_string() + ".out",
    }
}

fn main() -> ExitCode {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("checked")
                .long("check")
                .help("Decode the output again and compare it to the input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("decompress")
                .short('d')
                .long("decompress")
                .help("Decode the input")
                .action(ArgAction::SetTrue)
                .conflicts_with("compress"),
        )
        .arg(
            Arg::new("compress")
                .short('c')
                .long("compress")
                .help("Encode the input")
                .conflicts_with("decompress")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path of the output file")
                .num_args(1),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("mode")
                .help("The algorithm used for encoding.")
                .value_parser(["lz", "bwt", "rle"])
                .num_args(1),
        )
        .arg(
            Arg::new("block-size")
                .long("block-size")
                .value_name("BYTES")
                .help("The number of bytes in each transformed block")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let cli_decompress = matches.get_flag("decompress");
    let cli_checked_mode = matches.get_flag("checked");
    let cli_output_path = matches.get_one::<String>("output").cloned();
    let mode = Mode::parse(
        matches
            .get_one::<String>("mode")
            .map(|x| x.as_str())
            .unwrap_or("lz"),
    );
    let block_size = matches
        .get_one::<usize>("block-size")
        .copied()
        .unwrap_or(DEFAULT_BLOCK_SIZE);
    if block_size == 0 {
        log::error!("The block size must be positive");
        return ExitCode::FAILURE;
    }
    let ctx = Context::new(block_size);

    let input_path = match matches.get_one::<String>("INPUT") {
        Some(path) => path,
        None => return ExitCode::FAILURE,
    };
    let input = match fs::read(input_path) {
        Ok(input) => input,
        Err(err) => {
            log::error!("Can't open {}: {}", input_path, err);
            return ExitCode::FAILURE;
        }
    };

    // Decode when asked to, or when the file carries the mode's extension.
    let is_compress = !cli_decompress
        && (matches.get_flag("compress")
            || !input_path.ends_with(mode.extension()));

    let out = cli_output_path
        .unwrap_or_else(|| output_path(input_path, mode, is_compress));
    let mut dest = Vec::new();
    let _timer = Timer::new();

    match handle_buffers(is_compress, mode, ctx, &input, &mut dest) {
        Ok((from, to)) => {
            log::info!("Converted {} bytes to {} bytes.", from, to);
            if is_compress && to > 0 {
                log::info!("Compression ratio is {:.4}x.", from as f64 / to as f64);
            }
        }
        Err(err) => {
            log::error!("Operation failed: {}", err);
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = fs::write(&out, &dest) {
        log::error!("Unable to write {}: {}", out, err);
        return ExitCode::FAILURE;
    }
    log::info!("Wrote {}.", out);

    if is_compress && cli_checked_mode {
        let mut decoded = Vec::new();
        if let Err(err) = handle_buffers(false, mode, ctx, &dest, &mut decoded) {
            log::error!("Could not decode the output: {}", err);
            return ExitCode::FAILURE;
        }
        if input != decoded {
            log::error!("Incorrect!");
            return ExitCode::FAILURE;
        }
        log::info!("Correct!");
    }

    ExitCode::SUCCESS
}
