//! mxgen -- turn an HTML file into an mxoxide component function.
//!
//! Reads markup from a file (or stdin with `-`), and prints the Rust source
//! of a function that renders the same element tree:
//!
//! ```text
//! mxgen --in card.html --name Card > src/components/card.rs
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use mxoxide::codegen::{generate, GenerateOptions};
use mxoxide::GenerateError;

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// mxgen -- convert HTML into an mxoxide component function.
#[derive(Parser, Debug)]
#[command(name = "mxgen", version, about, long_about = None)]
struct Cli {
    /// HTML input file (use `-` for stdin).
    #[arg(long = "in", value_name = "FILE")]
    input: String,

    /// Component name; becomes the snake_case function name.
    #[arg(long, default_value = "Component")]
    name: String,

    /// Treat the input as a body fragment rather than a full document.
    #[arg(long)]
    fragment: bool,

    /// Path used for `Node` and `Attr` in the generated code.
    #[arg(long, value_name = "PATH", default_value = "mxoxide")]
    crate_path: String,

    /// Save output to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    out: Option<String>,

    /// Log parser recoveries and progress to stderr.
    #[arg(long)]
    verbose: bool,
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

const EXIT_SUCCESS: u8 = 0;
const EXIT_USAGE_ERROR: u8 = 1;
const EXIT_IO_ERROR: u8 = 2;

// ---------------------------------------------------------------------------
// Main entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(GenerateError::InvalidName(name)) => {
            log::error!("invalid component name {name:?}");
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(GenerateError::Io(e)) => {
            log::error!("{e}");
            ExitCode::from(EXIT_IO_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<(), GenerateError> {
    let html = read_input(&cli.input).map_err(|e| {
        log::error!("{}: failed to read", cli.input);
        e
    })?;
    log::debug!("read {} bytes from {}", html.len(), cli.input);

    let options = GenerateOptions::default()
        .fragment(cli.fragment)
        .crate_path(&cli.crate_path);
    let source = generate(&html, &cli.name, &options)?;

    write_output(cli, &source)?;
    log::debug!("generated component {:?}", cli.name);
    Ok(())
}

// ---------------------------------------------------------------------------
// I/O
// ---------------------------------------------------------------------------

/// Reads the input file, or stdin when the name is `-`.
fn read_input(filename: &str) -> io::Result<String> {
    if filename == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(filename)
    }
}

/// Writes the generated source to `--out` or stdout.
fn write_output(cli: &Cli, content: &str) -> io::Result<()> {
    if let Some(ref output_file) = cli.out {
        fs::write(output_file, content).map_err(|e| {
            log::error!("{output_file}: failed to write");
            e
        })
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        // Flush stdout to ensure output is complete, especially when piped.
        stdout.flush()
    }
}
