//! `sexp-binary` — pipe binary s-expressions through standard streams.
//!
//! Usage:
//!   sexp-binary read [--all] [--max-depth N] [--max-bytes-len N] < data.bin
//!   sexp-binary write > data.bin
//!
//! Logs go to stderr. `RUST_LOG` overrides the `-v`/`-q` level.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use clap_verbosity_flag::WarnLevel;
use sexp_binary::DecoderOptions;
use sexp_binary_cli::sexp_cli::{
    ensure_binary_stream, log_filter, read_command, write_command, CliError,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity<WarnLevel>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read binary values from stdin and print them as text
    #[command(alias = "r")]
    Read {
        /// Print every value until end of input instead of only the first
        #[arg(long, action = ArgAction::SetTrue)]
        all: bool,
        /// Maximum list nesting accepted
        #[arg(long, value_name = "LEVELS")]
        max_depth: Option<usize>,
        /// Maximum length of a single byte string, string or symbol
        #[arg(long, value_name = "BYTES")]
        max_bytes_len: Option<usize>,
    },
    /// Write an example value to stdout in binary form
    #[command(alias = "w")]
    Write,
}

fn run(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Read {
            all,
            max_depth,
            max_bytes_len,
        } => {
            ensure_binary_stream(io::stdin().is_terminal(), "input")?;
            let mut options = DecoderOptions::default();
            if let Some(depth) = max_depth {
                options = options.with_max_depth(depth);
            }
            if let Some(len) = max_bytes_len {
                options = options.with_max_bytes_len(len);
            }
            read_command(io::stdin().lock(), &mut io::stdout().lock(), options, all)?;
        }
        Commands::Write => {
            ensure_binary_stream(io::stdout().is_terminal(), "output")?;
            write_command(&mut io::stdout().lock())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level: LevelFilter = cli.verbosity.into();
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(default_level, directives.as_deref()))
        .with_writer(io::stderr)
        .init();

    match run(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "sexp-binary failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
