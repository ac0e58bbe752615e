//! `sexp-cli` — read or write binary s-expressions over a pipe.
//!
//! - `read`  — decode values from a binary source, print their text form
//! - `write` — encode the example value onto a binary sink

use std::io::{self, Read, Write};

use sexp_binary::{write_value, DecoderOptions, SexpDecoder, SexpError, Value};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Payload emitted by the `write` command.
pub const EXAMPLE_TEXT: &str = "Hello world";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sexp(#[from] SexpError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("standard {0} is a terminal")]
    Terminal(&'static str),
}

/// Refuses to move binary data through an interactive terminal.
///
/// `stream` names the offending side (`"input"` or `"output"`).
pub fn ensure_binary_stream(is_terminal: bool, stream: &'static str) -> Result<(), CliError> {
    if is_terminal {
        return Err(CliError::Terminal(stream));
    }
    Ok(())
}

// ── logging ───────────────────────────────────────────────────────────────

/// Log filter for the driver: `directives` (the `RUST_LOG` value) when given,
/// otherwise everything at `default` and above.
pub fn log_filter(default: LevelFilter, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives.unwrap_or_default())
}

// ── read ──────────────────────────────────────────────────────────────────

/// Decodes one value (or, with `all`, every value) from `input` and prints
/// each on its own line. Returns how many lines were printed.
///
/// A single read of an empty stream prints `#<eof>`.
pub fn read_command<R: Read, W: Write>(
    input: R,
    output: &mut W,
    options: DecoderOptions,
    all: bool,
) -> Result<usize, CliError> {
    let decoder = SexpDecoder::with_options(options);
    let mut printed = 0;
    if all {
        for value in decoder.values(input) {
            writeln!(output, "{}", value?)?;
            printed += 1;
        }
    } else {
        let mut input = input;
        let value = decoder.read_value(&mut input)?;
        writeln!(output, "{value}")?;
        printed += 1;
    }
    output.flush()?;
    debug!(printed, "read finished");
    Ok(printed)
}

// ── write ─────────────────────────────────────────────────────────────────

pub fn example_value() -> Value {
    Value::str(EXAMPLE_TEXT)
}

/// Writes the example value in binary form and flushes `output`.
pub fn write_command<W: Write>(output: &mut W) -> Result<(), CliError> {
    let value = example_value();
    info!(%value, "writing example value");
    write_value(output, &value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_guard() {
        assert!(ensure_binary_stream(false, "input").is_ok());
        let err = ensure_binary_stream(true, "output").unwrap_err();
        assert_eq!(err.to_string(), "standard output is a terminal");
    }

    #[test]
    fn log_filter_prefers_env_directives() {
        let quiet = log_filter(LevelFilter::WARN, None);
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::WARN));

        let from_env = log_filter(LevelFilter::WARN, Some("debug"));
        assert_eq!(from_env.max_level_hint(), Some(LevelFilter::DEBUG));

        let scoped = log_filter(LevelFilter::ERROR, Some("sexp_binary=trace"));
        assert_eq!(scoped.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn example_value_is_hello_world() {
        assert_eq!(example_value(), Value::str("Hello world"));
    }
}
