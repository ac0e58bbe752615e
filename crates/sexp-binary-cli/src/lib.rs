//! Command-line driver for the binary s-expression codec.
//!
//! The binary `sexp-binary` is a thin wrapper over [`sexp_cli`]; the command
//! functions here take generic readers and writers so they can be driven from
//! tests without touching the process's standard streams.

pub mod sexp_cli;
