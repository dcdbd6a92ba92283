//! Command implementations
//!
//! One module per CLI subcommand.

mod simple;

pub use simple::{PrintSink, run_simple};
