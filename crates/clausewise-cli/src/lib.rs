//! Clausewise CLI library.
//!
//! Argument parsing, configuration, output formatting and the interactive
//! contract session used by the `clausewise` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::Cli;
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::{CaptureSink, Formatter, OutputSink, TableData, TerminalSink};
pub use repl::{
    parse_repl_command, Driver, Input, LineSource, ReadlineSource, ReplCommand, ScriptedInput,
    SessionOptions, SessionSummary,
};
