//! CLI error type and process exit.
//!
//! Every failure is printed to stderr as `error: <message>` and the process
//! exits with status 1.

use seqnote_core::{ConfigError, LoggingError, SequenceError, VaultError};
use std::fmt;
use std::process;

pub const EXIT_ERROR: i32 = 1;

pub type CliResult<T> = Result<T, CliError>;

/// Unified error type for CLI commands.
pub enum CliError {
    Sequence(SequenceError),
    Vault(VaultError),
    Config(ConfigError),
    Logging(LoggingError),
    /// Argument combinations clap cannot express.
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Sequence(e) => write!(f, "error: {e}"),
            CliError::Vault(e) => write!(f, "error: {e}"),
            CliError::Config(e) => write!(f, "error: {e}"),
            CliError::Logging(e) => write!(f, "error: {e}"),
            CliError::Usage(msg) => write!(f, "error: {msg}"),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<SequenceError> for CliError {
    fn from(e: SequenceError) -> Self {
        CliError::Sequence(e)
    }
}

impl From<VaultError> for CliError {
    fn from(e: VaultError) -> Self {
        CliError::Vault(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e)
    }
}

pub fn exit_with_error(error: CliError) -> ! {
    eprintln!("{error}");
    process::exit(EXIT_ERROR);
}
