//! Command-line surface.
//!
//! Global options (`--scheme`, `--log-dir`, `--log-level`) apply to every
//! subcommand. Allocation subcommands share `VaultArgs`.

use clap::{Parser, Subcommand, ValueEnum};
use seqnote_core::Scheme;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seqnote", about = "Hierarchical note addresses in file names", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Address scheme (defaults to $SEQNOTE_SCHEME, then numeric)
    #[arg(long, global = true, value_enum)]
    pub scheme: Option<SchemeArg>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level used with --log-dir
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the components of an address, one per line
    Split {
        address: String,
    },

    /// Convert an address to the other scheme
    Convert {
        address: String,

        /// Scheme to convert into
        #[arg(long, value_enum)]
        to: SchemeArg,
    },

    /// Allocate the next child address of TARGET
    Child {
        target: String,

        #[command(flatten)]
        vault: VaultArgs,
    },

    /// Allocate the next sibling address of TARGET
    Sibling {
        target: String,

        #[command(flatten)]
        vault: VaultArgs,
    },

    /// Allocate the next root address
    Root {
        #[command(flatten)]
        vault: VaultArgs,
    },

    /// Print every address in the notes directory in outline order
    Tree {
        /// Notes directory to scan
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Print the core library version
    Version,
}

#[derive(clap::Args)]
pub struct VaultArgs {
    /// Notes directory to scan
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Create a note file from this name template (signature is filled in)
    #[arg(long, value_name = "FILE_NAME")]
    pub create: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemeArg {
    Numeric,
    Alphanumeric,
}

impl From<SchemeArg> for Scheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::Numeric => Scheme::Numeric,
            SchemeArg::Alphanumeric => Scheme::Alphanumeric,
        }
    }
}
