//! Note files on disk.
//!
//! # Responsibility
//! - Parse and rebuild Denote-style note file names.
//! - Harvest signature candidates from a notes directory.
//! - Claim a freshly allocated file name without racing other writers.
//!
//! # Invariants
//! - The engine never sees paths; only signature strings cross over.
//! - New note files are created with create-new semantics.

use crate::engine::SequenceError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod claim;
pub mod file_name;
pub mod scan;

pub use claim::{
    allocate_and_claim, claim_note_file, AllocationRequest, ClaimedNote, DEFAULT_CLAIM_ATTEMPTS,
};
pub use file_name::NoteFileName;
pub use scan::{load_collection, scan_notes, scan_signatures, ScannedNote};

/// Result type used by vault operations.
pub type VaultResult<T> = Result<T, VaultError>;

#[derive(Debug)]
pub enum VaultError {
    /// File-system failure for a specific path.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Target file name is already taken.
    AlreadyExists(PathBuf),
    /// Allocation failed inside the engine.
    Sequence(SequenceError),
    /// Every claim attempt collided with a concurrent writer.
    ClaimExhausted { attempts: usize },
}

impl VaultError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for VaultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::AlreadyExists(path) => write!(f, "note file already exists: {}", path.display()),
            Self::Sequence(err) => write!(f, "{err}"),
            Self::ClaimExhausted { attempts } => write!(
                f,
                "could not claim a free note file name after {attempts} attempts"
            ),
        }
    }
}

impl Error for VaultError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Sequence(err) => Some(err),
            Self::AlreadyExists(_) | Self::ClaimExhausted { .. } => None,
        }
    }
}

impl From<SequenceError> for VaultError {
    fn from(value: SequenceError) -> Self {
        Self::Sequence(value)
    }
}
