//! Snapshot, allocate and create as one retried step.
//!
//! Two writers can compute the same address from stale snapshots. The file
//! is created with `create_new`, so exactly one of them wins; the loser
//! re-scans and allocates again.

use super::file_name::NoteFileName;
use super::scan::load_collection;
use super::{VaultError, VaultResult};
use crate::engine::allocator::{new_child, new_root, new_sibling};
use crate::model::scheme::Scheme;
use log::{info, warn};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Attempts made by `allocate_and_claim` before giving up.
pub const DEFAULT_CLAIM_ATTEMPTS: usize = 5;

/// Which address to allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationRequest {
    Child(String),
    Sibling(String),
    Root,
}

impl AllocationRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Child(_) => "child",
            Self::Sibling(_) => "sibling",
            Self::Root => "root",
        }
    }
}

/// Successfully created note file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimedNote {
    pub address: String,
    pub path: PathBuf,
}

/// Creates an empty file `dir/file_name`, failing if it already exists.
///
/// # Errors
/// - `AlreadyExists` when the name is taken.
/// - `Io` for any other file-system failure.
pub fn claim_note_file(dir: &Path, file_name: &str) -> VaultResult<PathBuf> {
    let path = dir.join(file_name);
    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(_) => Ok(path),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Err(VaultError::AlreadyExists(path)),
        Err(err) => Err(VaultError::io(path, err)),
    }
}

/// Allocates an address per `request` and creates the note file named by
/// `template` with that signature.
///
/// Retries with a fresh scan when the file already exists, up to
/// `max_attempts` times.
///
/// # Errors
/// - `Sequence` for engine failures such as `UnknownSequence`.
/// - `ClaimExhausted` when every attempt collided.
pub fn allocate_and_claim(
    dir: &Path,
    scheme: Scheme,
    request: &AllocationRequest,
    template: &NoteFileName,
    max_attempts: usize,
) -> VaultResult<ClaimedNote> {
    for attempt in 1..=max_attempts {
        let collection = load_collection(dir, scheme)?;
        let address = match request {
            AllocationRequest::Child(target) => new_child(target, &collection, scheme)?,
            AllocationRequest::Sibling(target) => new_sibling(target, &collection, scheme)?,
            AllocationRequest::Root => new_root(&collection, scheme)?,
        };
        let file_name = template.with_signature(address.as_str()).to_string();

        match claim_note_file(dir, file_name.as_str()) {
            Ok(path) => {
                info!(
                    "event=note_claim module=vault status=ok kind={} address={} attempt={}",
                    request.kind(),
                    address,
                    attempt
                );
                return Ok(ClaimedNote { address, path });
            }
            Err(VaultError::AlreadyExists(path)) => {
                warn!(
                    "event=note_claim module=vault status=retry kind={} address={} attempt={} path={}",
                    request.kind(),
                    address,
                    attempt,
                    path.display()
                );
            }
            Err(err) => return Err(err),
        }
    }
    Err(VaultError::ClaimExhausted {
        attempts: max_attempts,
    })
}
