//! Notes directory scanning.
//!
//! # Invariants
//! - Only regular files directly inside the directory are considered.
//! - Hidden files and non-UTF-8 names are skipped.
//! - Results are sorted by file name for deterministic output.

use super::file_name::NoteFileName;
use super::{VaultError, VaultResult};
use crate::engine::collection::SequenceCollection;
use crate::model::scheme::Scheme;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// One note file found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedNote {
    pub path: PathBuf,
    pub name: NoteFileName,
}

/// Lists note files in `dir` with their parsed names.
pub fn scan_notes(dir: &Path) -> VaultResult<Vec<ScannedNote>> {
    let entries = std::fs::read_dir(dir).map_err(|err| VaultError::io(dir, err))?;

    let mut notes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| VaultError::io(dir, err))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|err| VaultError::io(path.as_path(), err))?;
        if !file_type.is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            debug!(
                "event=vault_scan_skip module=vault reason=non_utf8 path={}",
                path.display()
            );
            continue;
        };
        if file_name.starts_with('.') {
            continue;
        }

        notes.push(ScannedNote {
            name: NoteFileName::parse(file_name.as_str()),
            path,
        });
    }

    notes.sort_by(|left, right| left.path.cmp(&right.path));
    Ok(notes)
}

/// Signature candidates for every note file; `None` when a file has none.
pub fn scan_signatures(dir: &Path) -> VaultResult<Vec<Option<String>>> {
    Ok(scan_notes(dir)?
        .into_iter()
        .map(|note| note.name.signature)
        .collect())
}

/// Scans `dir` and builds the collection of valid addresses under `scheme`.
pub fn load_collection(dir: &Path, scheme: Scheme) -> VaultResult<SequenceCollection> {
    let started_at = Instant::now();
    let candidates = scan_signatures(dir)?;
    let files = candidates.len();
    let collection = SequenceCollection::from_optional(scheme, candidates);
    info!(
        "event=vault_load module=vault status=ok scheme={} files={} sequences={} duration_ms={}",
        scheme,
        files,
        collection.len(),
        started_at.elapsed().as_millis()
    );
    Ok(collection)
}
