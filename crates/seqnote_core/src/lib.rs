//! Core logic for seqnote: hierarchical note addresses embedded in file
//! names, Luhmann-style (`1`, `1=1`, `1=2`, ... or `1`, `1a`, `1b`, ...).
//! This crate is the single source of truth for the address grammar and
//! allocation rules.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod service;
pub mod vault;

pub use config::{ConfigError, SequenceConfig, SCHEME_ENV_VAR};
pub use engine::allocator::{new_child, new_root, new_sibling};
pub use engine::codec::{decode_letters, encode_letters, increment_letters};
pub use engine::collection::{build_collection, SequenceCollection};
pub use engine::convert::{convert, convert_sequence};
pub use engine::split::split;
pub use engine::{SequenceError, SequenceResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::scheme::{ParseSchemeError, Scheme, NUMERIC_SEPARATOR};
pub use model::sequence::{Component, ComponentKind, Sequence};
pub use service::sequence_service::SequenceService;
pub use vault::{
    allocate_and_claim, claim_note_file, load_collection, scan_notes, scan_signatures,
    AllocationRequest, ClaimedNote, NoteFileName, ScannedNote, VaultError, VaultResult,
    DEFAULT_CLAIM_ATTEMPTS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
