//! Sequence domain model.
//!
//! # Responsibility
//! - Define the value types shared by the engine, vault and service layers.
//! - Own address formatting and tree ordering of sequences.
//!
//! # Invariants
//! - A `Sequence` is never empty.
//! - Component kinds follow the scheme's depth-parity rule.

pub mod scheme;
pub mod sequence;
