//! Sequence addressing engine.
//!
//! # Responsibility
//! - Parse addresses, convert them between schemes, and allocate new ones.
//! - Stay free of I/O: every entry point is a pure function of its inputs.
//!
//! # Invariants
//! - The scheme is always an explicit argument.
//! - Allocation never fills gaps; it appends after the current maximum.

use crate::model::scheme::Scheme;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod allocator;
pub mod codec;
pub mod collection;
pub mod convert;
pub mod split;

pub type SequenceResult<T> = Result<T, SequenceError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Address does not match the scheme's grammar.
    MalformedSequence { address: String, reason: String },
    /// Letter run is not canonical, or a value is outside the codec domain.
    InvalidComponent(String),
    /// Allocation target is not part of the collection.
    UnknownSequence(String),
    /// Value is too large for the requested form: a number that does not
    /// fit in `u64`, or a letter run longer than `MAX_ENCODED_LETTERS`.
    ComponentOverflow(String),
    /// Collection was built under a different scheme than the call uses.
    SchemeMismatch { expected: Scheme, actual: Scheme },
}

impl SequenceError {
    pub(crate) fn malformed(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSequence {
            address: address.into(),
            reason: reason.into(),
        }
    }
}

impl Display for SequenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedSequence { address, reason } => {
                write!(f, "malformed sequence `{address}`: {reason}")
            }
            Self::InvalidComponent(component) => {
                write!(f, "invalid sequence component `{component}`")
            }
            Self::UnknownSequence(address) => write!(f, "sequence not found: `{address}`"),
            Self::ComponentOverflow(component) => {
                write!(f, "sequence component `{component}` is out of range")
            }
            Self::SchemeMismatch { expected, actual } => write!(
                f,
                "collection uses scheme `{actual}` but the call expects `{expected}`"
            ),
        }
    }
}

impl Error for SequenceError {}
