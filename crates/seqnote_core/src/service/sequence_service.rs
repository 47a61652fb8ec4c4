//! Sequence use-case service.
//!
//! # Responsibility
//! - Bundle engine calls behind one scheme chosen at construction.
//! - Emit allocation events for diagnostics.
//!
//! # Invariants
//! - The service holds no collection; every call works on the snapshot it
//!   is given.

use crate::config::SequenceConfig;
use crate::engine::allocator::{new_child, new_root, new_sibling};
use crate::engine::collection::SequenceCollection;
use crate::engine::convert::convert;
use crate::engine::split::split;
use crate::engine::SequenceResult;
use crate::model::scheme::Scheme;
use crate::model::sequence::Sequence;
use log::{info, warn};

/// Scheme-bound facade over the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceService {
    scheme: Scheme,
}

impl SequenceService {
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }

    pub fn from_config(config: &SequenceConfig) -> Self {
        Self::new(config.scheme)
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn split(&self, address: &str) -> SequenceResult<Sequence> {
        split(self.scheme, address)
    }

    /// Converts an address written in this service's scheme into the other
    /// scheme.
    pub fn convert(&self, address: &str) -> SequenceResult<String> {
        convert(address, self.scheme.other())
    }

    pub fn build_collection<I, S>(&self, candidates: I) -> SequenceCollection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SequenceCollection::build(self.scheme, candidates)
    }

    pub fn new_child(&self, target: &str, collection: &SequenceCollection) -> SequenceResult<String> {
        let result = new_child(target, collection, self.scheme);
        self.log_allocation("child", Some(target), &result);
        result
    }

    pub fn new_sibling(
        &self,
        target: &str,
        collection: &SequenceCollection,
    ) -> SequenceResult<String> {
        let result = new_sibling(target, collection, self.scheme);
        self.log_allocation("sibling", Some(target), &result);
        result
    }

    pub fn new_root(&self, collection: &SequenceCollection) -> SequenceResult<String> {
        let result = new_root(collection, self.scheme);
        self.log_allocation("root", None, &result);
        result
    }

    fn log_allocation(&self, kind: &str, target: Option<&str>, result: &SequenceResult<String>) {
        let target = target.unwrap_or("-");
        match result {
            Ok(address) => info!(
                "event=sequence_allocate module=sequence status=ok kind={} scheme={} target={} address={}",
                kind, self.scheme, target, address
            ),
            Err(err) => warn!(
                "event=sequence_allocate module=sequence status=error kind={} scheme={} target={} error={}",
                kind, self.scheme, target, err
            ),
        }
    }
}
