//! Collection of existing addresses.
//!
//! # Responsibility
//! - Turn raw signature strings into the set of valid sequences.
//! - Answer outline queries (children, siblings, descendants) over it.
//!
//! # Invariants
//! - Candidates that fail to parse are dropped, never reported.
//! - Duplicates are kept as given; queries return distinct sequences.
//! - Query results are sorted in tree order.

use super::split::split;
use crate::model::scheme::Scheme;
use crate::model::sequence::{Component, Sequence};
use log::debug;
use std::collections::BTreeSet;

/// Point-in-time snapshot of every valid address under one scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCollection {
    scheme: Scheme,
    entries: Vec<Sequence>,
}

/// Builds a collection from raw candidates, dropping malformed ones.
pub fn build_collection<I, S>(scheme: Scheme, candidates: I) -> SequenceCollection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SequenceCollection::build(scheme, candidates)
}

impl SequenceCollection {
    pub fn build<I, S>(scheme: Scheme, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        let entries = candidates
            .into_iter()
            .inspect(|_| seen += 1)
            .filter_map(|candidate| split(scheme, candidate.as_ref()).ok())
            .collect::<Vec<_>>();

        debug!(
            "event=collection_build module=sequence status=ok scheme={} candidates={} accepted={}",
            scheme,
            seen,
            entries.len()
        );
        Self { scheme, entries }
    }

    /// Builds from optional candidates; `None` marks a file without a
    /// signature field.
    pub fn from_optional<I, S>(scheme: Scheme, candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        Self::build(scheme, candidates.into_iter().flatten())
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// All accepted entries in input order, duplicates included.
    pub fn entries(&self) -> &[Sequence] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.entries.iter().any(|entry| entry == sequence)
    }

    /// Last components of every entry exactly one level below `prefix`.
    ///
    /// An empty prefix yields the root components.
    pub fn child_components<'a>(
        &'a self,
        prefix: &'a [Component],
    ) -> impl Iterator<Item = &'a Component> + 'a {
        self.entries
            .iter()
            .filter(move |entry| {
                entry.depth() == prefix.len() + 1 && entry.components().starts_with(prefix)
            })
            .map(Sequence::last)
    }

    /// Distinct root sequences in tree order.
    pub fn roots(&self) -> Vec<Sequence> {
        self.distinct(|entry| entry.is_root())
    }

    /// Distinct direct children of `target` in tree order.
    pub fn children_of(&self, target: &Sequence) -> Vec<Sequence> {
        self.distinct(|entry| {
            entry.depth() == target.depth() + 1 && target.is_ancestor_of(entry)
        })
    }

    /// Distinct siblings of `target` (same parent, same depth), excluding
    /// `target` itself.
    pub fn siblings_of(&self, target: &Sequence) -> Vec<Sequence> {
        let parent = target.parent();
        self.distinct(|entry| {
            entry != target && entry.depth() == target.depth() && entry.parent() == parent
        })
    }

    /// Distinct descendants of `target` at any depth, in tree order.
    pub fn descendants_of(&self, target: &Sequence) -> Vec<Sequence> {
        self.distinct(|entry| target.is_ancestor_of(entry))
    }

    /// Every distinct entry in tree order.
    pub fn sorted(&self) -> Vec<Sequence> {
        self.distinct(|_| true)
    }

    fn distinct(&self, keep: impl Fn(&Sequence) -> bool) -> Vec<Sequence> {
        self.entries
            .iter()
            .filter(|entry| keep(entry))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
