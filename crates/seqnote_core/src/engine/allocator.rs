//! Next-address allocation.
//!
//! # Responsibility
//! - Compute the next free child, sibling or root address.
//!
//! # Invariants
//! - The new component is always the successor of the current maximum at
//!   that level (or the level's first value); gaps are never reused.
//! - Targets must already exist in the collection.
//! - Results depend only on `(target, collection, scheme)`.

use super::split::split;
use super::{SequenceError, SequenceResult};
use crate::engine::collection::SequenceCollection;
use crate::model::scheme::Scheme;
use crate::model::sequence::{Component, Sequence};

/// Returns the next unused child address of `target`.
///
/// # Errors
/// - `MalformedSequence` when `target` does not parse under `scheme`.
/// - `UnknownSequence` when `target` is not in `collection`.
/// - `SchemeMismatch` when `collection` was built under another scheme.
pub fn new_child(
    target: &str,
    collection: &SequenceCollection,
    scheme: Scheme,
) -> SequenceResult<String> {
    let target = resolve_target(target, collection, scheme)?;
    let next = next_component(collection, target.components())?;
    Ok(target.with_child(next).to_address())
}

/// Returns the next unused sibling address of `target`.
///
/// Errors as for [`new_child`].
pub fn new_sibling(
    target: &str,
    collection: &SequenceCollection,
    scheme: Scheme,
) -> SequenceResult<String> {
    let target = resolve_target(target, collection, scheme)?;
    let parent = &target.components()[..target.depth() - 1];
    let next = next_component(collection, parent)?;
    Ok(target.with_last(next).to_address())
}

/// Returns the next unused root address (`1` for an empty collection).
pub fn new_root(collection: &SequenceCollection, scheme: Scheme) -> SequenceResult<String> {
    ensure_scheme(collection, scheme)?;
    let next = next_component(collection, &[])?;
    Ok(Sequence::from_checked(scheme, vec![next]).to_address())
}

fn resolve_target(
    target: &str,
    collection: &SequenceCollection,
    scheme: Scheme,
) -> SequenceResult<Sequence> {
    ensure_scheme(collection, scheme)?;
    let sequence = split(scheme, target)?;
    if !collection.contains(&sequence) {
        return Err(SequenceError::UnknownSequence(target.to_string()));
    }
    Ok(sequence)
}

fn ensure_scheme(collection: &SequenceCollection, scheme: Scheme) -> SequenceResult<()> {
    if collection.scheme() != scheme {
        return Err(SequenceError::SchemeMismatch {
            expected: scheme,
            actual: collection.scheme(),
        });
    }
    Ok(())
}

fn next_component(
    collection: &SequenceCollection,
    prefix: &[Component],
) -> SequenceResult<Component> {
    match collection.child_components(prefix).max() {
        Some(current_max) => Ok(current_max.successor()),
        None => Ok(Component::first(collection.scheme().kind_at(prefix.len()))),
    }
}
