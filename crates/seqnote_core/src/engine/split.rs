//! Address splitting for both schemes.
//!
//! # Invariants
//! - Components keep the exact substrings of the input; joining them back
//!   with the scheme's rule reproduces the address.
//! - Digit runs have no length limit; values are never parsed here.

use super::{SequenceError, SequenceResult};
use crate::model::scheme::{Scheme, NUMERIC_SEPARATOR};
use crate::model::sequence::{Component, Sequence};

/// Splits `address` into components under `scheme`.
///
/// # Errors
/// - `MalformedSequence` on empty input, empty components, illegal
///   characters, or a leading letter run (`Alphanumeric`).
pub fn split(scheme: Scheme, address: &str) -> SequenceResult<Sequence> {
    if address.is_empty() {
        return Err(SequenceError::malformed(address, "address is empty"));
    }
    let components = match scheme {
        Scheme::Numeric => split_numeric(address)?,
        Scheme::Alphanumeric => split_alphanumeric(address)?,
    };
    Ok(Sequence::from_checked(scheme, components))
}

fn split_numeric(address: &str) -> SequenceResult<Vec<Component>> {
    address
        .split(NUMERIC_SEPARATOR)
        .map(|piece| {
            if piece.is_empty() {
                return Err(SequenceError::malformed(address, "empty component"));
            }
            if let Some(bad) = piece.chars().find(|c| !c.is_ascii_digit()) {
                return Err(SequenceError::malformed(
                    address,
                    format!("illegal character `{bad}`"),
                ));
            }
            Ok(Component::Number(piece.to_string()))
        })
        .collect()
}

fn split_alphanumeric(address: &str) -> SequenceResult<Vec<Component>> {
    let mut components = Vec::new();
    let mut run_start = 0;
    let mut run_is_digit: Option<bool> = None;

    for (offset, ch) in address.char_indices() {
        let is_digit = if ch.is_ascii_digit() {
            true
        } else if ch.is_ascii_lowercase() {
            false
        } else {
            return Err(SequenceError::malformed(
                address,
                format!("illegal character `{ch}`"),
            ));
        };

        match run_is_digit {
            None if !is_digit => {
                return Err(SequenceError::malformed(
                    address,
                    "address must start with a number",
                ));
            }
            Some(previous) if previous != is_digit => {
                components.push(run_component(&address[run_start..offset], previous));
                run_start = offset;
            }
            _ => {}
        }
        run_is_digit = Some(is_digit);
    }

    if let Some(previous) = run_is_digit {
        components.push(run_component(&address[run_start..], previous));
    }
    Ok(components)
}

fn run_component(run: &str, is_digit: bool) -> Component {
    if is_digit {
        Component::Number(run.to_string())
    } else {
        Component::Letters(run.to_string())
    }
}
