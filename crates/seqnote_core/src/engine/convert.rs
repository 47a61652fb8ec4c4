//! Cross-scheme conversion.
//!
//! Odd depths switch between decimal digits and canonical letter runs; even
//! depths keep their digits untouched. Non-canonical letter runs (`"ab"`)
//! cannot be converted and fail with `InvalidComponent`.
//!
//! Leading zeros at odd depths have no letter form and are lost on the way
//! through: `1=01=2` becomes `1a2`, which converts back to `1=1=2`.

use super::codec::{decode_letters, encode_letters};
use super::split::split;
use super::SequenceResult;
use crate::model::scheme::Scheme;
use crate::model::sequence::{Component, Sequence};

/// Converts an address into `target`'s grammar.
///
/// The input is parsed under the other scheme, so `convert("1=27", Alphanumeric)`
/// reads a numeric address and returns `"1za"`.
pub fn convert(address: &str, target: Scheme) -> SequenceResult<String> {
    let sequence = split(target.other(), address)?;
    convert_sequence(&sequence, target).map(|converted| converted.to_address())
}

/// Re-expresses `sequence` under `target`, preserving every component value.
///
/// Converting to the sequence's own scheme returns a copy.
pub fn convert_sequence(sequence: &Sequence, target: Scheme) -> SequenceResult<Sequence> {
    if sequence.scheme() == target {
        return Ok(sequence.clone());
    }

    let components = sequence
        .components()
        .iter()
        .enumerate()
        .map(|(index, component)| match component {
            Component::Letters(letters) => {
                decode_letters(letters).map(|value| Component::Number(value.to_string()))
            }
            Component::Number(_) if index % 2 == 1 && target == Scheme::Alphanumeric => {
                encode_letters(component.number_value()?).map(Component::Letters)
            }
            Component::Number(digits) => Ok(Component::Number(digits.clone())),
        })
        .collect::<SequenceResult<Vec<_>>>()?;

    Ok(Sequence::from_checked(target, components))
}
