//! Sequence and component value types.
//!
//! # Responsibility
//! - Hold parsed components exactly as they appeared in the address.
//! - Format sequences back into addresses.
//! - Define tree order (parents before children, siblings by position).
//!
//! # Invariants
//! - Components keep their original text; nothing is re-encoded here.
//! - Letter components are ordered by length, then lexically. This matches
//!   the decoded value for canonical runs and the `increment_letters` chain
//!   for any run.

use crate::engine::codec::increment_letters;
use crate::engine::split::split;
use crate::engine::{SequenceError, SequenceResult};
use crate::model::scheme::{Scheme, NUMERIC_SEPARATOR};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Representation used by one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Decimal digit run.
    Number,
    /// Lowercase letter run.
    Letters,
}

/// One tree level: the 1-based position among siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Decimal digits, e.g. `"12"`.
    Number(String),
    /// Lowercase letters, e.g. `"zb"`.
    Letters(String),
}

impl Component {
    /// First value at a level of the given kind: `1` or `a`.
    pub fn first(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Number => Self::Number("1".to_string()),
            ComponentKind::Letters => Self::Letters("a".to_string()),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Number(_) => ComponentKind::Number,
            Self::Letters(_) => ComponentKind::Letters,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(text) | Self::Letters(text) => text.as_str(),
        }
    }

    /// Parses a number component. Letter components have no decimal value
    /// here; use `decode_letters` for canonical runs.
    ///
    /// # Errors
    /// - `ComponentOverflow` when the digits do not fit in `u64`.
    /// - `InvalidComponent` for letter components.
    pub fn number_value(&self) -> SequenceResult<u64> {
        match self {
            Self::Number(text) => text
                .parse::<u64>()
                .map_err(|_| SequenceError::ComponentOverflow(text.clone())),
            Self::Letters(text) => Err(SequenceError::InvalidComponent(text.clone())),
        }
    }

    /// Next value at the same level: `n + 1` or `increment_letters`.
    ///
    /// Numbers are incremented on their decimal text, so digit runs of any
    /// length have a successor. Leading zeros are dropped (`"09"` -> `"10"`).
    pub fn successor(&self) -> Self {
        match self {
            Self::Number(text) => Self::Number(increment_digits(text)),
            Self::Letters(text) => Self::Letters(increment_letters(text)),
        }
    }

    fn is_well_formed(&self) -> bool {
        match self {
            Self::Number(text) => !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()),
            Self::Letters(text) => !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase()),
        }
    }
}

/// Adds one to a decimal digit run.
fn increment_digits(digits: &str) -> String {
    let mut next = digits.trim_start_matches('0').as_bytes().to_vec();
    let mut carry = true;
    for digit in next.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        next.insert(0, b'1');
    }
    next.into_iter().map(char::from).collect()
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => {
                let left_digits = left.trim_start_matches('0');
                let right_digits = right.trim_start_matches('0');
                left_digits
                    .len()
                    .cmp(&right_digits.len())
                    .then_with(|| left_digits.cmp(right_digits))
                    .then_with(|| left.cmp(right))
            }
            (Self::Letters(left), Self::Letters(right)) => {
                left.len().cmp(&right.len()).then_with(|| left.cmp(right))
            }
            (Self::Number(_), Self::Letters(_)) => Ordering::Less,
            (Self::Letters(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed address: ordered components, root level first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    scheme: Scheme,
    components: Vec<Component>,
}

impl Sequence {
    /// Parses an address under `scheme`.
    pub fn parse(scheme: Scheme, address: &str) -> SequenceResult<Self> {
        split(scheme, address)
    }

    /// Builds a sequence from components, checking the scheme's typing rules.
    ///
    /// # Errors
    /// - `MalformedSequence` when `components` is empty, a component is not a
    ///   valid digit/letter run, or kinds break the depth-parity rule.
    pub fn new(scheme: Scheme, components: Vec<Component>) -> SequenceResult<Self> {
        let candidate = Self::from_checked(scheme, components);
        if candidate.components.is_empty() {
            return Err(SequenceError::malformed("", "sequence has no components"));
        }
        for (index, component) in candidate.components.iter().enumerate() {
            if !component.is_well_formed() {
                return Err(SequenceError::malformed(
                    candidate.to_address(),
                    format!("component `{component}` is not a valid run"),
                ));
            }
            if component.kind() != scheme.kind_at(index) {
                return Err(SequenceError::malformed(
                    candidate.to_address(),
                    format!("component `{component}` has the wrong kind at depth {index}"),
                ));
            }
        }
        Ok(candidate)
    }

    /// Wraps components the splitter or allocator already validated.
    pub(crate) fn from_checked(scheme: Scheme, components: Vec<Component>) -> Self {
        Self { scheme, components }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Component texts in order, e.g. `["1", "za", "5"]`.
    pub fn component_strs(&self) -> Vec<&str> {
        self.components.iter().map(Component::as_str).collect()
    }

    /// Number of levels; `1` for roots.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    pub fn is_root(&self) -> bool {
        self.components.len() == 1
    }

    pub fn last(&self) -> &Component {
        // `new`/`from_checked` callers never produce empty sequences.
        &self.components[self.components.len() - 1]
    }

    /// Parent sequence, or `None` for roots.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let prefix = self.components[..self.components.len() - 1].to_vec();
        Some(Self::from_checked(self.scheme, prefix))
    }

    /// Returns whether `self` is a strict prefix of `other`.
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.scheme == other.scheme
            && other.components.len() > self.components.len()
            && other.components.starts_with(&self.components)
    }

    /// Appends one level.
    pub(crate) fn with_child(&self, component: Component) -> Self {
        let mut components = self.components.clone();
        components.push(component);
        Self::from_checked(self.scheme, components)
    }

    /// Replaces the deepest level.
    pub(crate) fn with_last(&self, component: Component) -> Self {
        let mut components = self.components.clone();
        let last = components.len() - 1;
        components[last] = component;
        Self::from_checked(self.scheme, components)
    }

    /// Formats the canonical address string.
    pub fn to_address(&self) -> String {
        match self.scheme {
            Scheme::Numeric => {
                let separator = NUMERIC_SEPARATOR.to_string();
                self.component_strs().join(separator.as_str())
            }
            Scheme::Alphanumeric => self.component_strs().concat(),
        }
    }
}

impl Ord for Sequence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components
            .cmp(&other.components)
            .then_with(|| self.scheme.as_str().cmp(other.scheme.as_str()))
    }
}

impl PartialOrd for Sequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_address().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Component, Sequence};
    use crate::engine::SequenceError;
    use crate::model::scheme::Scheme;

    fn number(text: &str) -> Component {
        Component::Number(text.to_string())
    }

    fn letters(text: &str) -> Component {
        Component::Letters(text.to_string())
    }

    #[test]
    fn numbers_compare_by_value_not_text() {
        assert!(number("9") < number("10"));
        assert!(number("2") > number("1"));
        assert!(number("01") != number("1"));
    }

    #[test]
    fn letters_compare_by_length_then_text() {
        assert!(letters("z") < letters("za"));
        assert!(letters("b") < letters("c"));
        assert!(letters("zz") > letters("zb"));
    }

    #[test]
    fn successor_handles_both_kinds() {
        assert_eq!(number("9").successor(), number("10"));
        assert_eq!(number("41").successor(), number("42"));
        assert_eq!(letters("z").successor(), letters("za"));
    }

    #[test]
    fn number_successor_has_no_upper_bound() {
        let max = number(&u64::MAX.to_string());
        assert_eq!(max.successor(), number("18446744073709551616"));
        assert_eq!(
            number("99999999999999999999").successor(),
            number("100000000000000000000")
        );
        assert_eq!(number("0").successor(), number("1"));
        assert_eq!(number("009").successor(), number("10"));
    }

    #[test]
    fn number_value_reports_overflow_for_huge_runs() {
        assert_eq!(number("0042").number_value().unwrap(), 42);
        assert_eq!(
            number("99999999999999999999").number_value().unwrap_err(),
            SequenceError::ComponentOverflow("99999999999999999999".to_string())
        );
    }

    #[test]
    fn new_accepts_numbers_beyond_u64() {
        let components = vec![number("1"), number("99999999999999999999")];
        let huge = Sequence::new(Scheme::Numeric, components).unwrap();
        assert_eq!(huge.to_address(), "1=99999999999999999999");
    }

    #[test]
    fn new_rejects_wrong_parity_and_empty() {
        assert!(Sequence::new(Scheme::Alphanumeric, vec![letters("a")]).is_err());
        assert!(Sequence::new(Scheme::Numeric, vec![number("1"), letters("a")]).is_err());
        assert!(Sequence::new(Scheme::Numeric, Vec::new()).is_err());

        let ok = Sequence::new(Scheme::Alphanumeric, vec![number("1"), letters("b")]).unwrap();
        assert_eq!(ok.to_address(), "1b");
    }

    #[test]
    fn parent_strips_last_level() {
        let sequence = Sequence::parse(Scheme::Numeric, "1=2=3").unwrap();
        let parent = sequence.parent().unwrap();
        assert_eq!(parent.to_address(), "1=2");
        assert!(parent.is_ancestor_of(&sequence));
        assert!(!sequence.is_ancestor_of(&parent));
        assert_eq!(parent.parent().unwrap().parent(), None);
    }
}
