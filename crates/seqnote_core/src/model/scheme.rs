//! Addressing scheme selection.
//!
//! # Responsibility
//! - Name the two supported address grammars.
//! - Decide which component kind lives at a given depth.
//!
//! # Invariants
//! - `Numeric` addresses join components with `NUMERIC_SEPARATOR`.
//! - `Alphanumeric` addresses start with a number and alternate kinds.

use crate::model::sequence::ComponentKind;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Separator placed between components of a `Numeric` address.
pub const NUMERIC_SEPARATOR: char = '=';

/// Address grammar used for every sequence in one collection.
///
/// Passed explicitly to every engine call; there is no process-wide default
/// besides what `SequenceConfig` loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Every level is a decimal number, e.g. `1=1=2`.
    #[default]
    Numeric,
    /// Levels alternate number/letters, e.g. `1a2`.
    Alphanumeric,
}

impl Scheme {
    /// Stable lowercase name used in config, env and CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Alphanumeric => "alphanumeric",
        }
    }

    /// Returns the scheme a converter targets when starting from `self`.
    pub fn other(self) -> Self {
        match self {
            Self::Numeric => Self::Alphanumeric,
            Self::Alphanumeric => Self::Numeric,
        }
    }

    /// Component kind expected at 0-based `index`.
    pub fn kind_at(self, index: usize) -> ComponentKind {
        match self {
            Self::Numeric => ComponentKind::Number,
            Self::Alphanumeric if index % 2 == 0 => ComponentKind::Number,
            Self::Alphanumeric => ComponentKind::Letters,
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for scheme names that are neither `numeric` nor `alphanumeric`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSchemeError(pub String);

impl Display for ParseSchemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported sequence scheme `{}`; expected numeric|alphanumeric",
            self.0
        )
    }
}

impl Error for ParseSchemeError {}

impl FromStr for Scheme {
    type Err = ParseSchemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(Self::Numeric),
            "alphanumeric" | "alpha-numeric" => Ok(Self::Alphanumeric),
            other => Err(ParseSchemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scheme;
    use crate::model::sequence::ComponentKind;

    #[test]
    fn alphanumeric_alternates_by_depth_parity() {
        assert_eq!(Scheme::Alphanumeric.kind_at(0), ComponentKind::Number);
        assert_eq!(Scheme::Alphanumeric.kind_at(1), ComponentKind::Letters);
        assert_eq!(Scheme::Alphanumeric.kind_at(4), ComponentKind::Number);
        assert_eq!(Scheme::Numeric.kind_at(3), ComponentKind::Number);
    }

    #[test]
    fn from_str_normalizes_case_and_whitespace() {
        assert_eq!(" Numeric ".parse::<Scheme>().unwrap(), Scheme::Numeric);
        assert_eq!(
            "ALPHANUMERIC".parse::<Scheme>().unwrap(),
            Scheme::Alphanumeric
        );
        let err = "hex".parse::<Scheme>().unwrap_err();
        assert!(err.to_string().contains("hex"));
    }
}
