//! Engine configuration.
//!
//! # Responsibility
//! - Load the active addressing scheme from serialized config or env.
//!
//! # Invariants
//! - Missing values fall back to `Scheme::Numeric`.
//! - Invalid values are reported, never silently replaced.

use crate::model::scheme::{ParseSchemeError, Scheme};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable holding the scheme name.
pub const SCHEME_ENV_VAR: &str = "SEQNOTE_SCHEME";

/// Configuration shared by the CLI and embedding applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Addressing scheme for every sequence in the vault.
    pub scheme: Scheme,
}

/// Errors from configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Env var set to an unsupported scheme name.
    InvalidScheme {
        source_name: &'static str,
        error: ParseSchemeError,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScheme { source_name, error } => write!(f, "{source_name}: {error}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidScheme { error, .. } => Some(error),
        }
    }
}

impl SequenceConfig {
    /// Reads `SEQNOTE_SCHEME` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(SCHEME_ENV_VAR).ok().as_deref())
    }

    /// Builds config from an already-read env value; blank means unset.
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim).filter(|value| !value.is_empty()) {
            None => Ok(Self::default()),
            Some(raw) => raw
                .parse::<Scheme>()
                .map(|scheme| Self { scheme })
                .map_err(|error| ConfigError::InvalidScheme {
                    source_name: SCHEME_ENV_VAR,
                    error,
                }),
        }
    }
}
