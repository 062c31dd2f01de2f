//! Error types for settings loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_solar::SolarError;

/// Errors from reading, parsing or validating engine settings.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Settings file could not be read.
    Io(String),
    /// TOML syntax or schema error.
    Toml(String),
    /// A value is out of its allowed range.
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Toml(msg) => write!(f, "TOML error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e.to_string())
    }
}

impl From<SolarError> for ConfigError {
    fn from(e: SolarError) -> Self {
        match e {
            SolarError::InvalidConfig(msg) => Self::Invalid(msg),
            _ => Self::Invalid("solar configuration rejected"),
        }
    }
}
