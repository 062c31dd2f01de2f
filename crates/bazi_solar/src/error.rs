//! Error types for the solar-term calendar.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar search setup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Search or calendar configuration failed validation.
    InvalidConfig(&'static str),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid solar config: {msg}"),
        }
    }
}

impl Error for SolarError {}
