//! Engine settings: solar search tunables, term-calendar proximity and the
//! log filter, loaded from an optional TOML file.

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{DEFAULT_LOG_FILTER, EngineSettings, LoggingSettings, SolarTermsSettings};
