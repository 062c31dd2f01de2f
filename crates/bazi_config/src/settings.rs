//! Engine settings loaded from TOML.
//!
//! Every section and key is optional:
//!
//! ```toml
//! [solar_search]
//! max_iterations = 50
//! tolerance_deg = 1e-4
//! mean_motion_deg_per_day = 0.98565
//!
//! [solar_terms]
//! proximity_hours = 12.0
//!
//! [logging]
//! filter = "bazi=info"
//! ```

use std::path::Path;

use bazi_solar::{SolarSearchConfig, SolarTermCalendar};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "bazi=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarTermsSettings {
    /// Half-width of the "on a term" window, in hours.
    pub proximity_hours: f64,
}

impl Default for SolarTermsSettings {
    fn default() -> Self {
        Self {
            proximity_hours: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// All tunables of the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    pub solar_search: SolarSearchConfig,
    pub solar_terms: SolarTermsSettings,
    pub logging: LoggingSettings,
}

impl EngineSettings {
    /// Read and validate settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solar_search.validate().map_err(ConfigError::Invalid)?;
        let hours = self.solar_terms.proximity_hours;
        if !hours.is_finite() || hours <= 0.0 {
            return Err(ConfigError::Invalid("proximity_hours must be positive"));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging filter must not be empty"));
        }
        Ok(())
    }

    pub fn solar_search_config(&self) -> SolarSearchConfig {
        self.solar_search
    }

    /// Term calendar built from the search and proximity settings.
    pub fn solar_term_calendar(&self) -> Result<SolarTermCalendar, ConfigError> {
        Ok(SolarTermCalendar::new(
            self.solar_search,
            self.solar_terms.proximity_hours,
        )?)
    }
}
