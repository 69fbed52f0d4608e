//! System configuration parameters
//!
//! Initial thresholds for the ECS. Values can be supplied as JSON; missing
//! fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::control::Thresholds;
use crate::error::{Error, Result, ThresholdError};

/// Core system configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcsConfig {
    /// Heater is commanded on strictly below this temperature
    pub lower_threshold: i32,
    /// Window is commanded open strictly above this temperature
    pub upper_threshold: i32,
}

impl Default for EcsConfig {
    fn default() -> Self {
        Self {
            lower_threshold: 25,
            upper_threshold: 28,
        }
    }
}

impl EcsConfig {
    /// Check the threshold ordering.
    pub fn validate(&self) -> core::result::Result<(), ThresholdError> {
        self.thresholds().map(|_| ())
    }

    /// The validated threshold pair described by this config.
    pub fn thresholds(&self) -> core::result::Result<Thresholds, ThresholdError> {
        Thresholds::new(self.lower_threshold, self.upper_threshold)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("Config parse failed: {}", e);
            Error::Config("malformed JSON")
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|_| Error::Config("serialisation failed"))
    }
}

impl From<Thresholds> for EcsConfig {
    fn from(t: Thresholds) -> Self {
        Self {
            lower_threshold: t.lower(),
            upper_threshold: t.upper(),
        }
    }
}
