//! System configuration parameters
//!
//! Tunables for the decision engine and the initial contents of the
//! in-process repository.  Loaded from JSON; every field is range-checked
//! before use and invalid values are rejected, not clamped.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fsm::ArmingStatus;
use crate::sensors::{SENSOR_NAME_CAP, SensorType};

/// One sensor to create at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSeed {
    pub name: String,
    pub sensor_type: SensorType,
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    // --- Camera ---
    /// Minimum classifier confidence (percent, 0-100) to count a cat
    pub cat_confidence_threshold: f32,

    // --- Startup state ---
    /// Arming mode the repository starts in
    pub initial_arming_status: ArmingStatus,
    /// Sensors registered at startup, assigned ids in list order
    pub sensors: Vec<SensorSeed>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cat_confidence_threshold: 50.0,
            initial_arming_status: ArmingStatus::Disarmed,
            sensors: Vec::new(),
        }
    }
}

impl SecurityConfig {
    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Range-check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.cat_confidence_threshold) {
            return Err(ConfigError::ValidationFailed(
                "cat_confidence_threshold must be 0–100",
            ));
        }
        if self.sensors.iter().any(|s| s.name.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed("sensor names must not be empty"));
        }
        if self.sensors.iter().any(|s| s.name.trim().len() > SENSOR_NAME_CAP) {
            return Err(ConfigError::ValidationFailed(
                "sensor names must fit in 32 bytes",
            ));
        }
        Ok(())
    }
}
