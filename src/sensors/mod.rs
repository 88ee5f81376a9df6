//! Sensor model: identity, kind and the binary `active` flag.
//!
//! Sensors are plain values.  The repository holds the durable copy; the
//! [`AlarmDecisionEngine`](crate::app::service::AlarmDecisionEngine) flips
//! `active` while processing activation changes and writes the result back.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SensorError;

/// Maximum byte length of a sensor display name.
pub const SENSOR_NAME_CAP: usize = 32;

/// Fixed-capacity sensor display name.
pub type SensorName = heapless::String<SENSOR_NAME_CAP>;

/// Unique sensor identity.  Ordering is only used for stable iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SensorId(pub u32);

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of opening or space a sensor watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

/// A binary door / window / motion detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    id: SensorId,
    name: SensorName,
    sensor_type: SensorType,
    active: bool,
}

impl Sensor {
    /// Build an inactive sensor.
    ///
    /// Rejects empty names and names longer than [`SENSOR_NAME_CAP`] bytes.
    pub fn new(id: SensorId, name: &str, sensor_type: SensorType) -> Result<Self, SensorError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SensorError::EmptyName);
        }
        let mut buf = SensorName::new();
        buf.push_str(trimmed).map_err(|()| SensorError::NameTooLong {
            len: trimmed.len(),
            max: SENSOR_NAME_CAP,
        })?;
        Ok(Self {
            id,
            name: buf,
            sensor_type,
            active: false,
        })
    }

    pub fn id(&self) -> SensorId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    /// Whether the sensor is currently tripped.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} '{}' ({})",
            self.id,
            self.sensor_type,
            self.name,
            if self.active { "active" } else { "inactive" }
        )
    }
}
