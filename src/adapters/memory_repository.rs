//! In-process repository adapter.
//!
//! Implements [`SecurityRepository`] over an id-ordered map so sensor
//! iteration is stable.  The aggregate "any sensor active" flag is computed
//! from the stored sensors on every read, which keeps it consistent with the
//! individual flags by construction.
//!
//! Updating a sensor the repository has never seen stores it, so the
//! aggregate always reflects the flag the engine just acted on.  Removing
//! an absent sensor is logged and ignored.

use std::collections::BTreeMap;

use log::{info, warn};

use crate::app::ports::SecurityRepository;
use crate::config::SecurityConfig;
use crate::error::Result;
use crate::fsm::{AlarmStatus, ArmingStatus};
use crate::sensors::{Sensor, SensorId};

/// Volatile state store.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    alarm: AlarmStatus,
    arming: ArmingStatus,
    sensors: BTreeMap<SensorId, Sensor>,
}

impl InMemoryRepository {
    /// Empty store: `NoAlarm`, `Disarmed`, no sensors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from configuration.  Sensors get ids `1..=n` in list order.
    pub fn from_config(config: &SecurityConfig) -> Result<Self> {
        let mut repo = Self {
            arming: config.initial_arming_status,
            ..Self::default()
        };
        for (seed, id) in config.sensors.iter().zip(1u32..) {
            let sensor = Sensor::new(SensorId(id), &seed.name, seed.sensor_type)?;
            repo.sensors.insert(sensor.id(), sensor);
        }
        info!(
            "InMemoryRepository: {} sensors, arming={:?}",
            repo.sensors.len(),
            repo.arming
        );
        Ok(repo)
    }

    /// Next id not yet in use.
    pub fn next_sensor_id(&self) -> SensorId {
        self.sensors
            .keys()
            .next_back()
            .map_or(SensorId(1), |last| SensorId(last.0 + 1))
    }
}

impl SecurityRepository for InMemoryRepository {
    fn alarm_status(&self) -> AlarmStatus {
        self.alarm
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.alarm = status;
    }

    fn arming_status(&self) -> ArmingStatus {
        self.arming
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        self.arming = status;
    }

    fn sensors(&self) -> Vec<Sensor> {
        self.sensors.values().cloned().collect()
    }

    fn sensor(&self, id: SensorId) -> Option<Sensor> {
        self.sensors.get(&id).cloned()
    }

    fn add_sensor(&mut self, sensor: Sensor) {
        self.sensors.insert(sensor.id(), sensor);
    }

    fn remove_sensor(&mut self, sensor: &Sensor) {
        if self.sensors.remove(&sensor.id()).is_none() {
            warn!("InMemoryRepository: remove of unknown sensor {}", sensor.id());
        }
    }

    fn update_sensor(&mut self, sensor: &Sensor) {
        if self.sensors.insert(sensor.id(), sensor.clone()).is_none() {
            info!("InMemoryRepository: stored new sensor {} on update", sensor.id());
        }
    }

    fn sensors_state(&self) -> bool {
        self.sensors.values().any(Sensor::is_active)
    }
}
