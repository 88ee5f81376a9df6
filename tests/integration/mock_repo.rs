//! Recording repository and scripted classifier for integration tests.
//!
//! Records every write so tests can assert on the exact call history the
//! engine produced, not just the final state.

use catpoint::app::ports::{ImageAnalyzer, SecurityRepository};
use catpoint::fsm::{AlarmStatus, ArmingStatus};
use catpoint::sensors::{Sensor, SensorId, SensorType};
use std::collections::{BTreeMap, VecDeque};

// ── Repository call record ────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum RepoCall {
    SetAlarm(AlarmStatus),
    SetArming(ArmingStatus),
    UpdateSensor { id: SensorId, active: bool },
}

// ── MockRepository ────────────────────────────────────────────

pub struct MockRepository {
    pub alarm: AlarmStatus,
    pub arming: ArmingStatus,
    pub sensors: BTreeMap<SensorId, Sensor>,
    pub calls: Vec<RepoCall>,
}

#[allow(dead_code)]
impl MockRepository {
    pub fn new(alarm: AlarmStatus, arming: ArmingStatus) -> Self {
        Self {
            alarm,
            arming,
            sensors: BTreeMap::new(),
            calls: Vec::new(),
        }
    }

    pub fn with_sensors(mut self, sensors: impl IntoIterator<Item = Sensor>) -> Self {
        for s in sensors {
            self.sensors.insert(s.id(), s);
        }
        self
    }

    /// Every alarm status written, in order.
    pub fn alarm_writes(&self) -> Vec<AlarmStatus> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RepoCall::SetAlarm(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    /// How many times `status` was written.
    pub fn times_set(&self, status: AlarmStatus) -> usize {
        self.alarm_writes().iter().filter(|s| **s == status).count()
    }

    pub fn updated_ids(&self) -> Vec<SensorId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RepoCall::UpdateSensor { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl SecurityRepository for MockRepository {
    fn alarm_status(&self) -> AlarmStatus {
        self.alarm
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.calls.push(RepoCall::SetAlarm(status));
        self.alarm = status;
    }

    fn arming_status(&self) -> ArmingStatus {
        self.arming
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        self.calls.push(RepoCall::SetArming(status));
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
        self.sensors.remove(&sensor.id());
    }

    fn update_sensor(&mut self, sensor: &Sensor) {
        self.calls.push(RepoCall::UpdateSensor {
            id: sensor.id(),
            active: sensor.is_active(),
        });
        self.sensors.insert(sensor.id(), sensor.clone());
    }

    fn sensors_state(&self) -> bool {
        self.sensors.values().any(Sensor::is_active)
    }
}

// ── ScriptedAnalyzer ──────────────────────────────────────────

/// Answers from a queue; falls back to `false` when exhausted.
pub struct ScriptedAnalyzer {
    pub verdicts: VecDeque<bool>,
    pub thresholds: Vec<f32>,
}

#[allow(dead_code)]
impl ScriptedAnalyzer {
    pub fn new(verdicts: impl IntoIterator<Item = bool>) -> Self {
        Self {
            verdicts: verdicts.into_iter().collect(),
            thresholds: Vec::new(),
        }
    }
}

impl ImageAnalyzer for ScriptedAnalyzer {
    type Image = [u8];

    fn image_contains_cat(&mut self, _image: &[u8], confidence_threshold: f32) -> bool {
        self.thresholds.push(confidence_threshold);
        self.verdicts.pop_front().unwrap_or(false)
    }
}

// ── Fixtures ──────────────────────────────────────────────────

pub fn window(id: u32) -> Sensor {
    Sensor::new(SensorId(id), &format!("Window {id}"), SensorType::Window).unwrap()
}

#[allow(dead_code)]
pub fn active(mut sensor: Sensor) -> Sensor {
    sensor.set_active(true);
    sensor
}

/// A window, a door and a motion sensor.
#[allow(dead_code)]
pub fn house() -> Vec<Sensor> {
    vec![
        Sensor::new(SensorId(1), "Living room", SensorType::Window).unwrap(),
        Sensor::new(SensorId(2), "Front door", SensorType::Door).unwrap(),
        Sensor::new(SensorId(3), "Hallway", SensorType::Motion).unwrap(),
    ]
}
