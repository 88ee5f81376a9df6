//! Alarm decision engine, the hexagonal core.
//!
//! [`AlarmDecisionEngine`] owns the rule table, the listener set and the
//! transient cat-detection flag.  Durable state lives behind the
//! [`SecurityRepository`] port and is read and written synchronously on
//! every call.
//!
//! ```text
//!  ImageAnalyzer ──▶ ┌─────────────────────────┐ ──▶ StatusListener(s)
//!                    │   AlarmDecisionEngine    │
//!  Repository   ◀──▶ │  rules · cat flag        │
//!                    └─────────────────────────┘
//! ```
//!
//! Every alarm-status write goes through [`AlarmDecisionEngine::set_alarm_status`],
//! so listeners observe exactly the sequence the repository stores.
//!
//! The engine is single-threaded and run-to-completion.  Hosts that share
//! it across threads must serialise every entry point behind one lock.

use std::rc::Rc;

use log::{debug, error, info};

use crate::config::SecurityConfig;
use crate::error::{Error, Result};
use crate::fsm::context::AlarmContext;
use crate::fsm::{
    AlarmMachine, AlarmStatus, ArmingStatus, SensorEdge, arming_transition, image_transition,
};
use crate::sensors::{Sensor, SensorId};

use super::commands::SecurityCommand;
use super::events::StatusEvent;
use super::listeners::ListenerRegistry;
use super::ports::{ImageAnalyzer, SecurityRepository, StatusListener};

/// Confidence (percent) a frame must reach before it counts as a cat.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 50.0;

// ───────────────────────────────────────────────────────────────
// AlarmDecisionEngine
// ───────────────────────────────────────────────────────────────

/// Decides the alarm status from arming changes, sensor edges and camera
/// verdicts, and notifies observers.
pub struct AlarmDecisionEngine<R, A> {
    repository: R,
    analyzer: A,
    machine: AlarmMachine,
    listeners: ListenerRegistry,
    /// Verdict of the most recently processed frame.  Not persisted.
    cat_detected: bool,
    confidence_threshold: f32,
}

impl<R, A> AlarmDecisionEngine<R, A>
where
    R: SecurityRepository,
    A: ImageAnalyzer,
{
    /// Wire the engine to its collaborators with the default threshold.
    pub fn new(repository: R, analyzer: A) -> Self {
        Self {
            repository,
            analyzer,
            machine: AlarmMachine::default(),
            listeners: ListenerRegistry::new(),
            cat_detected: false,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    /// Wire the engine using the tunables in `config`.
    pub fn with_config(repository: R, analyzer: A, config: &SecurityConfig) -> Self {
        let mut engine = Self::new(repository, analyzer);
        engine.confidence_threshold = config.cat_confidence_threshold;
        engine
    }

    // ── Arming ────────────────────────────────────────────────

    /// Change the arming mode.
    ///
    /// Disarming clears the alarm.  Arming escalates to `Alarm` if the last
    /// frame showed a cat, then deactivates every known sensor so the armed
    /// system starts from a clean baseline.  Ends with a
    /// `sensor_status_changed` broadcast.
    pub fn set_arming_status(&mut self, arming: ArmingStatus) {
        info!("Arming status -> {:?}", arming);

        if let Some(forced) = arming_transition(arming, self.cat_detected) {
            debug!("arming {:?} forces {:?}", arming, forced);
            self.set_alarm_status(forced);
        }

        if arming != ArmingStatus::Disarmed {
            // Work on a snapshot so the stored set is never mutated mid-walk.
            for mut sensor in self.repository.sensors() {
                self.change_sensor_activation_status(&mut sensor, false);
            }
        }

        self.repository.set_arming_status(arming);
        self.listeners.dispatch(StatusEvent::SensorStatusChanged);
    }

    // ── Camera ────────────────────────────────────────────────

    /// Classify `image` and re-decide the alarm status.
    ///
    /// Always writes a status (possibly the current one) and always
    /// broadcasts the verdict.
    pub fn process_image(&mut self, image: &A::Image) {
        let cat = self
            .analyzer
            .image_contains_cat(image, self.confidence_threshold);
        self.cat_detected = cat;

        let next = image_transition(&self.context());
        self.set_alarm_status(next);
        self.listeners.dispatch(StatusEvent::CatDetected(cat));

        debug!(
            "processed image: cat={} alarm={:?} arming={:?}",
            cat,
            self.repository.alarm_status(),
            self.repository.arming_status()
        );
    }

    // ── Sensors ───────────────────────────────────────────────

    /// Record a new active flag for `sensor` and update the alarm status.
    ///
    /// While the status is latched (`Alarm`) the flag is recorded but the
    /// status is left alone.  Deactivating an already inactive sensor never
    /// changes the status.  `sensor` is updated in place and persisted.
    pub fn change_sensor_activation_status(&mut self, sensor: &mut Sensor, active: bool) {
        let current = self.repository.alarm_status();
        let edge = match (active, sensor.is_active()) {
            (true, _) => Some(SensorEdge::Activated),
            (false, true) => Some(SensorEdge::Deactivated),
            (false, false) => None,
        };

        if let Some(edge) = edge {
            let ctx = self.context();
            if let Some(next) = self.machine.sensor_transition(current, edge, &ctx) {
                self.set_alarm_status(next);
            }
        }

        sensor.set_active(active);
        self.repository.update_sensor(sensor);
    }

    pub fn add_sensor(&mut self, sensor: Sensor) {
        info!("Adding sensor {}", sensor);
        self.repository.add_sensor(sensor);
    }

    pub fn remove_sensor(&mut self, sensor: &Sensor) {
        info!("Removing sensor {}", sensor);
        self.repository.remove_sensor(sensor);
    }

    // ── Alarm status funnel ───────────────────────────────────

    /// Persist `status` and notify every listener.  The only path through
    /// which the alarm status changes.
    pub fn set_alarm_status(&mut self, status: AlarmStatus) {
        let previous = self.repository.alarm_status();
        if previous != status {
            info!("Alarm status {:?} -> {:?}", previous, status);
        }
        self.repository.set_alarm_status(status);
        self.listeners.dispatch(StatusEvent::AlarmStatus(status));
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an id-addressed command.
    pub fn handle_command(&mut self, cmd: SecurityCommand) -> Result<()> {
        match cmd {
            SecurityCommand::SetArmingStatus(arming) => self.set_arming_status(arming),
            SecurityCommand::ChangeSensorActivation { id, active } => {
                let mut sensor = self.known_sensor(id)?;
                self.change_sensor_activation_status(&mut sensor, active);
            }
            SecurityCommand::AddSensor(sensor) => self.add_sensor(sensor),
            SecurityCommand::RemoveSensor(id) => {
                let sensor = self.known_sensor(id)?;
                self.remove_sensor(&sensor);
            }
        }
        Ok(())
    }

    // ── Listeners ─────────────────────────────────────────────

    /// Register an observer.  Registering the same handle twice is a no-op.
    pub fn add_status_listener(&mut self, listener: Rc<dyn StatusListener>) {
        self.listeners.register(listener);
    }

    /// Unregister an observer.  Unknown handles are ignored.
    pub fn remove_status_listener(&mut self, listener: &Rc<dyn StatusListener>) {
        self.listeners.unregister(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn alarm_status(&self) -> AlarmStatus {
        self.repository.alarm_status()
    }

    pub fn arming_status(&self) -> ArmingStatus {
        self.repository.arming_status()
    }

    pub fn sensors(&self) -> Vec<Sensor> {
        self.repository.sensors()
    }

    /// True if at least one sensor is active.
    pub fn sensors_state(&self) -> bool {
        self.repository.sensors_state()
    }

    /// Verdict of the most recently processed frame.
    pub fn cat_detected(&self) -> bool {
        self.cat_detected
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn analyzer_mut(&mut self) -> &mut A {
        &mut self.analyzer
    }

    // ── Internal ──────────────────────────────────────────────

    fn context(&self) -> AlarmContext {
        AlarmContext::new(
            self.repository.arming_status(),
            self.repository.sensors_state(),
            self.cat_detected,
        )
    }

    fn known_sensor(&self, id: SensorId) -> Result<Sensor> {
        self.repository.sensor(id).ok_or_else(|| {
            error!("command references unknown sensor {}", id);
            Error::UnknownSensor(id)
        })
    }
}
