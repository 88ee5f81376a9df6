//! Inbound commands to the decision engine.
//!
//! These represent actions requested by the outside world (control panel,
//! remote app, automation) that address sensors by id rather than holding a
//! [`Sensor`] value.  The [`AlarmDecisionEngine`](super::service::AlarmDecisionEngine)
//! resolves ids against the repository and forwards to the matching
//! operation.  Camera frames are not commands; they go through
//! `process_image` directly.

use crate::fsm::ArmingStatus;
use crate::sensors::{Sensor, SensorId};

/// Commands that external adapters can send into the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SecurityCommand {
    /// Change the arming mode.
    SetArmingStatus(ArmingStatus),

    /// Set the active flag of a known sensor.
    ChangeSensorActivation { id: SensorId, active: bool },

    /// Register a new sensor.
    AddSensor(Sensor),

    /// Forget a known sensor.
    RemoveSensor(SensorId),
}
