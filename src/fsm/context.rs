//! Read-only inputs consulted by every transition rule.
//!
//! `AlarmContext` is assembled by the engine from the repository and its own
//! transient cat-detection flag immediately before a rule runs.  Rules never
//! mutate it; they only return the status they want entered.

use super::ArmingStatus;

/// A point-in-time view of everything an alarm rule may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmContext {
    /// Current arming mode.
    pub arming: ArmingStatus,
    /// True if at least one sensor is active, per the repository aggregate.
    pub any_sensor_active: bool,
    /// Result of the most recently processed camera image.
    pub cat_detected: bool,
}

impl AlarmContext {
    pub fn new(arming: ArmingStatus, any_sensor_active: bool, cat_detected: bool) -> Self {
        Self {
            arming,
            any_sensor_active,
            cat_detected,
        }
    }

    /// Whether the system is watching for intrusions in any mode.
    pub fn is_armed(&self) -> bool {
        self.arming != ArmingStatus::Disarmed
    }
}

impl Default for AlarmContext {
    fn default() -> Self {
        Self::new(ArmingStatus::Disarmed, false, false)
    }
}
