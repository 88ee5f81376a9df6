//! Table-driven alarm state machine.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  StateTable                                                   │
//! │  ┌──────────────┬────────────────┬──────────────────┬───────┐ │
//! │  │ AlarmStatus  │ on_activated   │ on_deactivated   │latched│ │
//! │  ├──────────────┼────────────────┼──────────────────┼───────┤ │
//! │  │ NoAlarm      │ fn(ctx)->Opt<> │ fn(ctx)->Opt<>   │ no    │ │
//! │  │ PendingAlarm │ fn(ctx)->Opt<> │ fn(ctx)->Opt<>   │ no    │ │
//! │  │ Alarm        │ fn(ctx)->Opt<> │ fn(ctx)->Opt<>   │ yes   │ │
//! │  └──────────────┴────────────────┴──────────────────┴───────┘ │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sensor edges are looked up in the row for the **current** alarm status.
//! A latched row ignores sensor churn entirely; the sensor's flag is still
//! recorded by the caller.  Arming changes and camera results are not
//! per-row: they force a status from any state and are expressed as the
//! free functions [`arming_transition`] and [`image_transition`].
//!
//! The machine itself owns no status.  The repository holds the durable
//! value and the engine funnels every change through a single setter.

pub mod context;
pub mod states;

use context::AlarmContext;
use log::debug;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------

/// The system's current danger assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum AlarmStatus {
    #[default]
    NoAlarm = 0,
    PendingAlarm = 1,
    Alarm = 2,
}

impl AlarmStatus {
    /// Every status, in table order.
    pub const ALL: [Self; 3] = [Self::NoAlarm, Self::PendingAlarm, Self::Alarm];

    /// Total number of statuses, used to size the table array.
    pub const COUNT: usize = Self::ALL.len();
}

/// Whether the system is watching for intrusions and in which mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArmingStatus {
    #[default]
    Disarmed,
    ArmedHome,
    ArmedAway,
}

/// Direction of a sensor activation change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEdge {
    /// The sensor was set active (regardless of its previous flag).
    Activated,
    /// The sensor went from active to inactive.
    Deactivated,
}

// ---------------------------------------------------------------------------
// Function-pointer type alias
// ---------------------------------------------------------------------------

/// Signature of a sensor rule.  Returns `Some(next)` to request a status
/// change, or `None` to leave the status untouched.
pub type SensorRuleFn = fn(&AlarmContext) -> Option<AlarmStatus>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single alarm status.
pub struct StateDescriptor {
    pub id: AlarmStatus,
    pub name: &'static str,
    /// Sensor events never change status while in a latched state.
    pub latched: bool,
    pub on_sensor_activated: SensorRuleFn,
    pub on_sensor_deactivated: SensorRuleFn,
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

/// Owns the rule table and answers "what should the status become?".
pub struct AlarmMachine {
    /// Fixed-size table indexed by `AlarmStatus as usize`.
    table: [StateDescriptor; AlarmStatus::COUNT],
}

impl AlarmMachine {
    pub fn new(table: [StateDescriptor; AlarmStatus::COUNT]) -> Self {
        debug_assert!(
            table
                .iter()
                .enumerate()
                .all(|(idx, row)| row.id as usize == idx),
            "state table rows out of order"
        );
        Self { table }
    }

    /// Row for `status`.
    pub fn descriptor(&self, status: AlarmStatus) -> &StateDescriptor {
        &self.table[status as usize]
    }

    /// True if sensor events are ignored while in `status`.
    pub fn is_latched(&self, status: AlarmStatus) -> bool {
        self.descriptor(status).latched
    }

    /// Evaluate a sensor edge against the row for `current`.
    pub fn sensor_transition(
        &self,
        current: AlarmStatus,
        edge: SensorEdge,
        ctx: &AlarmContext,
    ) -> Option<AlarmStatus> {
        let row = self.descriptor(current);
        if row.latched {
            debug!("sensor {:?} ignored: {} is latched", edge, row.name);
            return None;
        }
        let next = match edge {
            SensorEdge::Activated => (row.on_sensor_activated)(ctx),
            SensorEdge::Deactivated => (row.on_sensor_deactivated)(ctx),
        };
        debug!("sensor {:?} in {} -> {:?}", edge, row.name, next);
        next
    }
}

impl Default for AlarmMachine {
    fn default() -> Self {
        Self::new(states::build_state_table())
    }
}

// ---------------------------------------------------------------------------
// Non-table rules
// ---------------------------------------------------------------------------

/// Status forced by an arming change, applied before sensors are reset.
///
/// Disarming always clears the alarm.  Arming in either mode escalates
/// straight to `Alarm` if the last camera frame showed a cat; otherwise the
/// status is left for the sensor reset to settle.
pub fn arming_transition(arming: ArmingStatus, cat_detected: bool) -> Option<AlarmStatus> {
    match arming {
        ArmingStatus::Disarmed => Some(AlarmStatus::NoAlarm),
        ArmingStatus::ArmedHome | ArmingStatus::ArmedAway if cat_detected => {
            Some(AlarmStatus::Alarm)
        }
        ArmingStatus::ArmedHome | ArmingStatus::ArmedAway => None,
    }
}

/// Status after a camera frame has been classified.  Always yields a value,
/// so callers re-assert the status even when it does not change.
pub fn image_transition(ctx: &AlarmContext) -> AlarmStatus {
    let cat_at_home = ctx.cat_detected && ctx.arming == ArmingStatus::ArmedHome;
    let intruder = !ctx.cat_detected && ctx.any_sensor_active;
    if cat_at_home || intruder {
        AlarmStatus::Alarm
    } else {
        AlarmStatus::NoAlarm
    }
}
