//! Concrete sensor rules and table builder.
//!
//! Each row is two plain `fn` pointers plus a latch flag. No closures, no
//! dynamic dispatch.
//!
//! ```text
//!  NO_ALARM ──[activated, armed]──▶ PENDING ──[activated, armed]──▶ ALARM
//!     ▲                               │                              │
//!     └──────────[deactivated]────────┘                              │
//!     ▲                                                              │
//!     └────────────────────────[disarm]──────────────────────────────┘
//!
//!  ALARM is latched: sensor edges are recorded but never move it.
//! ```

use super::context::AlarmContext;
use super::{AlarmStatus, StateDescriptor};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static rule table.  Called once per engine.
pub fn build_state_table() -> [StateDescriptor; AlarmStatus::COUNT] {
    [
        // Index 0: NoAlarm
        StateDescriptor {
            id: AlarmStatus::NoAlarm,
            name: "NoAlarm",
            latched: false,
            on_sensor_activated: no_alarm_activated,
            on_sensor_deactivated: stay,
        },
        // Index 1: PendingAlarm
        StateDescriptor {
            id: AlarmStatus::PendingAlarm,
            name: "PendingAlarm",
            latched: false,
            on_sensor_activated: pending_activated,
            on_sensor_deactivated: pending_deactivated,
        },
        // Index 2: Alarm
        StateDescriptor {
            id: AlarmStatus::Alarm,
            name: "Alarm",
            latched: true,
            on_sensor_activated: stay,
            on_sensor_deactivated: stay,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Rules
// ═══════════════════════════════════════════════════════════════════════════

fn stay(_ctx: &AlarmContext) -> Option<AlarmStatus> {
    None
}

fn no_alarm_activated(ctx: &AlarmContext) -> Option<AlarmStatus> {
    // Nothing to worry about while disarmed.
    ctx.is_armed().then_some(AlarmStatus::PendingAlarm)
}

fn pending_activated(ctx: &AlarmContext) -> Option<AlarmStatus> {
    ctx.is_armed().then_some(AlarmStatus::Alarm)
}

fn pending_deactivated(_ctx: &AlarmContext) -> Option<AlarmStatus> {
    Some(AlarmStatus::NoAlarm)
}
