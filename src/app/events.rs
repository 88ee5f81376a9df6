//! Outbound status events.
//!
//! A value form of the three [`StatusListener`] callbacks.  The engine fans
//! these out through the [`ListenerRegistry`](super::listeners::ListenerRegistry);
//! history-keeping adapters store them as-is.

use serde::{Deserialize, Serialize};

use super::ports::StatusListener;
use crate::fsm::AlarmStatus;

/// One listener notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusEvent {
    /// The alarm status was written.
    AlarmStatus(AlarmStatus),

    /// A camera frame was classified.
    CatDetected(bool),

    /// Sensor or arming state changed (no payload).
    SensorStatusChanged,
}

impl StatusEvent {
    /// Invoke the matching callback on `listener`.
    pub fn deliver(self, listener: &dyn StatusListener) {
        match self {
            Self::AlarmStatus(status) => listener.notify(status),
            Self::CatDetected(cat) => listener.cat_detected(cat),
            Self::SensorStatusChanged => listener.sensor_status_changed(),
        }
    }
}
