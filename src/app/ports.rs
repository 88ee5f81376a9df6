//! Port traits: the hexagonal boundary between decision logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AlarmDecisionEngine (domain)
//! ```
//!
//! Driven adapters (state store, camera classifier, observers) implement
//! these traits.  The [`AlarmDecisionEngine`](super::service::AlarmDecisionEngine)
//! consumes the repository and analyzer via generics and the listeners via
//! shared trait objects, so the core never touches storage, pixels, or UI.
//!
//! Every call is synchronous and assumed infallible at this layer.
//! `update_sensor` stores a sensor the repository has not seen yet, so the
//! aggregate flag always agrees with the flag the engine acted on.

use crate::fsm::{AlarmStatus, ArmingStatus};
use crate::sensors::{Sensor, SensorId};

// ───────────────────────────────────────────────────────────────
// Repository port (driven adapter: domain ↔ durable state)
// ───────────────────────────────────────────────────────────────

/// Durable home of the alarm status, arming status and sensor set.
pub trait SecurityRepository {
    fn alarm_status(&self) -> AlarmStatus;

    fn set_alarm_status(&mut self, status: AlarmStatus);

    fn arming_status(&self) -> ArmingStatus;

    fn set_arming_status(&mut self, status: ArmingStatus);

    /// Snapshot of every known sensor.  Each sensor appears exactly once;
    /// order is stable between calls but otherwise meaningless.
    fn sensors(&self) -> Vec<Sensor>;

    /// Look up a single sensor by id.
    fn sensor(&self, id: SensorId) -> Option<Sensor>;

    fn add_sensor(&mut self, sensor: Sensor);

    fn remove_sensor(&mut self, sensor: &Sensor);

    /// Overwrite the stored copy of `sensor`, storing it if absent.
    fn update_sensor(&mut self, sensor: &Sensor);

    /// True iff at least one stored sensor is active.
    fn sensors_state(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Image analysis port (driven adapter: camera frame → verdict)
// ───────────────────────────────────────────────────────────────

/// Classifies a camera frame.  Only the boolean verdict matters to the core.
pub trait ImageAnalyzer {
    /// Frame representation.  Opaque to the engine.
    type Image: ?Sized;

    /// Whether `image` shows a cat with at least `confidence_threshold`
    /// percent confidence.
    fn image_contains_cat(&mut self, image: &Self::Image, confidence_threshold: f32) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Listener port (driven adapter: domain → UI / logging)
// ───────────────────────────────────────────────────────────────

/// Observer of status changes.
///
/// Listeners are shared handles, so every method takes `&self`; an
/// implementation that records state needs interior mutability.  The engine
/// calls listeners synchronously, so they must return promptly.
pub trait StatusListener {
    /// The alarm status was written (possibly re-asserting the same value).
    fn notify(&self, status: AlarmStatus);

    /// A camera frame was classified.
    fn cat_detected(&self, cat: bool);

    /// Sensor or arming state changed; refresh any derived view.
    fn sensor_status_changed(&self);
}
