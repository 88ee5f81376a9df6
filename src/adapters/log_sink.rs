//! Log-based status listener adapter.
//!
//! Implements [`StatusListener`] by writing every notification to the `log`
//! facade.  Whatever logger the host installs decides where it goes.

use log::info;

use crate::app::ports::StatusListener;
use crate::fsm::AlarmStatus;

/// Adapter that logs every notification.
#[derive(Debug, Default)]
pub struct LogStatusListener;

impl LogStatusListener {
    pub fn new() -> Self {
        Self
    }
}

impl StatusListener for LogStatusListener {
    fn notify(&self, status: AlarmStatus) {
        info!("ALARM | {:?}", status);
    }

    fn cat_detected(&self, cat: bool) {
        info!("CAMERA | cat={}", if cat { "yes" } else { "no" });
    }

    fn sensor_status_changed(&self) {
        info!("SENSORS | refresh");
    }
}
