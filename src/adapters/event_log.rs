//! Bounded notification history.
//!
//! [`EventLog`] is a [`StatusListener`] that keeps the last `N`
//! [`StatusEvent`]s in a fixed-capacity ring.  When full, the oldest entry
//! is evicted.  Useful for a status panel's "recent activity" view and for
//! asserting notification order in tests.

use core::cell::{Cell, RefCell};

use heapless::Deque;

use crate::app::events::StatusEvent;
use crate::app::ports::StatusListener;
use crate::fsm::AlarmStatus;

/// Ring buffer of the most recent notifications.
pub struct EventLog<const N: usize> {
    events: RefCell<Deque<StatusEvent, N>>,
    /// Total events ever recorded, including evicted ones.
    total: Cell<u64>,
}

impl<const N: usize> EventLog<N> {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Deque::new()),
            total: Cell::new(0),
        }
    }

    /// Retained events, oldest first.
    pub fn events(&self) -> Vec<StatusEvent> {
        self.events.borrow().iter().copied().collect()
    }

    /// Only the alarm-status notifications, oldest first.
    pub fn alarm_statuses(&self) -> Vec<AlarmStatus> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                StatusEvent::AlarmStatus(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<StatusEvent> {
        self.events.borrow().back().copied()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn total_recorded(&self) -> u64 {
        self.total.get()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: StatusEvent) {
        let mut events = self.events.borrow_mut();
        if events.is_full() {
            events.pop_front();
        }
        // Cannot fail: a slot was freed above.
        let _ = events.push_back(event);
        self.total.set(self.total.get() + 1);
    }
}

impl<const N: usize> Default for EventLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StatusListener for EventLog<N> {
    fn notify(&self, status: AlarmStatus) {
        self.record(StatusEvent::AlarmStatus(status));
    }

    fn cat_detected(&self, cat: bool) {
        self.record(StatusEvent::CatDetected(cat));
    }

    fn sensor_status_changed(&self) {
        self.record(StatusEvent::SensorStatusChanged);
    }
}
