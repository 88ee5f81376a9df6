//! Application core: alarm decision logic, zero I/O.
//!
//! This module contains the business rules for the Catpoint monitor: the
//! decision engine and the listener fan-out.  All interaction with storage,
//! the camera classifier and observers happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod commands;
pub mod events;
pub mod listeners;
pub mod ports;
pub mod service;
