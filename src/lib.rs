//! Catpoint security monitor core.
//!
//! Exposes the alarm decision engine, its port traits, and in-process
//! adapters for integration testing and host simulation.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod sensors;
