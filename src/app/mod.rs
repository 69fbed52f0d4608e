//! Application core: pure domain logic, zero I/O.
//!
//! Business rules of the environmental control system: threshold management
//! and regulation. All interaction with the sensor, heater and window happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
