//! Actuator drivers over `embedded-hal` digital outputs.

pub mod heater;
pub mod window;
