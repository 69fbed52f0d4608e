//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements | Connects to        |
//! |-------------|------------|--------------------|
//! | `log_sink`  | EventSink  | `log` facade       |
//!
//! Sensor and actuator adapters live in [`crate::sensors`] and
//! [`crate::drivers`].

pub mod log_sink;
