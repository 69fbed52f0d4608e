//! Environmental control system library.
//!
//! Reads a temperature sensor and drives a heater and a window from a
//! validated pair of thresholds. The domain core lives in [`app`] and
//! [`control`]; sensors, drivers and adapters plug into its port traits.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod sensors;

pub use app::service::Ecs;
pub use error::{Error, Result, ThresholdError};
