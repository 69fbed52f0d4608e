//! Simulated temperature sensor.
//!
//! Host-side stand-in for a real probe. The reading lives in a shared
//! atomic, so a clone handed to the [`Ecs`](crate::app::service::Ecs) and a
//! clone kept by the caller observe the same value. Lock-free; safe to set
//! from another thread while the control loop reads.

use core::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use crate::app::ports::TemperatureSensorPort;

#[derive(Debug, Clone)]
pub struct SimTemperatureSensor {
    reading: Arc<AtomicI32>,
}

impl SimTemperatureSensor {
    pub fn new(initial: i32) -> Self {
        Self {
            reading: Arc::new(AtomicI32::new(initial)),
        }
    }

    /// Inject the value returned by subsequent reads.
    pub fn set(&self, celsius: i32) {
        self.reading.store(celsius, Ordering::Relaxed);
    }

    pub fn get(&self) -> i32 {
        self.reading.load(Ordering::Relaxed)
    }
}

impl TemperatureSensorPort for SimTemperatureSensor {
    fn read_temperature(&mut self) -> i32 {
        self.get()
    }
}
