//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Ecs (domain)
//! ```
//!
//! Driven adapters (sensor, heater, window, event sinks) implement these
//! traits. The [`Ecs`](super::service::Ecs) owns them via generics, so the
//! domain core never touches hardware directly.
//!
//! Ports are infallible: an adapter that talks to real hardware handles its
//! own failures (see [`crate::drivers`]).

use super::events::EcsEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per regulation cycle.
pub trait TemperatureSensorPort {
    /// Current temperature in whole degrees.
    fn read_temperature(&mut self) -> i32;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapters: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Heater control. Both commands are idempotent.
pub trait HeaterPort {
    fn turn_on(&mut self);
    fn turn_off(&mut self);
}

/// Window control. Both commands are idempotent.
pub trait WindowPort {
    fn open(&mut self);
    fn close(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`EcsEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &EcsEvent);
}

// ───────────────────────────────────────────────────────────────
// Borrowed collaborators
// ───────────────────────────────────────────────────────────────

impl<T: TemperatureSensorPort + ?Sized> TemperatureSensorPort for &mut T {
    fn read_temperature(&mut self) -> i32 {
        (**self).read_temperature()
    }
}

impl<T: HeaterPort + ?Sized> HeaterPort for &mut T {
    fn turn_on(&mut self) {
        (**self).turn_on();
    }

    fn turn_off(&mut self) {
        (**self).turn_off();
    }
}

impl<T: WindowPort + ?Sized> WindowPort for &mut T {
    fn open(&mut self) {
        (**self).open();
    }

    fn close(&mut self) {
        (**self).close();
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &EcsEvent) {
        (**self).emit(event);
    }
}
