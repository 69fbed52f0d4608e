//! Relay-switched heater driver.
//!
//! A single active-high GPIO energises the heater relay coil.
//!
//! Pin write failures are logged and the tracked state is left at its
//! previous value; the control loop re-asserts the command next cycle.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::HeaterPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaterState {
    Off,
    On,
}

pub struct RelayHeater<P> {
    pin: P,
    state: HeaterState,
}

impl<P: OutputPin> RelayHeater<P> {
    /// Wrap the relay pin. The pin is driven low immediately.
    pub fn new(pin: P) -> Self {
        let mut heater = Self {
            pin,
            state: HeaterState::Off,
        };
        heater.set(HeaterState::Off);
        heater
    }

    fn set(&mut self, target: HeaterState) {
        let res = match target {
            HeaterState::On => self.pin.set_high(),
            HeaterState::Off => self.pin.set_low(),
        };
        match res {
            Ok(()) => self.state = target,
            Err(e) => warn!("Heater relay write failed ({:?}): {:?}", target, e),
        }
    }

    pub fn state(&self) -> HeaterState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state == HeaterState::On
    }

    /// Release the relay pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> HeaterPort for RelayHeater<P> {
    fn turn_on(&mut self) {
        self.set(HeaterState::On);
    }

    fn turn_off(&mut self) {
        self.set(HeaterState::Off);
    }
}
