//! Motorised window actuator driver.
//!
//! Two active-high GPIOs select the motor direction: one drives the window
//! open, the other drives it closed. The idle pin is always released before
//! the active one is asserted, so both are never high together.
//!
//! The position is `Unknown` until the first successful command.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::WindowPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Unknown,
    Open,
    Closed,
}

pub struct WindowActuator<P> {
    open_pin: P,
    close_pin: P,
    state: WindowState,
}

impl<P: OutputPin> WindowActuator<P> {
    pub fn new(open_pin: P, close_pin: P) -> Self {
        Self {
            open_pin,
            close_pin,
            state: WindowState::Unknown,
        }
    }

    fn drive(&mut self, target: WindowState) {
        let (idle, active) = match target {
            WindowState::Open => (&mut self.close_pin, &mut self.open_pin),
            WindowState::Closed => (&mut self.open_pin, &mut self.close_pin),
            WindowState::Unknown => return,
        };

        if let Err(e) = idle.set_low() {
            warn!("Window idle pin release failed ({:?}): {:?}", target, e);
            return;
        }
        match active.set_high() {
            Ok(()) => self.state = target,
            Err(e) => warn!("Window drive failed ({:?}): {:?}", target, e),
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == WindowState::Open
    }

    /// Release both direction pins as `(open, close)`.
    pub fn release(self) -> (P, P) {
        (self.open_pin, self.close_pin)
    }
}

impl<P: OutputPin> WindowPort for WindowActuator<P> {
    fn open(&mut self) {
        self.drive(WindowState::Open);
    }

    fn close(&mut self) {
        self.drive(WindowState::Closed);
    }
}
