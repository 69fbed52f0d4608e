//! Mock collaborators for integration tests.
//!
//! Records every actuator call so tests can assert on the exact number of
//! commands issued per regulation cycle.

use ecs::app::events::EcsEvent;
use ecs::app::ports::{EventSink, HeaterPort, TemperatureSensorPort, WindowPort};
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

// ── Stub sensor ───────────────────────────────────────────────

pub struct StubSensor {
    pub temperature: i32,
    pub reads: usize,
}

impl StubSensor {
    pub fn returning(temperature: i32) -> Self {
        Self {
            temperature,
            reads: 0,
        }
    }
}

impl TemperatureSensorPort for StubSensor {
    fn read_temperature(&mut self) -> i32 {
        self.reads += 1;
        self.temperature
    }
}

// ── Heater mock ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaterCall {
    TurnOn,
    TurnOff,
}

#[derive(Default)]
pub struct MockHeater {
    pub calls: Vec<HeaterCall>,
}

impl MockHeater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self, call: HeaterCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl HeaterPort for MockHeater {
    fn turn_on(&mut self) {
        self.calls.push(HeaterCall::TurnOn);
    }

    fn turn_off(&mut self) {
        self.calls.push(HeaterCall::TurnOff);
    }
}

// ── Window mock ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCall {
    Open,
    Close,
}

#[derive(Default)]
pub struct MockWindow {
    pub calls: Vec<WindowCall>,
}

impl MockWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self, call: WindowCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl WindowPort for MockWindow {
    fn open(&mut self) {
        self.calls.push(WindowCall::Open);
    }

    fn close(&mut self) {
        self.calls.push(WindowCall::Close);
    }
}

// ── Recording GPIO ────────────────────────────────────────────

#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub writes: usize,
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}

// ── LogSink ───────────────────────────────────────────────────

#[derive(Default)]
pub struct LogSink {
    pub events: Vec<String>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &EcsEvent) {
        self.events.push(format!("{:?}", event));
    }
}
