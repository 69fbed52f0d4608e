//! Application service: the hexagonal core.
//!
//! [`Ecs`] owns the temperature sensor, heater, window and the validated
//! threshold pair. Each call to [`Ecs::regulate`] reads the sensor once and
//! issues exactly one heater command and one window command, derived only
//! from that reading and the current thresholds.
//!
//! ```text
//!  TemperatureSensorPort ──▶ ┌──────────────────────┐ ──▶ HeaterPort
//!                            │         Ecs          │
//!              EventSink ◀── │ Thresholds · Rule    │ ──▶ WindowPort
//!                            └──────────────────────┘
//! ```

use heapless::HistoryBuffer;
use log::{debug, info, warn};

use crate::config::EcsConfig;
use crate::control::{HeaterCommand, Thresholds, WindowCommand};
use crate::error::ThresholdError;

use super::commands::EcsCommand;
use super::events::{EcsEvent, HISTORY_LEN, Regulation, TelemetryData};
use super::ports::{EventSink, HeaterPort, TemperatureSensorPort, WindowPort};

// ───────────────────────────────────────────────────────────────
// Ecs
// ───────────────────────────────────────────────────────────────

/// Environmental control system.
pub struct Ecs<S, H, W> {
    sensor: S,
    heater: H,
    window: W,
    thresholds: Thresholds,
    cycles: u64,
    history: HistoryBuffer<Regulation, HISTORY_LEN>,
}

impl<S, H, W> Ecs<S, H, W>
where
    S: TemperatureSensorPort,
    H: HeaterPort,
    W: WindowPort,
{
    /// Construct the system with its collaborators and initial thresholds.
    ///
    /// Fails if `lower > upper`. No actuator is commanded until the first
    /// [`regulate`](Self::regulate).
    pub fn new(
        sensor: S,
        heater: H,
        window: W,
        lower: i32,
        upper: i32,
    ) -> Result<Self, ThresholdError> {
        let thresholds = Thresholds::new(lower, upper)?;
        info!("ECS created with thresholds {}..{}", lower, upper);
        Ok(Self {
            sensor,
            heater,
            window,
            thresholds,
            cycles: 0,
            history: HistoryBuffer::new(),
        })
    }

    /// Construct from a configuration.
    pub fn from_config(
        sensor: S,
        heater: H,
        window: W,
        config: &EcsConfig,
    ) -> Result<Self, ThresholdError> {
        Self::new(
            sensor,
            heater,
            window,
            config.lower_threshold,
            config.upper_threshold,
        )
    }

    // ── Regulation ────────────────────────────────────────────

    /// Run one control cycle: read sensor → classify → command actuators.
    pub fn regulate(&mut self) -> Regulation {
        let temperature = self.sensor.read_temperature();
        let band = self.thresholds.classify(temperature);
        let decision = band.decision();

        match decision.heater {
            HeaterCommand::On => self.heater.turn_on(),
            HeaterCommand::Off => self.heater.turn_off(),
        }
        match decision.window {
            WindowCommand::Open => self.window.open(),
            WindowCommand::Close => self.window.close(),
        }

        self.cycles += 1;
        let regulation = Regulation {
            cycle: self.cycles,
            temperature,
            band,
            decision,
        };
        self.history.write(regulation);

        debug!(
            "Regulate #{}: T={} ({}) heater={:?} window={:?}",
            self.cycles, temperature, band, decision.heater, decision.window
        );
        regulation
    }

    // ── Thresholds ────────────────────────────────────────────

    /// Set the lower threshold. Rejected if it would exceed the upper one.
    pub fn set_lower_threshold(&mut self, value: i32) -> Result<(), ThresholdError> {
        self.thresholds.set_lower(value).inspect_err(log_rejection)?;
        info!("Lower threshold set to {}", value);
        Ok(())
    }

    /// Set the upper threshold. Rejected if it would fall below the lower one.
    pub fn set_upper_threshold(&mut self, value: i32) -> Result<(), ThresholdError> {
        self.thresholds.set_upper(value).inspect_err(log_rejection)?;
        info!("Upper threshold set to {}", value);
        Ok(())
    }

    /// Replace both thresholds, validated as a pair.
    pub fn set_thresholds(&mut self, lower: i32, upper: i32) -> Result<(), ThresholdError> {
        self.thresholds.set(lower, upper).inspect_err(log_rejection)?;
        info!("Thresholds set to {}..{}", lower, upper);
        Ok(())
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command and report the outcome through `sink`.
    pub fn handle_command(
        &mut self,
        cmd: EcsCommand,
        sink: &mut impl EventSink,
    ) -> Result<(), ThresholdError> {
        let result = match cmd {
            EcsCommand::SetLowerThreshold(value) => self.set_lower_threshold(value),
            EcsCommand::SetUpperThreshold(value) => self.set_upper_threshold(value),
            EcsCommand::ApplyConfig(config) => {
                self.set_thresholds(config.lower_threshold, config.upper_threshold)
            }
            EcsCommand::Regulate => {
                let regulation = self.regulate();
                sink.emit(&EcsEvent::Regulated(regulation));
                return Ok(());
            }
        };

        match result {
            Ok(()) => sink.emit(&EcsEvent::ThresholdsChanged(self.thresholds)),
            Err(e) => sink.emit(&EcsEvent::ThresholdRejected(e)),
        }
        result
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn lower_threshold(&self) -> i32 {
        self.thresholds.lower()
    }

    pub fn upper_threshold(&self) -> i32 {
        self.thresholds.upper()
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Current thresholds as a configuration.
    pub fn current_config(&self) -> EcsConfig {
        self.thresholds.into()
    }

    /// Regulation cycles executed since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycles
    }

    pub fn last_regulation(&self) -> Option<Regulation> {
        self.history.recent().copied()
    }

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            lower_threshold: self.thresholds.lower(),
            upper_threshold: self.thresholds.upper(),
            cycles: self.cycles,
            last: self.last_regulation(),
            recent: self.history.oldest_ordered().copied().collect(),
        }
    }

    /// Emit a telemetry snapshot through `sink`.
    pub fn report_telemetry(&self, sink: &mut impl EventSink) {
        sink.emit(&EcsEvent::Telemetry(self.build_telemetry()));
    }

    // ── Collaborators ─────────────────────────────────────────

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn heater(&self) -> &H {
        &self.heater
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// Release the collaborators.
    pub fn into_parts(self) -> (S, H, W) {
        (self.sensor, self.heater, self.window)
    }
}

fn log_rejection(e: &ThresholdError) {
    warn!("Threshold update rejected: {}", e);
}
