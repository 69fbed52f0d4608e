//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! `log` facade. Whatever logger the host installs decides where they go.

use log::{info, warn};

use crate::app::events::EcsEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`EcsEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &EcsEvent) {
        match event {
            EcsEvent::Regulated(r) => {
                info!(
                    "REGULATE | #{} | T={} ({}) | heater={:?} window={:?}",
                    r.cycle, r.temperature, r.band, r.decision.heater, r.decision.window,
                );
            }
            EcsEvent::ThresholdsChanged(t) => {
                info!("THRESH | lower={} upper={}", t.lower(), t.upper());
            }
            EcsEvent::ThresholdRejected(e) => {
                warn!("THRESH | rejected: {}", e);
            }
            EcsEvent::Telemetry(t) => {
                let last = t
                    .last
                    .map_or(String::from("none"), |r| format!("T={} ({})", r.temperature, r.band));
                info!(
                    "TELEM | band={}..{} | cycles={} | last={} | history={}",
                    t.lower_threshold,
                    t.upper_threshold,
                    t.cycles,
                    last,
                    t.recent.len(),
                );
            }
        }
    }
}
