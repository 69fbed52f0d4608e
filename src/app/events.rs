//! Outbound application events.
//!
//! The [`Ecs`](super::service::Ecs) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them.

use crate::control::{Decision, TempBand, Thresholds};
use crate::error::ThresholdError;

/// Number of regulation cycles retained for telemetry.
pub const HISTORY_LEN: usize = 8;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum EcsEvent {
    /// A regulation cycle completed.
    Regulated(Regulation),

    /// A threshold update was committed (carries the new pair).
    ThresholdsChanged(Thresholds),

    /// A threshold update was rejected; the pair is unchanged.
    ThresholdRejected(ThresholdError),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// Outcome of one regulation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regulation {
    /// 1-based cycle number.
    pub cycle: u64,
    pub temperature: i32,
    pub band: TempBand,
    pub decision: Decision,
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub lower_threshold: i32,
    pub upper_threshold: i32,
    pub cycles: u64,
    pub last: Option<Regulation>,
    /// Most recent cycles, oldest first.
    pub recent: heapless::Vec<Regulation, HISTORY_LEN>,
}
