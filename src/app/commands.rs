//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (a scheduler, a
//! control panel, a remote link) that the [`Ecs`](super::service::Ecs)
//! interprets and acts upon.

use crate::config::EcsConfig;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcsCommand {
    /// Move the lower threshold (validated against the current upper one).
    SetLowerThreshold(i32),

    /// Move the upper threshold (validated against the current lower one).
    SetUpperThreshold(i32),

    /// Replace both thresholds at once.
    ApplyConfig(EcsConfig),

    /// Run one regulation cycle.
    Regulate,
}
