//! Unified error types for the environmental control system.
//!
//! A single `Error` enum that every subsystem converts into. All variants are
//! `Copy` so they can be passed through events and commands without
//! allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A threshold update would break `lower <= upper`.
    Threshold(ThresholdError),
    /// Configuration could not be parsed.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Threshold(e) => write!(f, "threshold: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Threshold(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Threshold errors
// ---------------------------------------------------------------------------

/// Invalid threshold ordering.
///
/// Each variant carries the rejected value first and the current value of
/// the opposite threshold second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdError {
    /// The requested upper threshold is below the current lower threshold.
    UpperBelowLower { upper: i32, lower: i32 },
    /// The requested lower threshold is above the current upper threshold.
    LowerAboveUpper { lower: i32, upper: i32 },
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpperBelowLower { upper, lower } => {
                write!(f, "upper threshold {upper} is below lower threshold {lower}")
            }
            Self::LowerAboveUpper { lower, upper } => {
                write!(f, "lower threshold {lower} is above upper threshold {upper}")
            }
        }
    }
}

impl std::error::Error for ThresholdError {}

impl From<ThresholdError> for Error {
    fn from(e: ThresholdError) -> Self {
        Self::Threshold(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
