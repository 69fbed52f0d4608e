//! Validated lower/upper temperature threshold pair.
//!
//! The pair upholds `lower <= upper` after construction. Every mutation is
//! checked against the current value of the opposite bound; a rejected
//! update leaves the pair untouched. Equal bounds are legal.

use crate::error::ThresholdError;

use super::regulation::TempBand;

/// Lower and upper temperature thresholds (whole degrees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Thresholds {
    lower: i32,
    upper: i32,
}

impl Thresholds {
    /// Build a pair, rejecting `lower > upper`.
    pub const fn new(lower: i32, upper: i32) -> Result<Self, ThresholdError> {
        if lower > upper {
            return Err(ThresholdError::LowerAboveUpper { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub const fn lower(&self) -> i32 {
        self.lower
    }

    pub const fn upper(&self) -> i32 {
        self.upper
    }

    /// Commit a new lower threshold unless it exceeds the current upper one.
    pub fn set_lower(&mut self, value: i32) -> Result<(), ThresholdError> {
        if value > self.upper {
            return Err(ThresholdError::LowerAboveUpper {
                lower: value,
                upper: self.upper,
            });
        }
        self.lower = value;
        Ok(())
    }

    /// Commit a new upper threshold unless it is below the current lower one.
    pub fn set_upper(&mut self, value: i32) -> Result<(), ThresholdError> {
        if value < self.lower {
            return Err(ThresholdError::UpperBelowLower {
                upper: value,
                lower: self.lower,
            });
        }
        self.upper = value;
        Ok(())
    }

    /// Replace both bounds at once.
    ///
    /// Validated as a pair, so the band can move past its current position in
    /// a single step.
    pub fn set(&mut self, lower: i32, upper: i32) -> Result<(), ThresholdError> {
        *self = Self::new(lower, upper)?;
        Ok(())
    }

    /// Classify a reading against the bounds.
    ///
    /// Comparisons run in a fixed order, so with `lower == upper == t` the
    /// reading is reported as [`TempBand::AtLower`].
    pub fn classify(&self, t: i32) -> TempBand {
        if t < self.lower {
            TempBand::BelowLower
        } else if t == self.lower {
            TempBand::AtLower
        } else if t < self.upper {
            TempBand::WithinBand
        } else if t == self.upper {
            TempBand::AtUpper
        } else {
            TempBand::AboveUpper
        }
    }
}
