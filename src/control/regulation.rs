//! Threshold regulation rule.
//!
//! A reading is classified into a [`TempBand`]; each band maps to exactly one
//! heater command and one window command. The heater runs only below the
//! lower threshold and the window opens only above the upper threshold.

/// Position of a reading relative to the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempBand {
    /// `t < lower`
    BelowLower,
    /// `t == lower`
    AtLower,
    /// `lower < t < upper`
    WithinBand,
    /// `t == upper`
    AtUpper,
    /// `t > upper`
    AboveUpper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaterCommand {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowCommand {
    Open,
    Close,
}

/// The pair of actuator commands issued for one regulation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decision {
    pub heater: HeaterCommand,
    pub window: WindowCommand,
}

impl TempBand {
    /// Actuator commands implied by this band.
    pub const fn decision(self) -> Decision {
        match self {
            Self::BelowLower => Decision {
                heater: HeaterCommand::On,
                window: WindowCommand::Close,
            },
            Self::AtLower | Self::WithinBand | Self::AtUpper => Decision {
                heater: HeaterCommand::Off,
                window: WindowCommand::Close,
            },
            Self::AboveUpper => Decision {
                heater: HeaterCommand::Off,
                window: WindowCommand::Open,
            },
        }
    }
}

impl core::fmt::Display for TempBand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BelowLower => write!(f, "below lower"),
            Self::AtLower => write!(f, "at lower"),
            Self::WithinBand => write!(f, "within band"),
            Self::AtUpper => write!(f, "at upper"),
            Self::AboveUpper => write!(f, "above upper"),
        }
    }
}
