//! Control rules: pure functions of the current reading and thresholds.

pub mod regulation;
pub mod thresholds;

pub use regulation::{Decision, HeaterCommand, TempBand, WindowCommand};
pub use thresholds::Thresholds;
