//! Sensor drivers implementing [`TemperatureSensorPort`](crate::app::ports::TemperatureSensorPort).

pub mod temperature;
