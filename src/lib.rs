//! H-bridge motor actuation core
//!
//! Converts a text speed command into a ramped complementary PWM duty cycle,
//! and exposes the motor current (ADC) and the rotational speed (quadrature
//! encoder) as on-demand readings. Hardware access goes through the traits
//! in [`hal`]; the `firmware/` crate implements them for the STM32G431.
#![cfg_attr(not(test), no_std)]

// ログマクロは他モジュールより先に宣言
mod fmt;

pub mod config;
pub mod control;
pub mod hal;
pub mod motor;
pub mod sensors;

pub use config::{ConfigError, MotorConfig, PidParameter};
pub use control::{ActuatorState, ParsedMagnitude, RampController, SpeedCommand, SpeedTranslator};
pub use hal::{Channel, ComplementaryOutput, QuadratureCounter};
pub use motor::Motor;
pub use sensors::{CurrentCalibration, CurrentSensor, SampleCell, SpeedEstimator};
