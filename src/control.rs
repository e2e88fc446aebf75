// Actuation control: duty-cycle ramp and speed command translation

pub mod ramp;
pub mod speed_command;

// Re-export main types for easier access
pub use ramp::{ActuatorState, RampController};
pub use speed_command::{parse_magnitude, ParsedMagnitude, SpeedCommand, SpeedTranslator};
