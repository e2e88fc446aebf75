// Sensor readout: motor current (ADC) and shaft position/speed (encoder)

pub mod current;
pub mod encoder;
pub mod sample_cell;

pub use current::{CurrentCalibration, CurrentSensor};
pub use encoder::SpeedEstimator;
pub use sample_cell::SampleCell;
