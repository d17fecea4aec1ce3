//! Monostatic link budget, Doppler and angle-of-arrival estimation.

pub mod angle;
pub mod doppler;
pub mod range;

pub use angle::{angle_from_phase_difference, angle_resolution_limit};
pub use doppler::{doppler_frequency, doppler_phase_delta, doppler_phase_instant};
pub use range::received_power;
