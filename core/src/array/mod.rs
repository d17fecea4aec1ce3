//! Uniform linear array geometry: pattern kernel, beamwidths, grating lobes and gain.

pub mod beamwidth;
pub mod factor;
pub mod gain;
pub mod grating;

pub use beamwidth::{fnbw, hpbw, hpbw_broadside};
pub use factor::{array_factor, is_null_direction, main_lobe_angle, phase_param};
pub use gain::{gain_db, gain_linear};
pub use grating::{grating_lobe_angle, spacing_is_safe};
