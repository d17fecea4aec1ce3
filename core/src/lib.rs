//! Closed-form far-field formulas for a uniform linear AESA and a simplified
//! monostatic radar link.
//!
//! Every operation is a pure scalar mapping. Angles are radians at every
//! boundary and nothing is validated: out-of-domain inputs follow IEEE-754
//! semantics unless an operation documents a sentinel or a clamp.

pub mod array;
pub mod constants;
pub mod radar;
pub mod wave;

pub use array::{
    array_factor, fnbw, gain_db, gain_linear, grating_lobe_angle, hpbw, hpbw_broadside,
    is_null_direction, main_lobe_angle, phase_param, spacing_is_safe,
};
pub use constants::{EULER_NUMBER, NULL_TOLERANCE, PI_RAD};
pub use radar::{
    angle_from_phase_difference, angle_resolution_limit, doppler_frequency, doppler_phase_delta,
    doppler_phase_instant, received_power,
};
pub use wave::{wavelength, wavenumber};
