use crate::constants::PI_RAD;

/// Two-way Doppler shift `f_d = 2·v_r / λ`. Sign follows radial velocity.
pub fn doppler_frequency(radial_velocity: f64, wavelength: f64) -> f64 {
    (2.0 * radial_velocity) / wavelength
}

/// Phase accumulated over `time` at Doppler frequency `f_d`: `2π·f_d·t`.
///
/// The result is not wrapped into `[0, 2π)`.
pub fn doppler_phase_delta(doppler_freq: f64, time: f64) -> f64 {
    2.0 * PI_RAD * doppler_freq * time
}

/// Instantaneous phase `φ0 + 2π·f_d·t`, unwrapped.
pub fn doppler_phase_instant(initial_phase: f64, doppler_freq: f64, time: f64) -> f64 {
    initial_phase + 2.0 * PI_RAD * doppler_freq * time
}
