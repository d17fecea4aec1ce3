use crate::constants::PI_RAD;

/// Wavelength `λ = v / f`.
///
/// A zero frequency yields an infinite wavelength.
pub fn wavelength(wave_velocity: f64, frequency: f64) -> f64 {
    wave_velocity / frequency
}

/// Wavenumber `k = 2π / λ` in radians per unit distance.
pub fn wavenumber(wavelength: f64) -> f64 {
    2.0 * PI_RAD / wavelength
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wavelength_divides_velocity_by_frequency() {
        assert_relative_eq!(
            wavelength(983_571_056.0, 10.0e9),
            0.0983571056,
            max_relative = 1e-12
        );
        assert_eq!(wavelength(300.0, 3.0), 100.0);
    }

    #[test]
    fn zero_frequency_gives_infinite_wavelength() {
        assert!(wavelength(1.0, 0.0).is_infinite());
        assert!(wavelength(0.0, 0.0).is_nan());
    }

    #[test]
    fn wavenumber_uses_fixed_pi() {
        assert_eq!(wavenumber(1.0), 2.0 * PI_RAD);
        assert_relative_eq!(wavenumber(0.5), 4.0 * PI_RAD);
        assert!(wavenumber(0.0).is_infinite());
    }
}
