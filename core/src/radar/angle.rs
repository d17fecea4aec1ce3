use crate::constants::PI_RAD;

/// Angle of arrival from the phase difference between adjacent elements:
/// `asin(λ·Δφ / (2π·d))`.
///
/// The argument is clamped to `[-1, 1]` before the inverse sine, so
/// over-range measurements saturate at endfire rather than yielding NaN.
pub fn angle_from_phase_difference(
    phase_difference: f64,
    wavelength: f64,
    element_spacing: f64,
) -> f64 {
    let arg = (wavelength * phase_difference) / (2.0 * PI_RAD * element_spacing);
    arg.clamp(-1.0, 1.0).asin()
}

/// Smallest resolvable angular separation `λ / (N·d)`.
pub fn angle_resolution_limit(wavelength: f64, num_elements: i32, element_spacing: f64) -> f64 {
    wavelength / (f64::from(num_elements) * element_spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::wavenumber;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_phase_is_broadside() {
        assert_eq!(angle_from_phase_difference(0.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn inverts_the_inter_element_phase() {
        let (lambda, d) = (0.1, 0.05);
        let k = wavenumber(lambda);
        for psi in [-1.2, -0.4, 0.0, 0.3, 0.9] {
            let dphi = k * d * f64::sin(psi);
            assert_abs_diff_eq!(angle_from_phase_difference(dphi, lambda, d), psi, epsilon = 1e-9);
        }
    }

    #[test]
    fn over_range_phase_saturates() {
        assert_eq!(angle_from_phase_difference(10.0, 1.0, 0.1), 1.0_f64.asin());
        assert_eq!(angle_from_phase_difference(-10.0, 1.0, 0.1), (-1.0_f64).asin());
        assert_eq!(angle_from_phase_difference(PI_RAD, 1.0, 0.5), 1.0_f64.asin());
    }

    #[test]
    fn resolution_limit() {
        assert_eq!(angle_resolution_limit(1.0, 8, 0.5), 0.25);
        assert!(angle_resolution_limit(1.0, 0, 0.5).is_infinite());
    }
}
