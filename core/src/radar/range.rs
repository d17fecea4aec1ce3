use crate::constants::PI_RAD;

/// Monostatic free-space radar range equation for a point target:
///
/// `P_r = P_t · G² · λ² · σ / ((4π)³ · R⁴)`
///
/// Diverges at zero range and tends to zero as range grows.
pub fn received_power(
    transmit_power: f64,
    gain: f64,
    wavelength: f64,
    rcs: f64,
    range: f64,
) -> f64 {
    let four_pi = 4.0 * PI_RAD;
    let four_pi_cubed = four_pi * four_pi * four_pi;
    let range_sq = range * range;

    (transmit_power * gain * gain * wavelength * wavelength * rcs)
        / (four_pi_cubed * range_sq * range_sq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_link_recovers_spreading_loss() {
        let four_pi = 4.0 * PI_RAD;
        let pt = four_pi * four_pi * four_pi;
        assert_relative_eq!(received_power(pt, 1.0, 1.0, 1.0, 1.0), 1.0, max_relative = 1e-14);
    }

    #[test]
    fn gain_enters_squared() {
        let base = received_power(1000.0, 16.0, 0.1, 10.0, 5_000.0);
        let doubled = received_power(1000.0, 32.0, 0.1, 10.0, 5_000.0);
        assert_relative_eq!(doubled / base, 4.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_range_diverges() {
        assert!(received_power(1.0, 1.0, 1.0, 1.0, 0.0).is_infinite());
        assert!(received_power(1.0, 1.0, 1.0, 1.0, 1e100) < 1e-300);
    }
}
