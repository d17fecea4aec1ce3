use crate::constants::NULL_TOLERANCE;

/// Inter-element phase progression `u = k·d·(sin ψ − sin θ)` for a beam
/// steered to `steer_angle` and observed at `observation_angle`.
pub fn phase_param(
    steer_angle: f64,
    observation_angle: f64,
    wavenumber: f64,
    element_spacing: f64,
) -> f64 {
    wavenumber * element_spacing * (steer_angle.sin() - observation_angle.sin())
}

/// Array factor magnitude `|sin(u/2) · sin(N·u/2)|`.
///
/// This is the library's product form, not the normalised ratio
/// `sin(N·u/2) / sin(u/2)`; the peak is not `N` and the value at `u = 0` is
/// zero.
pub fn array_factor(u: f64, num_elements: i32) -> f64 {
    let half_u = 0.5 * u;
    (half_u.sin() * (f64::from(num_elements) * half_u).sin()).abs()
}

/// True when `|sin(N·u/2)|` falls below [`NULL_TOLERANCE`].
pub fn is_null_direction(u: f64, num_elements: i32) -> bool {
    (0.5 * f64::from(num_elements) * u).sin().abs() < NULL_TOLERANCE
}

/// The main lobe points along the steering angle.
pub fn main_lobe_angle(steer_angle: f64) -> f64 {
    steer_angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::wavenumber;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_6, PI};

    #[test]
    fn phase_param_vanishes_when_observing_the_steer_direction() {
        let k = wavenumber(1.0);
        assert_eq!(phase_param(0.3, 0.3, k, 0.5), 0.0);
        assert_eq!(phase_param(0.0, 0.0, k, 0.5), 0.0);
    }

    #[test]
    fn phase_param_sign_follows_steer_minus_observation() {
        let k = wavenumber(1.0);
        let u = phase_param(FRAC_PI_6, 0.0, k, 0.5);
        assert_abs_diff_eq!(u, k * 0.5 * 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(phase_param(0.0, FRAC_PI_6, k, 0.5), -u, epsilon = 1e-12);
    }

    #[test]
    fn array_factor_is_product_form() {
        // sin(π/2)·sin(3π/2) = -1
        assert_abs_diff_eq!(array_factor(PI, 3), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(array_factor(PI, 2), 0.0, epsilon = 1e-12);
        assert_eq!(array_factor(0.0, 8), 0.0);
    }

    #[test]
    fn array_factor_is_never_negative() {
        for n in -3..=12 {
            for step in -400..=400 {
                let u = f64::from(step) * 0.025;
                assert!(array_factor(u, n) >= 0.0, "u={u} n={n}");
            }
        }
    }

    #[test]
    fn nulls_fall_on_multiples_of_two_pi_over_n() {
        for n in 1..=16 {
            for j in -5..=5 {
                let u = 2.0 * PI * f64::from(j) / f64::from(n);
                assert!(is_null_direction(u, n), "u={u} n={n}");
            }
        }
    }

    #[test]
    fn null_test_uses_fixed_tolerance() {
        assert!(is_null_direction(1e-12, 1));
        assert!(!is_null_direction(4e-12, 1));
        assert!(!is_null_direction(0.1, 4));
    }

    #[test]
    fn main_lobe_follows_steering() {
        assert_eq!(main_lobe_angle(0.42), 0.42);
        assert_eq!(main_lobe_angle(-1.1), -1.1);
    }
}
