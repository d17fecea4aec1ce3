/// Angle of the grating lobe of order `m` for a beam steered to `steer_angle`.
///
/// Solves `sin θ_g = sin ψ + m·λ/d`. Returns `f64::NAN` when the right-hand
/// side leaves `[-1, 1]`, i.e. no lobe of that order exists in visible space.
/// Order zero is the main lobe.
pub fn grating_lobe_angle(steer_angle: f64, m: i32, wavelength: f64, element_spacing: f64) -> f64 {
    let rhs = steer_angle.sin() + f64::from(m) * (wavelength / element_spacing);

    if !(-1.0..=1.0).contains(&rhs) {
        return f64::NAN;
    }

    rhs.asin()
}

/// True when `d ≤ λ/2`, which keeps every grating lobe out of visible space.
pub fn spacing_is_safe(element_spacing: f64, wavelength: f64) -> bool {
    element_spacing <= 0.5 * wavelength
}
