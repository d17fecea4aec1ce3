/// First-null beamwidth `2λ / (N·d)` in radians.
pub fn fnbw(wavelength: f64, num_elements: i32, element_spacing: f64) -> f64 {
    (2.0 * wavelength) / (f64::from(num_elements) * element_spacing)
}

/// Half-power beamwidth `2λ / (N·d·cos θ)` at observation angle `θ`.
///
/// Grows without bound as `θ` approaches ±π/2.
pub fn hpbw(
    wavelength: f64,
    num_elements: i32,
    element_spacing: f64,
    observation_angle: f64,
) -> f64 {
    (2.0 * wavelength)
        / (f64::from(num_elements) * element_spacing * observation_angle.cos())
}

/// Half-power beamwidth at broadside (`θ = 0`).
pub fn hpbw_broadside(wavelength: f64, num_elements: i32, element_spacing: f64) -> f64 {
    (2.0 * wavelength) / (f64::from(num_elements) * element_spacing)
}
