/// Array gain under the isotropic-element approximation, `G ≈ N`.
pub fn gain_linear(num_elements: i32) -> f64 {
    f64::from(num_elements)
}

/// Array gain in decibels, `10·log10(N)`.
pub fn gain_db(num_elements: i32) -> f64 {
    10.0 * f64::from(num_elements).log10()
}
