use crate::workflow::config::ScenarioConfig;
use aesacore::{array_factor, is_null_direction, phase_param};
use serde::Serialize;

/// One point of the array-factor sweep.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PatternSample {
    pub angle_deg: f64,
    pub u: f64,
    pub magnitude: f64,
    pub is_null: bool,
}

/// Sweeps the observation angle across the scenario's pattern grid with the
/// steering angle held fixed.
pub fn sample_pattern(config: &ScenarioConfig, wavenumber: f64) -> Vec<PatternSample> {
    let grid = &config.pattern;
    let steer = config.steer_angle_deg.to_radians();

    (0..grid.sample_count())
        .map(|index| {
            // index-based so the grid does not drift over long sweeps
            let angle_deg = grid.start_deg + index as f64 * grid.step_deg;
            let u = phase_param(
                steer,
                angle_deg.to_radians(),
                wavenumber,
                config.element_spacing,
            );
            PatternSample {
                angle_deg,
                u,
                magnitude: array_factor(u, config.element_count),
                is_null: is_null_direction(u, config.element_count),
            }
        })
        .collect()
}

pub fn peak_sample(samples: &[PatternSample]) -> Option<&PatternSample> {
    samples
        .iter()
        .max_by(|lhs, rhs| lhs.magnitude.total_cmp(&rhs.magnitude))
}
