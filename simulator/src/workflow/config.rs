use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Speed of light in feet per second.
pub const SPEED_OF_LIGHT_FT_PER_SEC: f64 = 983_571_056.0;

const DEFAULT_FREQUENCY_HZ: f64 = 10.0e9;

/// Largest observation-angle grid a sweep may request.
pub const MAX_PATTERN_SAMPLES: usize = 100_000;

// absorbs rounding in (stop - start) / step so the stop angle stays on the grid
const GRID_TOLERANCE: f64 = 1e-9;

/// Host-side validation failures. The formula library itself never rejects input.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScenarioError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("element count must be at least 1, got {0}")]
    ElementCount(i32),
    #[error("invalid pattern grid: {0}")]
    InvalidPattern(String),
}

/// Observation-angle grid for the array-factor sweep, in degrees.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    pub start_deg: f64,
    pub stop_deg: f64,
    pub step_deg: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            start_deg: -90.0,
            stop_deg: 90.0,
            step_deg: 1.0,
        }
    }
}

/// Physical inputs for a single evaluation. Angles are degrees here and
/// radians once handed to `aesacore`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub name: Option<String>,
    pub wave_velocity: f64,
    pub frequency: f64,
    pub element_count: i32,
    pub element_spacing: f64,
    pub steer_angle_deg: f64,
    pub observation_angle_deg: f64,
    pub grating_orders: Vec<i32>,
    pub transmit_power: f64,
    pub rcs: f64,
    pub range: f64,
    pub radial_velocity: f64,
    pub dwell_time: f64,
    pub initial_phase_deg: f64,
    pub phase_difference_deg: f64,
    pub pattern: PatternConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: None,
            wave_velocity: SPEED_OF_LIGHT_FT_PER_SEC,
            frequency: DEFAULT_FREQUENCY_HZ,
            element_count: 16,
            element_spacing: half_wavelength(SPEED_OF_LIGHT_FT_PER_SEC, DEFAULT_FREQUENCY_HZ),
            steer_angle_deg: 20.0,
            observation_angle_deg: 0.0,
            grating_orders: vec![-2, -1, 1, 2],
            transmit_power: 1000.0,
            rcs: 10.0,
            range: 50_000.0,
            radial_velocity: 150.0,
            dwell_time: 1e-3,
            initial_phase_deg: 0.0,
            phase_difference_deg: 45.0,
            pattern: PatternConfig::default(),
        }
    }
}

fn half_wavelength(wave_velocity: f64, frequency: f64) -> f64 {
    0.5 * aesacore::wavelength(wave_velocity, frequency)
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScenarioError::NonFinite { field })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::NonPositive { field, value })
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario {}", path_ref.display()))?;
        Ok(config)
    }

    /// Builds a scenario from command-line values. Missing spacing means half a
    /// wavelength at the given frequency.
    pub fn from_args(
        frequency: f64,
        element_count: i32,
        element_spacing: Option<f64>,
        steer_angle_deg: f64,
        observation_angle_deg: f64,
    ) -> Self {
        let defaults = Self::default();
        let element_spacing = element_spacing
            .unwrap_or_else(|| half_wavelength(defaults.wave_velocity, frequency));
        Self {
            frequency,
            element_count,
            element_spacing,
            steer_angle_deg,
            observation_angle_deg,
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        require_positive("wave_velocity", self.wave_velocity)?;
        require_positive("frequency", self.frequency)?;
        require_positive("element_spacing", self.element_spacing)?;
        require_positive("transmit_power", self.transmit_power)?;
        require_positive("rcs", self.rcs)?;
        require_positive("range", self.range)?;
        if self.element_count < 1 {
            return Err(ScenarioError::ElementCount(self.element_count));
        }

        require_finite("steer_angle_deg", self.steer_angle_deg)?;
        require_finite("observation_angle_deg", self.observation_angle_deg)?;
        require_finite("radial_velocity", self.radial_velocity)?;
        require_finite("initial_phase_deg", self.initial_phase_deg)?;
        require_finite("phase_difference_deg", self.phase_difference_deg)?;
        require_finite("dwell_time", self.dwell_time)?;
        if self.dwell_time < 0.0 {
            return Err(ScenarioError::NonPositive {
                field: "dwell_time",
                value: self.dwell_time,
            });
        }

        self.pattern.validate()
    }
}

impl PatternConfig {
    /// Number of grid points from `start_deg` to `stop_deg` inclusive.
    pub fn sample_count(&self) -> usize {
        ((self.stop_deg - self.start_deg) / self.step_deg + GRID_TOLERANCE).floor() as usize + 1
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        let PatternConfig {
            start_deg,
            stop_deg,
            step_deg,
        } = *self;
        if !(start_deg.is_finite() && stop_deg.is_finite() && step_deg.is_finite()) {
            return Err(ScenarioError::InvalidPattern("non-finite bound".into()));
        }
        if step_deg <= 0.0 {
            return Err(ScenarioError::InvalidPattern(format!(
                "step must be positive, got {}",
                step_deg
            )));
        }
        if start_deg >= stop_deg {
            return Err(ScenarioError::InvalidPattern(format!(
                "start {} is not below stop {}",
                start_deg, stop_deg
            )));
        }
        if start_deg < -90.0 || stop_deg > 90.0 {
            return Err(ScenarioError::InvalidPattern(
                "bounds must lie within [-90, 90] degrees".into(),
            ));
        }
        let count = self.sample_count();
        if count > MAX_PATTERN_SAMPLES {
            return Err(ScenarioError::InvalidPattern(format!(
                "{} samples exceeds the limit of {}",
                count, MAX_PATTERN_SAMPLES
            )));
        }
        Ok(())
    }
}
