use crate::generator::pattern::{peak_sample, PatternSample};
use serde::Serialize;
use std::fmt;

/// Main-lobe widths and angular resolution, radians with degree mirrors.
#[derive(Debug, Clone, Serialize, Default)]
pub struct BeamSummary {
    pub fnbw_rad: f64,
    pub fnbw_deg: f64,
    pub hpbw_rad: f64,
    pub hpbw_deg: f64,
    pub hpbw_broadside_rad: f64,
    pub hpbw_broadside_deg: f64,
    pub resolution_rad: f64,
    pub resolution_deg: f64,
}

/// Grating lobe of a given order; `None` when no lobe of that order is visible.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GratingLobe {
    pub order: i32,
    pub angle_rad: Option<f64>,
    pub angle_deg: Option<f64>,
}

impl GratingLobe {
    pub fn from_angle(order: i32, angle_rad: f64) -> Self {
        let angle_rad = (!angle_rad.is_nan()).then_some(angle_rad);
        Self {
            order,
            angle_rad,
            angle_deg: angle_rad.map(f64::to_degrees),
        }
    }
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct DopplerSummary {
    pub frequency: f64,
    pub phase_delta_rad: f64,
    pub phase_instant_rad: f64,
}

/// Every quantity derived for one scenario.
#[derive(Debug, Clone, Serialize, Default)]
pub struct LinkReport {
    pub scenario: Option<String>,
    pub wavelength: f64,
    pub wavenumber: f64,
    pub phase_param: f64,
    pub array_factor: f64,
    pub is_null: bool,
    pub main_lobe_rad: f64,
    pub main_lobe_deg: f64,
    pub beam: BeamSummary,
    pub spacing_safe: bool,
    pub grating_lobes: Vec<GratingLobe>,
    pub gain_linear: f64,
    pub gain_db: f64,
    pub received_power: f64,
    pub doppler: DopplerSummary,
    pub angle_estimate_rad: f64,
    pub angle_estimate_deg: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pattern: Vec<PatternSample>,
}

impl LinkReport {
    pub fn visible_grating_lobes(&self) -> impl Iterator<Item = &GratingLobe> {
        self.grating_lobes.iter().filter(|lobe| lobe.angle_rad.is_some())
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario {}", self.scenario.as_deref().unwrap_or("unnamed"))?;
        writeln!(
            f,
            "  wavelength {:.6}  wavenumber {:.4} rad/unit",
            self.wavelength, self.wavenumber
        )?;
        writeln!(
            f,
            "  u {:.6}  AF {:.6}  null {}  main lobe {:.2} deg",
            self.phase_param, self.array_factor, self.is_null, self.main_lobe_deg
        )?;
        writeln!(
            f,
            "  FNBW {:.3} deg  HPBW {:.3} deg  HPBW(broadside) {:.3} deg  resolution {:.3} deg",
            self.beam.fnbw_deg,
            self.beam.hpbw_deg,
            self.beam.hpbw_broadside_deg,
            self.beam.resolution_deg
        )?;

        let visible: Vec<String> = self
            .visible_grating_lobes()
            .filter_map(|lobe| lobe.angle_deg.map(|deg| format!("m={} {:.2} deg", lobe.order, deg)))
            .collect();
        writeln!(
            f,
            "  spacing safe {}  grating lobes [{}]",
            self.spacing_safe,
            visible.join(", ")
        )?;
        writeln!(
            f,
            "  gain {:.1} ({:.2} dB)  received power {:.4e}",
            self.gain_linear, self.gain_db, self.received_power
        )?;
        writeln!(
            f,
            "  doppler {:.3} Hz  phase delta {:.4} rad  instant phase {:.4} rad",
            self.doppler.frequency, self.doppler.phase_delta_rad, self.doppler.phase_instant_rad
        )?;
        writeln!(f, "  angle estimate {:.3} deg", self.angle_estimate_deg)?;

        if let Some(peak) = peak_sample(&self.pattern) {
            let nulls = self.pattern.iter().filter(|s| s.is_null).count();
            writeln!(
                f,
                "  pattern {} samples, peak {:.4} at {:.2} deg, {} nulls",
                self.pattern.len(),
                peak.magnitude,
                peak.angle_deg,
                nulls
            )?;
        }
        Ok(())
    }
}
