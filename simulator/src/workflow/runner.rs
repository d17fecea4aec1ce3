use crate::generator::pattern::sample_pattern;
use crate::report::model::{BeamSummary, DopplerSummary, GratingLobe, LinkReport};
use crate::workflow::config::ScenarioConfig;
use aesacore::{
    angle_from_phase_difference, angle_resolution_limit, array_factor, doppler_frequency,
    doppler_phase_delta, doppler_phase_instant, fnbw, gain_db, gain_linear, grating_lobe_angle,
    hpbw, hpbw_broadside, is_null_direction, main_lobe_angle, phase_param, received_power,
    spacing_is_safe, wavelength, wavenumber,
};
use anyhow::Context;
use log::{debug, info, warn};

/// Evaluates one scenario by composing the formula library in dependency order.
pub struct Runner {
    config: ScenarioConfig,
}

impl Runner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn execute(&self, include_pattern: bool) -> anyhow::Result<LinkReport> {
        let cfg = &self.config;
        cfg.validate().context("validating scenario")?;

        let n = cfg.element_count;
        let d = cfg.element_spacing;
        let lambda = wavelength(cfg.wave_velocity, cfg.frequency);
        let k = wavenumber(lambda);
        let steer = cfg.steer_angle_deg.to_radians();
        let observe = cfg.observation_angle_deg.to_radians();
        debug!("wavelength {:.6} wavenumber {:.6}", lambda, k);

        let u = phase_param(steer, observe, k, d);
        let af = array_factor(u, n);
        let main_lobe = main_lobe_angle(steer);
        debug!("u {:.6} AF {:.6}", u, af);

        let beam = BeamSummary {
            fnbw_rad: fnbw(lambda, n, d),
            fnbw_deg: fnbw(lambda, n, d).to_degrees(),
            hpbw_rad: hpbw(lambda, n, d, observe),
            hpbw_deg: hpbw(lambda, n, d, observe).to_degrees(),
            hpbw_broadside_rad: hpbw_broadside(lambda, n, d),
            hpbw_broadside_deg: hpbw_broadside(lambda, n, d).to_degrees(),
            resolution_rad: angle_resolution_limit(lambda, n, d),
            resolution_deg: angle_resolution_limit(lambda, n, d).to_degrees(),
        };
        if !beam.hpbw_rad.is_finite() {
            warn!(
                "HPBW is not finite at observation angle {:.2} deg",
                cfg.observation_angle_deg
            );
        }

        let spacing_safe = spacing_is_safe(d, lambda);
        if !spacing_safe {
            warn!(
                "element spacing {:.6} exceeds half wavelength {:.6}",
                d,
                0.5 * lambda
            );
        }
        let grating_lobes: Vec<GratingLobe> = cfg
            .grating_orders
            .iter()
            .map(|&m| GratingLobe::from_angle(m, grating_lobe_angle(steer, m, lambda, d)))
            .collect();
        for lobe in grating_lobes.iter().filter(|lobe| lobe.angle_rad.is_some()) {
            warn!(
                "grating lobe of order {} visible at {:.2} deg",
                lobe.order,
                lobe.angle_deg.unwrap_or_default()
            );
        }

        let gain = gain_linear(n);
        let power = received_power(cfg.transmit_power, gain, lambda, cfg.rcs, cfg.range);
        if !power.is_finite() {
            warn!("received power is not finite at range {}", cfg.range);
        }

        let fd = doppler_frequency(cfg.radial_velocity, lambda);
        let doppler = DopplerSummary {
            frequency: fd,
            phase_delta_rad: doppler_phase_delta(fd, cfg.dwell_time),
            phase_instant_rad: doppler_phase_instant(
                cfg.initial_phase_deg.to_radians(),
                fd,
                cfg.dwell_time,
            ),
        };

        let estimate = angle_from_phase_difference(cfg.phase_difference_deg.to_radians(), lambda, d);

        let pattern = if include_pattern {
            sample_pattern(cfg, k)
        } else {
            Vec::new()
        };

        let report = LinkReport {
            scenario: cfg.name.clone(),
            wavelength: lambda,
            wavenumber: k,
            phase_param: u,
            array_factor: af,
            is_null: is_null_direction(u, n),
            main_lobe_rad: main_lobe,
            main_lobe_deg: main_lobe.to_degrees(),
            beam,
            spacing_safe,
            grating_lobes,
            gain_linear: gain,
            gain_db: gain_db(n),
            received_power: power,
            doppler,
            angle_estimate_rad: estimate,
            angle_estimate_deg: estimate.to_degrees(),
            pattern,
        };

        info!(
            "scenario {} -> gain {:.2} dB, Pr {:.4e}, fd {:.2} Hz, {} visible grating lobes",
            report.scenario.as_deref().unwrap_or("unnamed"),
            report.gain_db,
            report.received_power,
            report.doppler.frequency,
            report.visible_grating_lobes().count()
        );

        Ok(report)
    }
}
