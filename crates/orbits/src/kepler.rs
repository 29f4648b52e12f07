//! Kepler's equation `E - e·sin(E) = M` and the anomaly conversions built on it.

use std::f64::consts::{PI, TAU};

use thiserror::Error;

/// Iteration bound and residual tolerance for the Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSettings {
    /// Largest accepted `|E - e·sin(E) - M|` in radians.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for KeplerSettings {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KeplerError {
    #[error("eccentricity {0} is outside [0, 1)")]
    Eccentricity(f64),
    #[error("kepler solver did not converge after {iterations} iterations (residual {residual:e})")]
    Convergence { iterations: usize, residual: f64 },
}

/// Mean anomaly (radians) at time `t` for a body with orbital `period` and epoch `phase`.
#[inline]
pub fn mean_anomaly(t: f64, period: f64, phase: f64) -> f64 {
    TAU * t / period + phase
}

/// Solve Kepler's equation with the default bound.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> Result<f64, KeplerError> {
    solve_eccentric_anomaly_with(mean_anomaly, eccentricity, &KeplerSettings::default())
}

/// Newton–Raphson solve of Kepler's equation seeded with `E0 = M`.
///
/// `M` is first reduced into `(-π, π]`; the removed whole turns are added back to the
/// result, so `E - e·sin(E) = M` holds for the caller's `M`. A circular orbit returns
/// `M` unchanged.
pub fn solve_eccentric_anomaly_with(
    mean_anomaly: f64,
    eccentricity: f64,
    settings: &KeplerSettings,
) -> Result<f64, KeplerError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(KeplerError::Eccentricity(eccentricity));
    }
    if eccentricity == 0.0 {
        return Ok(mean_anomaly);
    }

    let turns = ((mean_anomaly + PI) / TAU).floor();
    let reduced = mean_anomaly - turns * TAU;

    let mut ecc_anomaly = reduced;
    let mut residual = f64::NAN;
    for _ in 0..settings.max_iterations {
        residual = ecc_anomaly - eccentricity * ecc_anomaly.sin() - reduced;
        if residual.abs() < settings.tolerance {
            return Ok(ecc_anomaly + turns * TAU);
        }
        // 1 - e·cos(E) >= 1 - e > 0 for bound orbits.
        ecc_anomaly -= residual / (1.0 - eccentricity * ecc_anomaly.cos());
    }

    Err(KeplerError::Convergence {
        iterations: settings.max_iterations,
        residual,
    })
}

/// True anomaly from eccentric anomaly via the half-angle identity.
#[inline]
pub fn true_anomaly(ecc_anomaly: f64, eccentricity: f64) -> f64 {
    let half = 0.5 * ecc_anomaly;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Kepler's third law (`T² ∝ a³`) scaled from a reference body's axis/period pair.
#[inline]
pub fn kepler_third_law_period(
    semi_major_axis: f64,
    reference_axis: f64,
    reference_period: f64,
) -> f64 {
    reference_period * (semi_major_axis / reference_axis).powf(1.5)
}
