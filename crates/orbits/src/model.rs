//! Position strategies. Callers pick one explicitly; neither has side effects.

use crate::body::{OrbitalBody, Position};
use crate::kepler::{KeplerError, KeplerSettings};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OrbitModel {
    #[default]
    /// Uniform sweep of the parametric ellipse angle. Not area-preserving; used by the
    /// travel-time solver.
    Parametric,
    /// Time mapped through Kepler's equation to the true anomaly.
    Keplerian(KeplerSettings),
}

impl OrbitModel {
    /// Keplerian strategy with the default iteration bound.
    pub fn keplerian() -> Self {
        OrbitModel::Keplerian(KeplerSettings::default())
    }

    pub fn position(&self, body: &OrbitalBody, t: f64) -> Result<Position, KeplerError> {
        match self {
            OrbitModel::Parametric => Ok(body.parametric_position(t)),
            OrbitModel::Keplerian(settings) => body.keplerian_position(t, settings),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrbitModel::Parametric => "parametric",
            OrbitModel::Keplerian(_) => "keplerian",
        }
    }
}
