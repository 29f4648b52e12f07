//! Position streams for plotting and animation collaborators.

use std::f64::consts::TAU;

use crate::body::{OrbitalBody, Position};
use crate::kepler::KeplerError;
use crate::model::OrbitModel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    pub time: f64,
    pub position: Position,
}

/// Sample `samples` evenly spaced positions over `[start, end]`, endpoints included.
///
/// A single sample is taken at `start`; zero samples yields an empty track.
pub fn sample_track(
    model: &OrbitModel,
    body: &OrbitalBody,
    start: f64,
    end: f64,
    samples: usize,
) -> Result<Vec<TrackSample>, KeplerError> {
    let step = if samples > 1 {
        (end - start) / (samples - 1) as f64
    } else {
        0.0
    };
    (0..samples)
        .map(|i| {
            let time = start + step * i as f64;
            model
                .position(body, time)
                .map(|position| TrackSample { time, position })
        })
        .collect()
}

/// Closed outline of the orbit (first point repeated at the end), focus at the origin.
pub fn orbit_outline(body: &OrbitalBody, points: usize) -> Vec<Position> {
    if points == 0 {
        return Vec::new();
    }
    (0..=points)
        .map(|i| body.point_at(TAU * i as f64 / points as f64))
        .collect()
}
