//! Frame-by-frame replay of a solved transfer for animation collaborators.

use solar_orbits::{KeplerError, OrbitModel, OrbitalBody, Position};

use super::travel::TravelResult;

pub const DEFAULT_TRANSFER_FRAMES: usize = 101;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferFrame {
    pub index: usize,
    /// Share of the transit completed, 0 at departure and 1 at arrival.
    pub fraction: f64,
    pub time: f64,
    pub craft: Position,
    pub origin: Position,
    pub target: Position,
}

/// Sample `frames` evenly spaced frames across the transit; the craft moves on the straight
/// segment while both bodies follow `model`.
pub fn transfer_frames(
    result: &TravelResult,
    origin: &OrbitalBody,
    target: &OrbitalBody,
    model: &OrbitModel,
    frames: usize,
) -> Result<Vec<TransferFrame>, KeplerError> {
    (0..frames)
        .map(|index| {
            let fraction = if frames > 1 {
                index as f64 / (frames - 1) as f64
            } else {
                0.0
            };
            let time = result.departure_time + fraction * result.elapsed_time;
            Ok(TransferFrame {
                index,
                fraction,
                time,
                craft: result.craft_position(fraction),
                origin: model.position(origin, time)?,
                target: model.position(target, time)?,
            })
        })
        .collect()
}
