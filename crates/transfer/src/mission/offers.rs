//! Trip-offer grids: independent round trips over destinations × launch times, computed in
//! parallel on the rayon pool.

use rayon::prelude::*;
use thiserror::Error;

use crate::catalog::BodyCatalog;

use super::travel::TravelSettings;
use super::{RoundTripError, RoundTripPlan, RoundTripRequest, plan_round_trip};

/// Largest launch grid a single window may expand to.
pub const MAX_LAUNCH_TIMES: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WindowError {
    #[error("launch window needs finite bounds and step, got start {start}, end {end}, step {step}")]
    NonFinite { start: f64, end: f64, step: f64 },
    #[error("launch window expands to {count} launch times (limit {})", MAX_LAUNCH_TIMES)]
    TooManyLaunches { count: f64 },
}

/// Evenly spaced launch times (years), `end` included when it falls on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchWindow {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl LaunchWindow {
    pub fn single(launch_time: f64) -> Self {
        Self {
            start: launch_time,
            end: launch_time,
            step: 0.0,
        }
    }

    /// A non-positive step or an `end` before `start` yields `start` alone.
    pub fn times(&self) -> Result<Vec<f64>, WindowError> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            return Err(WindowError::NonFinite {
                start: self.start,
                end: self.end,
                step: self.step,
            });
        }
        if self.step <= 0.0 || self.end <= self.start {
            return Ok(vec![self.start]);
        }
        let intervals = ((self.end - self.start) / self.step + 1e-9).floor();
        if intervals + 1.0 > MAX_LAUNCH_TIMES as f64 {
            return Err(WindowError::TooManyLaunches {
                count: intervals + 1.0,
            });
        }
        Ok((0..=intervals as usize)
            .map(|i| self.start + self.step * i as f64)
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct OfferRequest {
    pub origin: String,
    pub destinations: Vec<String>,
    pub window: LaunchWindow,
    pub stay_duration: f64,
    pub speed: f64,
}

#[derive(Debug, Clone)]
pub struct TripOffer {
    pub destination: String,
    pub launch_time: f64,
    pub outcome: Result<RoundTripPlan, RoundTripError>,
}

/// Plan every (destination, launch time) cell. Offers come back in request order:
/// destinations outermost, launch times ascending. Only a malformed window fails the
/// whole grid; unsolvable cells carry their own error.
pub fn generate_offers(
    catalog: &BodyCatalog,
    request: &OfferRequest,
    settings: &TravelSettings,
) -> Result<Vec<TripOffer>, WindowError> {
    let launch_times = request.window.times()?;
    let cells: Vec<(&str, f64)> = request
        .destinations
        .iter()
        .flat_map(|destination| {
            launch_times
                .iter()
                .map(move |&launch_time| (destination.as_str(), launch_time))
        })
        .collect();

    Ok(cells
        .par_iter()
        .map(|&(destination, launch_time)| {
            let round_trip = RoundTripRequest {
                origin: request.origin.clone(),
                destination: destination.to_string(),
                launch_time,
                stay_duration: request.stay_duration,
                speed: request.speed,
            };
            TripOffer {
                destination: destination.to_string(),
                launch_time,
                outcome: plan_round_trip(catalog, &round_trip, settings),
            }
        })
        .collect())
}

/// Shortest successful round trip per destination, in first-seen destination order.
pub fn fastest_per_destination(offers: &[TripOffer]) -> Vec<&TripOffer> {
    let mut best: Vec<&TripOffer> = Vec::new();
    for offer in offers {
        let Ok(plan) = &offer.outcome else {
            continue;
        };
        match best
            .iter_mut()
            .find(|existing| existing.destination.eq_ignore_ascii_case(&offer.destination))
        {
            Some(existing) => {
                if let Ok(current) = &existing.outcome {
                    if plan.total_duration() < current.total_duration() {
                        *existing = offer;
                    }
                }
            }
            None => best.push(offer),
        }
    }
    best
}
