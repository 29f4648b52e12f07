//! Mission planning orchestrator: chains an outbound leg, a surface stay, and the return leg.

pub mod offers;
pub mod trajectory;
pub mod travel;

use std::fmt;

use solar_orbits::OrbitalBody;

use crate::catalog::BodyCatalog;
use crate::destination::{self, DestinationError};
use travel::{TravelError, TravelQuery, TravelResult, TravelSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    Outbound,
    Inbound,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Leg::Outbound => "outbound",
            Leg::Inbound => "inbound",
        })
    }
}

/// Top-level round-trip planning error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoundTripError {
    #[error(transparent)]
    Destination(#[from] DestinationError),
    #[error("invalid travel query: {0}")]
    Travel(#[from] TravelError),
    #[error("stay duration must be finite and non-negative, got {0}")]
    InvalidStay(f64),
    #[error("no positive-time solution for the {leg} leg to {target}")]
    NotFound { leg: Leg, target: String },
}

/// Identifiers and timing for a round trip. Times in years, speed in AU/yr.
#[derive(Debug, Clone)]
pub struct RoundTripRequest {
    pub origin: String,
    pub destination: String,
    pub launch_time: f64,
    pub stay_duration: f64,
    pub speed: f64,
}

/// Outbound leg, time on site, and return leg of a planned trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripPlan {
    pub origin: String,
    pub destination: String,
    pub launch_time: f64,
    pub stay_duration: f64,
    pub outbound: TravelResult,
    /// Time from launch until the return departure: outbound transit plus the stay.
    pub total_on_site: f64,
    pub inbound: TravelResult,
}

impl RoundTripPlan {
    /// Outbound transit + stay + return transit.
    pub fn total_duration(&self) -> f64 {
        self.total_on_site + self.inbound.elapsed_time
    }

    pub fn return_time(&self) -> f64 {
        self.launch_time + self.total_duration()
    }
}

/// Resolve the request's identifiers through the destination table and plan both legs.
pub fn plan_round_trip(
    catalog: &BodyCatalog,
    request: &RoundTripRequest,
    settings: &TravelSettings,
) -> Result<RoundTripPlan, RoundTripError> {
    let (origin, destination) =
        destination::resolve_pair(catalog, &request.origin, &request.destination)?;
    plan_round_trip_between(
        origin,
        destination,
        request.launch_time,
        request.stay_duration,
        request.speed,
        settings,
    )
}

/// Plan a round trip between two bodies.
///
/// The return leg departs the destination's position at `launch + outbound + stay` and
/// targets the origin body; no phase adjustment is applied to either body on the way back.
pub fn plan_round_trip_between(
    origin: &OrbitalBody,
    destination: &OrbitalBody,
    launch_time: f64,
    stay_duration: f64,
    speed: f64,
    settings: &TravelSettings,
) -> Result<RoundTripPlan, RoundTripError> {
    destination::ensure_distinct(origin, destination, destination.name())?;
    if !(stay_duration.is_finite() && stay_duration >= 0.0) {
        return Err(RoundTripError::InvalidStay(stay_duration));
    }

    let outbound_query = TravelQuery::new(origin, destination, launch_time, speed)?;
    let outbound = travel::find_travel_time(&outbound_query, settings).ok_or_else(|| {
        RoundTripError::NotFound {
            leg: Leg::Outbound,
            target: destination.name().to_string(),
        }
    })?;

    let total_on_site = outbound.elapsed_time + stay_duration;
    let inbound_query = TravelQuery::new(destination, origin, launch_time + total_on_site, speed)?;
    let inbound = travel::find_travel_time(&inbound_query, settings).ok_or_else(|| {
        RoundTripError::NotFound {
            leg: Leg::Inbound,
            target: origin.name().to_string(),
        }
    })?;

    Ok(RoundTripPlan {
        origin: origin.name().to_string(),
        destination: destination.name().to_string(),
        launch_time,
        stay_duration,
        outbound,
        total_on_site,
        inbound,
    })
}
