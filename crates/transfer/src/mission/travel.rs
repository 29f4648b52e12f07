//! Constant-speed, straight-line travel from a departure body to a moving target.
//!
//! The traveller leaves the departure body's position at `t0`; that point stays fixed while
//! the target keeps moving. Travel time is the root of
//! `f(Δt) = |target(t0 + Δt) - origin(t0)| - speed·Δt`.
//!
//! `f` can have several roots as the geometry cycles, and Newton is local, so the search is
//! launched from several initial guesses and the earliest positive root is kept. Newton can
//! still jump over the first crossing, so `[0, min(root, horizon)]` is then scanned at
//! [`SCAN_SAMPLES_PER_PERIOD`] samples per target period and the first downward sign change
//! is bisected. The horizon is `(r_max(origin) + r_max(target)) / speed`; whenever `f(0) > 0`
//! the gap is closed by then, so a query only goes unanswered when the bodies start together
//! and the target outruns the craft.

use solar_core::time::years_to_days;
use solar_orbits::{KeplerError, OrbitModel, OrbitalBody, Position};

mod root;

pub use root::{ConvergenceError, MAX_SCAN_SAMPLES, RootSettings, find_root, first_crossing};

/// Scan resolution of the earliest-crossing pass.
pub const SCAN_SAMPLES_PER_PERIOD: f64 = 128.0;

/// Roots at or below this (years) are the departure instant itself, not a transit.
pub const MIN_ELAPSED_TIME: f64 = 1e-9;

/// Root-search configuration for travel queries. Times are in years, distances in AU.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelSettings {
    pub model: OrbitModel,
    pub initial_guesses: Vec<f64>,
    pub max_iterations: usize,
    pub step_tolerance: f64,
    pub residual_tolerance: f64,
}

impl Default for TravelSettings {
    fn default() -> Self {
        Self {
            model: OrbitModel::Parametric,
            initial_guesses: vec![0.01, 0.1, 1.0, 5.0],
            max_iterations: 100,
            step_tolerance: 1e-10,
            residual_tolerance: 1e-8,
        }
    }
}

impl TravelSettings {
    pub fn with_model(mut self, model: OrbitModel) -> Self {
        self.model = model;
        self
    }

    pub fn root_settings(&self) -> RootSettings {
        RootSettings {
            max_iterations: self.max_iterations,
            step_tolerance: self.step_tolerance,
            residual_tolerance: self.residual_tolerance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum TravelError {
    #[error("transit speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),
    #[error("departure time must be finite, got {0}")]
    InvalidDepartureTime(f64),
}

/// One travel request: leave `origin` at `departure_time` (years) at `speed` (AU/yr).
#[derive(Debug, Clone, Copy)]
pub struct TravelQuery<'a> {
    pub origin: &'a OrbitalBody,
    pub target: &'a OrbitalBody,
    pub departure_time: f64,
    pub speed: f64,
}

impl<'a> TravelQuery<'a> {
    pub fn new(
        origin: &'a OrbitalBody,
        target: &'a OrbitalBody,
        departure_time: f64,
        speed: f64,
    ) -> Result<Self, TravelError> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(TravelError::InvalidSpeed(speed));
        }
        if !departure_time.is_finite() {
            return Err(TravelError::InvalidDepartureTime(departure_time));
        }
        Ok(Self {
            origin,
            target,
            departure_time,
            speed,
        })
    }

    /// Time after which the straight-line gap is certainly closed: the widest possible
    /// separation of the two orbits divided by the speed.
    pub fn search_horizon(&self) -> f64 {
        (aphelion(self.origin) + aphelion(self.target)) / self.speed
    }
}

fn aphelion(body: &OrbitalBody) -> f64 {
    body.semi_major_axis() * (1.0 + body.eccentricity())
}

/// `f(Δt)` for a departure point fixed at `departure`.
fn gap(
    query: TravelQuery<'_>,
    model: OrbitModel,
    departure: Position,
) -> impl Fn(f64) -> Result<f64, KeplerError> {
    move |dt| {
        model
            .position(query.target, query.departure_time + dt)
            .map(|target| departure.distance_to(&target) - query.speed * dt)
    }
}

/// Earliest positive-time solution of a travel query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelResult {
    pub departure_time: f64,
    pub elapsed_time: f64,
    pub speed: f64,
    pub distance_traveled: f64,
    pub departure_position: Position,
    pub arrival_position: Position,
}

impl TravelResult {
    pub fn arrival_time(&self) -> f64 {
        self.departure_time + self.elapsed_time
    }

    pub fn elapsed_days(&self) -> f64 {
        years_to_days(self.elapsed_time)
    }

    /// Craft position after `fraction` of the transit (0 = departure, 1 = arrival).
    pub fn craft_position(&self, fraction: f64) -> Position {
        self.departure_position
            .lerp(&self.arrival_position, fraction.clamp(0.0, 1.0))
    }
}

/// Result of the root search launched from one initial guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessOutcome {
    pub guess: f64,
    pub outcome: Result<f64, ConvergenceError>,
}

/// Run the root search from every configured guess.
pub fn guess_outcomes(query: &TravelQuery<'_>, settings: &TravelSettings) -> Vec<GuessOutcome> {
    let departure = match settings.model.position(query.origin, query.departure_time) {
        Ok(position) => position,
        Err(err) => {
            return settings
                .initial_guesses
                .iter()
                .map(|&guess| GuessOutcome {
                    guess,
                    outcome: Err(ConvergenceError::Objective(err)),
                })
                .collect();
        }
    };

    let objective = gap(*query, settings.model, departure);
    let root_settings = settings.root_settings();

    settings
        .initial_guesses
        .iter()
        .map(|&guess| GuessOutcome {
            guess,
            outcome: find_root(&objective, guess, &root_settings),
        })
        .collect()
}

/// Distinct positive roots found across all guesses, ascending.
pub fn positive_roots(query: &TravelQuery<'_>, settings: &TravelSettings) -> Vec<f64> {
    let mut roots: Vec<f64> = guess_outcomes(query, settings)
        .into_iter()
        .filter_map(|g| g.outcome.ok())
        .filter(|&dt| dt > MIN_ELAPSED_TIME)
        .collect();
    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|later, earlier| (*later - *earlier).abs() <= 1e-9 * (1.0 + earlier.abs()));
    roots
}

/// Earliest positive travel time, or `None` when the target is never reached.
pub fn find_travel_time(query: &TravelQuery<'_>, settings: &TravelSettings) -> Option<TravelResult> {
    let departure_position = settings
        .model
        .position(query.origin, query.departure_time)
        .ok()?;
    let newton = positive_roots(query, settings).into_iter().next();
    let elapsed_time = earliest_crossing(query, settings, departure_position, newton)?;
    let arrival_position = settings
        .model
        .position(query.target, query.departure_time + elapsed_time)
        .ok()?;

    Some(TravelResult {
        departure_time: query.departure_time,
        elapsed_time,
        speed: query.speed,
        distance_traveled: query.speed * elapsed_time,
        departure_position,
        arrival_position,
    })
}

/// Scan ahead of the Newton root (or up to the horizon) for an earlier crossing.
fn earliest_crossing(
    query: &TravelQuery<'_>,
    settings: &TravelSettings,
    departure: Position,
    newton: Option<f64>,
) -> Option<f64> {
    let horizon = query.search_horizon();
    let limit = newton.map_or(horizon, |root| root.min(horizon));
    let step = query.target.period().min(horizon) / SCAN_SAMPLES_PER_PERIOD;

    match first_crossing(
        gap(*query, settings.model, departure),
        0.0,
        limit,
        step,
        &settings.root_settings(),
    ) {
        Ok(Some(crossing)) if crossing > MIN_ELAPSED_TIME => Some(crossing),
        _ => newton,
    }
}
