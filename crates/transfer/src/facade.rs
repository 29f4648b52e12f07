//! Re-exported APIs for consumers of the transfer crate.

pub use crate::catalog::{BodyCatalog, CatalogError, DEFAULT_REFERENCE_BODY};
pub use crate::destination::{DestinationError, DestinationRejection};
pub use crate::mission::offers::{
    LaunchWindow, MAX_LAUNCH_TIMES, OfferRequest, TripOffer, WindowError, fastest_per_destination,
    generate_offers,
};
pub use crate::mission::trajectory::{DEFAULT_TRANSFER_FRAMES, TransferFrame, transfer_frames};
pub use crate::mission::travel::{
    ConvergenceError, GuessOutcome, TravelError, TravelQuery, TravelResult, TravelSettings,
    find_travel_time, guess_outcomes, positive_roots,
};
pub use crate::mission::{
    Leg, RoundTripError, RoundTripPlan, RoundTripRequest, plan_round_trip, plan_round_trip_between,
};

pub mod settings {
    use solar_config::SolverConfig;
    use solar_orbits::{KeplerSettings, OrbitModel};

    use crate::mission::travel::TravelSettings;

    /// Kepler iteration bound from solver configuration.
    pub fn kepler_settings(config: &SolverConfig) -> KeplerSettings {
        KeplerSettings {
            tolerance: config.kepler.tolerance,
            max_iterations: config.kepler.max_iterations,
        }
    }

    /// Keplerian position strategy using the configured iteration bound.
    pub fn keplerian_model(config: &SolverConfig) -> OrbitModel {
        OrbitModel::Keplerian(kepler_settings(config))
    }

    /// Travel settings from solver configuration, using the given position strategy.
    pub fn travel_settings(config: &SolverConfig, model: OrbitModel) -> TravelSettings {
        TravelSettings {
            model,
            initial_guesses: config.initial_guesses_years.clone(),
            max_iterations: config.max_iterations,
            step_tolerance: config.step_tolerance,
            residual_tolerance: config.residual_tolerance_au,
        }
    }
}
