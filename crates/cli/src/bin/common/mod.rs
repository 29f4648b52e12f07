//! Arguments and helpers shared by the binaries. The report helpers serve only the
//! binaries that solve legs, so each carries its own `dead_code` allowance.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use solar_travel_sim::core::units::au_per_year_to_kms;
use solar_travel_sim::export::report::LegReport;
use solar_travel_sim::scenario::{ModelChoice, Scenario};
use solar_travel_sim::transfer::{GuessOutcome, TravelResult};

const DEFAULT_SOLVER_PATH: &str = "configs/solver.toml";

#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Body catalog: directory of TOML records, a single TOML record, or a YAML list
    #[arg(long, default_value = "configs/bodies")]
    pub bodies: PathBuf,

    /// Solver settings TOML (defaults to configs/solver.toml when present)
    #[arg(long)]
    pub solver: Option<PathBuf>,

    /// Position strategy for the bodies
    #[arg(long, value_enum, default_value_t = ModelArg::Parametric)]
    pub model: ModelArg,

    /// Print solver diagnostics to stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
pub enum ModelArg {
    Parametric,
    Keplerian,
}

impl From<ModelArg> for ModelChoice {
    fn from(value: ModelArg) -> Self {
        match value {
            ModelArg::Parametric => ModelChoice::Parametric,
            ModelArg::Keplerian => ModelChoice::Keplerian,
        }
    }
}

impl ScenarioArgs {
    pub fn load(&self) -> anyhow::Result<Scenario> {
        let solver = match &self.solver {
            Some(path) => Some(path.clone()),
            None => Some(PathBuf::from(DEFAULT_SOLVER_PATH)).filter(|p| p.is_file()),
        };
        let scenario = Scenario::load(&self.bodies, solver.as_deref())
            .with_context(|| format!("loading scenario from {}", self.bodies.display()))?;
        if self.verbose {
            let solver_label = solver
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string());
            eprintln!(
                "Loaded {} bodies from {} (solver: {solver_label})",
                scenario.catalog.len(),
                self.bodies.display(),
            );
        }
        Ok(scenario)
    }

    pub fn model(&self) -> ModelChoice {
        self.model.into()
    }
}

#[allow(dead_code)]
pub fn leg_report(origin: &str, target: &str, leg: &TravelResult) -> LegReport {
    LegReport {
        origin: origin.to_string(),
        target: target.to_string(),
        departure_time_years: leg.departure_time,
        elapsed_years: leg.elapsed_time,
        elapsed_days: leg.elapsed_days(),
        arrival_time_years: leg.arrival_time(),
        speed_au_per_year: leg.speed,
        speed_km_s: au_per_year_to_kms(leg.speed),
        distance_au: leg.distance_traveled,
        departure_position_au: leg.departure_position.as_array(),
        arrival_position_au: leg.arrival_position.as_array(),
    }
}

#[allow(dead_code)]
pub fn print_leg(label: &str, origin: &str, target: &str, leg: &TravelResult) {
    println!(
        "{label:<10}: {origin} -> {target}, depart t = {:.4} yr, transit = {:.2} days ({:.4} yr), distance = {:.4} AU",
        leg.departure_time,
        leg.elapsed_days(),
        leg.elapsed_time,
        leg.distance_traveled
    );
}

#[allow(dead_code)]
pub fn print_guesses(outcomes: &[GuessOutcome]) {
    for outcome in outcomes {
        match &outcome.outcome {
            Ok(root) => eprintln!("  guess {:>6.3} yr -> root {root:.9} yr", outcome.guess),
            Err(err) => eprintln!("  guess {:>6.3} yr -> {err}", outcome.guess),
        }
    }
}
