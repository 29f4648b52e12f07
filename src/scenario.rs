//! On-disk scenario: a body catalog plus solver settings, loaded together.

use std::path::Path;

use solar_config::{ConfigError, SolverConfig};
use solar_orbits::OrbitModel;
use solar_transfer::settings;
use solar_transfer::{BodyCatalog, CatalogError, TravelSettings};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to load body catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("failed to load solver settings: {0}")]
    Solver(#[from] ConfigError),
}

/// Which position strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelChoice {
    #[default]
    Parametric,
    Keplerian,
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub catalog: BodyCatalog,
    pub solver: SolverConfig,
}

impl Scenario {
    /// Load the catalog and, when given, the solver file. A missing solver path means defaults.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        bodies: P,
        solver: Option<Q>,
    ) -> Result<Self, ScenarioError> {
        let catalog = BodyCatalog::load(bodies)?;
        let solver = match solver {
            Some(path) => solar_config::load_solver_config(path)?,
            None => SolverConfig::default(),
        };
        Ok(Self { catalog, solver })
    }

    pub fn model(&self, choice: ModelChoice) -> OrbitModel {
        match choice {
            ModelChoice::Parametric => OrbitModel::Parametric,
            ModelChoice::Keplerian => settings::keplerian_model(&self.solver),
        }
    }

    pub fn travel_settings(&self, choice: ModelChoice) -> TravelSettings {
        settings::travel_settings(&self.solver, self.model(choice))
    }
}
