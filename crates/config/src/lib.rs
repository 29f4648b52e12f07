//! Configuration models and loaders for the solar travel simulator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Length unit used by a body record.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Au,
    /// Gigametres.
    Gm,
}

/// Orbital body record parsed from catalog manifests.
///
/// Either `eccentricity` or `focal_distance` (the centre-to-Sun offset `c`) describes the
/// ellipse shape; with neither the orbit is circular. A missing `period_years` is derived
/// from Kepler's third law when the catalog is built.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub semi_major_axis: f64,
    #[serde(default)]
    pub semi_minor_axis: Option<f64>,
    #[serde(default)]
    pub eccentricity: Option<f64>,
    #[serde(default)]
    pub focal_distance: Option<f64>,
    #[serde(default)]
    pub period_years: Option<f64>,
    #[serde(default)]
    pub phase_rad: f64,
    #[serde(default)]
    pub unit: DistanceUnit,
}

/// Travel-time root-finder settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub initial_guesses_years: Vec<f64>,
    pub max_iterations: usize,
    pub step_tolerance: f64,
    pub residual_tolerance_au: f64,
    pub kepler: KeplerConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guesses_years: vec![0.01, 0.1, 1.0, 5.0],
            max_iterations: 100,
            step_tolerance: 1e-10,
            residual_tolerance_au: 1e-8,
            kepler: KeplerConfig::default(),
        }
    }
}

/// Kepler-equation iteration bound.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct KeplerConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for KeplerConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 50,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no body records found at {0}")]
    Empty(PathBuf),
}

/// Load body records from a directory of TOML files, a single TOML file, or a YAML list.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let path = path.as_ref();
    let bodies: Vec<BodyConfig> = load_records(path)?;
    if bodies.is_empty() {
        return Err(ConfigError::Empty(path.to_path_buf()));
    }
    Ok(bodies)
}

/// Load solver settings from a TOML file; absent fields take their defaults.
pub fn load_solver_config<P: AsRef<Path>>(path: P) -> Result<SolverConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
