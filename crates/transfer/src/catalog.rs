//! Validated body catalog built once at start-up from configuration records.

use std::path::Path;

use solar_config::{BodyConfig, ConfigError, DistanceUnit};
use solar_core::units::gm_to_au;
use solar_orbits::kepler::kepler_third_law_period;
use solar_orbits::{OrbitError, OrbitalBody};
use thiserror::Error;

/// Body whose axis/period pair anchors Kepler's third law for records without a period.
pub const DEFAULT_REFERENCE_BODY: &str = "EARTH";

/// Largest accepted gap between a given eccentricity and `focal_distance / semi_major_axis`.
const ECCENTRICITY_CONSISTENCY_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Orbit(#[from] OrbitError),
    #[error("body '{0}' appears more than once in the catalog")]
    Duplicate(String),
    #[error("'{body}' has no period and reference body '{reference}' does not provide one")]
    MissingReference { body: String, reference: String },
}

/// Immutable lookup table of orbital bodies keyed by case-insensitive name.
#[derive(Debug, Clone)]
pub struct BodyCatalog {
    bodies: Vec<OrbitalBody>,
}

impl BodyCatalog {
    /// Load and validate a catalog, deriving missing periods against [`DEFAULT_REFERENCE_BODY`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let configs = solar_config::load_bodies(path)?;
        Self::from_configs(&configs, DEFAULT_REFERENCE_BODY)
    }

    pub fn from_configs(configs: &[BodyConfig], reference: &str) -> Result<Self, CatalogError> {
        let anchor = configs
            .iter()
            .find(|cfg| cfg.name.eq_ignore_ascii_case(reference))
            .and_then(|cfg| cfg.period_years.map(|period| (to_au(cfg.semi_major_axis, cfg.unit), period)));

        let bodies = configs
            .iter()
            .map(|cfg| {
                let period = match (cfg.period_years, anchor) {
                    (Some(period), _) => period,
                    (None, Some((reference_axis, reference_period))) => kepler_third_law_period(
                        to_au(cfg.semi_major_axis, cfg.unit),
                        reference_axis,
                        reference_period,
                    ),
                    (None, None) => {
                        return Err(CatalogError::MissingReference {
                            body: cfg.name.clone(),
                            reference: reference.to_string(),
                        });
                    }
                };
                body_from_config(cfg, period)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_bodies(bodies)
    }

    pub fn from_bodies(bodies: Vec<OrbitalBody>) -> Result<Self, CatalogError> {
        for (idx, body) in bodies.iter().enumerate() {
            if bodies[..idx].iter().any(|other| other.is_named(body.name())) {
                return Err(CatalogError::Duplicate(body.name().to_string()));
            }
        }
        Ok(Self { bodies })
    }

    pub fn get(&self, name: &str) -> Option<&OrbitalBody> {
        self.bodies.iter().find(|body| body.is_named(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitalBody> {
        self.bodies.iter()
    }

    pub fn bodies(&self) -> &[OrbitalBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn to_au(value: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Au => value,
        DistanceUnit::Gm => gm_to_au(value),
    }
}

fn body_from_config(cfg: &BodyConfig, period: f64) -> Result<OrbitalBody, CatalogError> {
    let eccentricity = match (cfg.eccentricity, cfg.focal_distance) {
        (Some(e), None) => e,
        (None, Some(c)) => c / cfg.semi_major_axis,
        (None, None) => 0.0,
        (Some(e), Some(c)) => {
            let derived = c / cfg.semi_major_axis;
            if (derived - e).abs() > ECCENTRICITY_CONSISTENCY_TOLERANCE {
                return Err(OrbitError::InvalidConfiguration {
                    body: cfg.name.clone(),
                    reason: format!(
                        "eccentricity {e} disagrees with focal distance ratio {derived:.6}"
                    ),
                }
                .into());
            }
            e
        }
    };

    Ok(OrbitalBody::new(
        cfg.name.clone(),
        to_au(cfg.semi_major_axis, cfg.unit),
        cfg.semi_minor_axis.map(|b| to_au(b, cfg.unit)),
        eccentricity,
        period,
        cfg.phase_rad,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, a: f64, period: Option<f64>) -> BodyConfig {
        BodyConfig {
            name: name.to_string(),
            semi_major_axis: a,
            semi_minor_axis: None,
            eccentricity: None,
            focal_distance: None,
            period_years: period,
            phase_rad: 0.0,
            unit: DistanceUnit::Au,
        }
    }

    #[test]
    fn derives_period_from_reference() {
        let configs = [record("EARTH", 1.0, Some(1.0)), record("MARS", 1.524, None)];
        let catalog = BodyCatalog::from_configs(&configs, "earth").unwrap();
        let mars = catalog.get("mars").unwrap();
        assert!((mars.period() - 1.524_f64.powf(1.5)).abs() < 1e-12);
    }

    #[test]
    fn missing_reference_period_is_reported() {
        let configs = [record("EARTH", 1.0, None), record("MARS", 1.524, None)];
        assert!(matches!(
            BodyCatalog::from_configs(&configs, "EARTH"),
            Err(CatalogError::MissingReference { .. })
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let configs = [record("EARTH", 1.0, Some(1.0)), record("earth", 1.1, Some(1.2))];
        assert!(matches!(
            BodyCatalog::from_configs(&configs, "EARTH"),
            Err(CatalogError::Duplicate(name)) if name == "earth"
        ));
    }

    #[test]
    fn gigametre_records_convert_to_au() {
        let mut earth = record("EARTH", 150.0, Some(1.0));
        earth.semi_minor_axis = Some(149.9783);
        earth.focal_distance = Some(2.55);
        earth.unit = DistanceUnit::Gm;
        let catalog = BodyCatalog::from_configs(&[earth], "EARTH").unwrap();
        let body = catalog.get("EARTH").unwrap();
        assert!((body.semi_major_axis() - 150.0 / 149.597_870_7).abs() < 1e-12);
        assert!((body.eccentricity() - 2.55 / 150.0).abs() < 1e-15);
    }

    #[test]
    fn conflicting_shape_parameters_are_invalid() {
        let mut mars = record("MARS", 1.524, Some(1.88));
        mars.eccentricity = Some(0.0934);
        mars.focal_distance = Some(0.5);
        assert!(matches!(
            BodyCatalog::from_configs(&[mars], "EARTH"),
            Err(CatalogError::Orbit(OrbitError::InvalidConfiguration { .. }))
        ));
    }
}
