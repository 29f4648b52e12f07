//! Validated orbital bodies and in-plane positions.

use solar_core::vector::{self, Vector2};
use thiserror::Error;

use crate::kepler::{self, KeplerError, KeplerSettings};

/// Largest accepted relative gap between the given semi-minor axis and `a·√(1-e²)`.
pub const AXIS_CONSISTENCY_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    #[error("invalid configuration for '{body}': {reason}")]
    InvalidConfiguration { body: String, reason: String },
}

impl OrbitError {
    fn invalid(body: &str, reason: impl Into<String>) -> Self {
        OrbitError::InvalidConfiguration {
            body: body.to_string(),
            reason: reason.into(),
        }
    }
}

/// Position in the orbital plane (AU), Sun at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_array(&self) -> Vector2 {
        [self.x, self.y]
    }

    /// Distance from the Sun.
    pub fn radius(&self) -> f64 {
        vector::norm(&self.as_array())
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        vector::norm(&vector::sub(&other.as_array(), &self.as_array()))
    }

    /// Point on the straight segment from `self` (fraction 0) to `other` (fraction 1).
    pub fn lerp(&self, other: &Position, fraction: f64) -> Position {
        vector::lerp(&self.as_array(), &other.as_array(), fraction).into()
    }
}

impl From<Vector2> for Position {
    fn from(v: Vector2) -> Self {
        Position { x: v[0], y: v[1] }
    }
}

/// Immutable orbital record. Construction enforces the catalog invariants, so every
/// `OrbitalBody` in circulation is safe to hand to either position strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalBody {
    name: String,
    semi_major_axis: f64,
    semi_minor_axis: f64,
    eccentricity: f64,
    period: f64,
    phase: f64,
}

impl OrbitalBody {
    /// Validate and build a body. `semi_minor_axis` defaults to `a·√(1-e²)` when absent.
    ///
    /// Rejects non-positive axes, eccentricity outside `[0, 1)`, a non-positive period, a
    /// semi-minor axis larger than the semi-major axis, and a semi-minor axis that disagrees
    /// with `a·√(1-e²)` by more than [`AXIS_CONSISTENCY_TOLERANCE`] of `a`.
    pub fn new(
        name: impl Into<String>,
        semi_major_axis: f64,
        semi_minor_axis: Option<f64>,
        eccentricity: f64,
        period: f64,
        phase: f64,
    ) -> Result<Self, OrbitError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OrbitError::invalid(&name, "name must not be empty"));
        }
        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            return Err(OrbitError::invalid(
                &name,
                format!("semi-major axis must be positive, got {semi_major_axis}"),
            ));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::invalid(
                &name,
                format!("eccentricity must lie in [0, 1), got {eccentricity}"),
            ));
        }
        if !(period.is_finite() && period > 0.0) {
            return Err(OrbitError::invalid(
                &name,
                format!("period must be positive, got {period}"),
            ));
        }
        if !phase.is_finite() {
            return Err(OrbitError::invalid(&name, "phase must be finite"));
        }

        let expected_minor = semi_major_axis * (1.0 - eccentricity * eccentricity).sqrt();
        let semi_minor_axis = match semi_minor_axis {
            None => expected_minor,
            Some(b) => {
                if !(b.is_finite() && b > 0.0) {
                    return Err(OrbitError::invalid(
                        &name,
                        format!("semi-minor axis must be positive, got {b}"),
                    ));
                }
                if b > semi_major_axis {
                    return Err(OrbitError::invalid(
                        &name,
                        format!("semi-minor axis {b} exceeds semi-major axis {semi_major_axis}"),
                    ));
                }
                if (b - expected_minor).abs() > AXIS_CONSISTENCY_TOLERANCE * semi_major_axis {
                    return Err(OrbitError::invalid(
                        &name,
                        format!(
                            "semi-minor axis {b} disagrees with a·sqrt(1-e²) = {expected_minor:.6}"
                        ),
                    ));
                }
                b
            }
        };

        Ok(Self {
            name,
            semi_major_axis,
            semi_minor_axis,
            eccentricity,
            period,
            phase,
        })
    }

    /// Circular orbit with zero phase.
    pub fn circular(
        name: impl Into<String>,
        radius: f64,
        period: f64,
    ) -> Result<Self, OrbitError> {
        Self::new(name, radius, None, 0.0, period, 0.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Centre-to-focus distance `c = a·e`.
    pub fn focal_distance(&self) -> f64 {
        self.semi_major_axis * self.eccentricity
    }

    /// Case-insensitive name match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Point on the ellipse for parametric angle `angle`, focus at the origin.
    pub fn point_at(&self, angle: f64) -> Position {
        Position {
            x: self.semi_major_axis * (angle.cos() - self.eccentricity),
            y: self.semi_minor_axis * angle.sin(),
        }
    }

    /// Constant-angular-rate approximation: `θ = 2π·t/T + phase` swept uniformly.
    pub fn parametric_position(&self, t: f64) -> Position {
        self.point_at(kepler::mean_anomaly(t, self.period, self.phase))
    }

    /// Kepler-equation position: mean anomaly → eccentric anomaly → true anomaly.
    pub fn keplerian_position(
        &self,
        t: f64,
        settings: &KeplerSettings,
    ) -> Result<Position, KeplerError> {
        let mean = kepler::mean_anomaly(t, self.period, self.phase);
        let ecc_anomaly = kepler::solve_eccentric_anomaly_with(mean, self.eccentricity, settings)?;
        Ok(self.point_at(kepler::true_anomaly(ecc_anomaly, self.eccentricity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derives_semi_minor_axis() {
        let mars = OrbitalBody::new("MARS", 1.524, None, 0.0934, 1.88, 0.0).unwrap();
        assert_relative_eq!(
            mars.semi_minor_axis(),
            1.524 * (1.0 - 0.0934_f64 * 0.0934).sqrt(),
            epsilon = 1e-15
        );
        assert_relative_eq!(mars.focal_distance(), 1.524 * 0.0934, epsilon = 1e-15);
    }

    #[test]
    fn rejects_inconsistent_semi_minor_axis() {
        // Saturn with b = 488.1149 Gm against a = 1430 Gm, c = 81.51 Gm.
        let a = 1430.0;
        let e = 81.51 / a;
        let err = OrbitalBody::new("SATURN", a, Some(488.1149), e, 29.46, 0.0).unwrap_err();
        assert!(matches!(err, OrbitError::InvalidConfiguration { ref body, .. } if body == "SATURN"));

        // The corrected table entry passes.
        let e = 80.08 / a;
        assert!(OrbitalBody::new("SATURN", a, Some(1428.9), e, 29.46, 0.0).is_ok());
    }

    #[test]
    fn rejects_malformed_elements() {
        assert!(OrbitalBody::new("X", -1.0, None, 0.0, 1.0, 0.0).is_err());
        assert!(OrbitalBody::new("X", 1.0, None, 1.0, 1.0, 0.0).is_err());
        assert!(OrbitalBody::new("X", 1.0, None, -0.2, 1.0, 0.0).is_err());
        assert!(OrbitalBody::new("X", 1.0, None, 0.0, 0.0, 0.0).is_err());
        assert!(OrbitalBody::new("X", 1.0, Some(1.5), 0.0, 1.0, 0.0).is_err());
        assert!(OrbitalBody::new(" ", 1.0, None, 0.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn perihelion_sits_at_a_times_one_minus_e() {
        let body = OrbitalBody::new("MERCURY", 0.387, None, 0.2056, 0.241, 0.0).unwrap();
        let settings = KeplerSettings::default();
        let at_epoch = body.keplerian_position(0.0, &settings).unwrap();
        assert_relative_eq!(at_epoch.radius(), 0.387 * (1.0 - 0.2056), epsilon = 1e-12);
        assert_relative_eq!(at_epoch.y, 0.0);
    }

    #[test]
    fn name_lookup_ignores_case() {
        let earth = OrbitalBody::circular("EARTH", 1.0, 1.0).unwrap();
        assert!(earth.is_named("earth"));
        assert!(earth.is_named(" Earth "));
        assert!(!earth.is_named("mars"));
    }
}
