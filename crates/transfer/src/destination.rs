//! Static lookup from destination identifiers to catalog bodies.

use std::fmt;

use solar_orbits::OrbitalBody;
use thiserror::Error;

use crate::catalog::BodyCatalog;

/// Destination identifiers (matched case-insensitively) and the catalog body they name.
/// Polish planet names are accepted as aliases.
pub const DESTINATIONS: &[(&str, &str)] = &[
    ("mercury", "MERCURY"),
    ("merkury", "MERCURY"),
    ("venus", "VENUS"),
    ("wenus", "VENUS"),
    ("earth", "EARTH"),
    ("ziemia", "EARTH"),
    ("mars", "MARS"),
    ("jupiter", "JUPITER"),
    ("jowisz", "JUPITER"),
    ("saturn", "SATURN"),
    ("uranus", "URANUS"),
    ("uran", "URANUS"),
    ("neptune", "NEPTUNE"),
    ("neptun", "NEPTUNE"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationRejection {
    NotInTable,
    MissingFromCatalog,
    SameAsOrigin,
}

impl fmt::Display for DestinationRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DestinationRejection::NotInTable => "not in the destination table",
            DestinationRejection::MissingFromCatalog => "body is missing from the catalog",
            DestinationRejection::SameAsOrigin => "destination is the departure body",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DestinationError {
    #[error("unknown destination '{id}': {reason}")]
    UnknownDestination {
        id: String,
        reason: DestinationRejection,
    },
}

impl DestinationError {
    fn new(id: &str, reason: DestinationRejection) -> Self {
        DestinationError::UnknownDestination {
            id: id.to_string(),
            reason,
        }
    }

    pub fn reason(&self) -> DestinationRejection {
        match self {
            DestinationError::UnknownDestination { reason, .. } => *reason,
        }
    }
}

/// Catalog body name for a destination identifier.
pub fn body_name(id: &str) -> Option<&'static str> {
    let id = id.trim();
    DESTINATIONS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(id))
        .map(|(_, name)| *name)
}

/// Resolve an identifier to its catalog body.
pub fn resolve<'a>(catalog: &'a BodyCatalog, id: &str) -> Result<&'a OrbitalBody, DestinationError> {
    let name = body_name(id).ok_or_else(|| DestinationError::new(id, DestinationRejection::NotInTable))?;
    catalog
        .get(name)
        .ok_or_else(|| DestinationError::new(id, DestinationRejection::MissingFromCatalog))
}

/// Resolve an origin/destination pair, rejecting travel to the departure body itself.
pub fn resolve_pair<'a>(
    catalog: &'a BodyCatalog,
    origin_id: &str,
    destination_id: &str,
) -> Result<(&'a OrbitalBody, &'a OrbitalBody), DestinationError> {
    let origin = resolve(catalog, origin_id)?;
    let destination = resolve(catalog, destination_id)?;
    ensure_distinct(origin, destination, destination_id)?;
    Ok((origin, destination))
}

pub(crate) fn ensure_distinct(
    origin: &OrbitalBody,
    destination: &OrbitalBody,
    destination_id: &str,
) -> Result<(), DestinationError> {
    if origin.is_named(destination.name()) {
        return Err(DestinationError::new(
            destination_id,
            DestinationRejection::SameAsOrigin,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BodyCatalog {
        BodyCatalog::from_bodies(vec![
            OrbitalBody::circular("EARTH", 1.0, 1.0).unwrap(),
            OrbitalBody::circular("MARS", 1.524, 1.88).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn aliases_resolve_to_catalog_names() {
        assert_eq!(body_name("Mars"), Some("MARS"));
        assert_eq!(body_name("JOWISZ"), Some("JUPITER"));
        assert_eq!(body_name(" ziemia "), Some("EARTH"));
        assert_eq!(body_name("pluto"), None);
    }

    #[test]
    fn resolution_failures_carry_a_reason() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, "pluto").unwrap_err().reason(),
            DestinationRejection::NotInTable
        );
        assert_eq!(
            resolve(&catalog, "venus").unwrap_err().reason(),
            DestinationRejection::MissingFromCatalog
        );
        assert_eq!(
            resolve_pair(&catalog, "earth", "Ziemia").unwrap_err().reason(),
            DestinationRejection::SameAsOrigin
        );
        let (origin, destination) = resolve_pair(&catalog, "earth", "mars").unwrap();
        assert_eq!(origin.name(), "EARTH");
        assert_eq!(destination.name(), "MARS");
    }
}
