//! Planar two-body travel simulator.
//!
//! The library crates carry the physics: `orbits` for body positions and the Kepler
//! solver, `transfer` for the travel-time solver and round-trip planner. This crate ties them
//! to on-disk scenarios and drives frame-by-frame rendering so front-ends can share them.

pub mod animation;
pub mod scenario;

pub use solar_config as config;
pub use solar_core as core;
pub use solar_export as export;
pub use solar_orbits as orbits;
pub use solar_transfer as transfer;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
