//! Transfer façade crate: body catalog, destination lookup, travel-time solver, and the
//! round-trip planner built on it.

pub mod catalog;
pub mod destination;
pub mod mission;

pub use facade::*;
pub use solar_orbits as orbits;

mod facade;
