//! Planar two-body orbit helpers: validated orbital bodies, the Kepler solver, and the
//! two position strategies (parametric and Keplerian) shared by the travel solver and
//! the rendering collaborators.
//!
//! Positions use a focus-at-origin convention: the Sun sits at `(0, 0)` and each
//! ellipse is centred at `(-a·e, 0)`.

pub mod body;
pub mod kepler;
pub mod model;
pub mod sampling;

pub use body::{OrbitError, OrbitalBody, Position};
pub use kepler::{KeplerError, KeplerSettings};
pub use model::OrbitModel;
pub use sampling::{TrackSample, orbit_outline, sample_track};
