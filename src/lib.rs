//! Wahlzeit coordinates: location values for photographed objects
//!
//! This crate provides two interchangeable, immutable representations of a
//! point in 3-D space, Cartesian `(x, y, z)` and spherical
//! `(phi, theta, radius)`, together with the measurements defined on them:
//! Euclidean distance, great-circle central angle and exact equality.
//!
//! Every value comes out of a validating factory and is interned, so equal
//! values share one allocation across the whole process.

pub mod constants;
pub mod coordinates;
pub mod errors;

// Re-export commonly used types
pub use coordinates::algorithms;
pub use coordinates::{CartesianCoordinate, Coordinate, CoordinateKind, SphericCoordinate};
pub use errors::{CoordinateError, Result};
