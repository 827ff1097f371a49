//! # Coordinate Module
//!
//! Two interchangeable representations of a point in 3-D space:
//!
//! - [`CartesianCoordinate`] over `(x, y, z)`
//! - [`SphericCoordinate`] over `(phi, theta, radius)`, angles in degrees
//!
//! Both implement [`Coordinate`], so any pair of coordinates can be compared
//! and measured without knowing which representation either side holds. The
//! measurements themselves live in [`algorithms`] and are written once
//! against the trait.
//!
//! ## Construction and sharing
//!
//! Values are immutable and only come out of validating factories, which
//! intern the result: two constructions of the same value return the same
//! [`Arc`](std::sync::Arc).
//!
//! ```rust
//! use std::sync::Arc;
//! use wahlzeit_coordinates::{CartesianCoordinate, Coordinate, SphericCoordinate};
//!
//! let a = CartesianCoordinate::new(7.0, 4.0, 3.0).unwrap();
//! let b = CartesianCoordinate::new(7.0, 4.0, 3.0).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! let west = SphericCoordinate::new(180.0, 90.0, 1.0).unwrap();
//! let east = CartesianCoordinate::new(1.0, 0.0, 0.0).unwrap();
//! let distance = west.cartesian_distance(&*east).unwrap();
//! assert!((distance - 2.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::errors::Result;

pub mod algorithms;
pub mod cartesian;
pub mod registry;
pub mod spheric;

pub use cartesian::CartesianCoordinate;
pub use spheric::SphericCoordinate;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::CartesianCoordinate {}
    impl Sealed for super::SphericCoordinate {}
}

/// Which representation a coordinate is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKind {
    /// `(x, y, z)`
    Cartesian,
    /// `(phi, theta, radius)`
    Spheric,
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateKind::Cartesian => write!(f, "cartesian"),
            CoordinateKind::Spheric => write!(f, "spheric"),
        }
    }
}

/// Operations every coordinate representation supports
///
/// The trait is sealed: only [`CartesianCoordinate`] and
/// [`SphericCoordinate`] implement it, so every operand the shared
/// algorithms see is one of the two.
pub trait Coordinate: sealed::Sealed + fmt::Debug + Send + Sync {
    /// Representation this value is stored in
    fn kind(&self) -> CoordinateKind;

    /// Re-check the representation invariants
    ///
    /// Values are validated on construction, so a failure here is an
    /// [`InvalidState`](crate::CoordinateError::InvalidState).
    fn check_invariants(&self) -> Result<()>;

    /// Canonical Cartesian instance for this point
    fn as_cartesian(&self) -> Result<Arc<CartesianCoordinate>>;

    /// Canonical spherical instance for this point
    fn as_spheric(&self) -> Result<Arc<SphericCoordinate>>;

    /// Euclidean distance to `other`
    fn cartesian_distance(&self, other: &dyn Coordinate) -> Result<f64> {
        algorithms::cartesian_distance(self, other)
    }

    /// Great-circle angle to `other`, in radians
    fn central_angle(&self, other: &dyn Coordinate) -> Result<f64> {
        algorithms::central_angle(self, other)
    }

    /// Exact equality of the Cartesian projections
    fn is_equal(&self, other: &dyn Coordinate) -> Result<bool> {
        algorithms::is_equal(self, other)
    }
}

/// Map `-0.0` to `0.0` so equal values also share their bit pattern
pub(crate) fn canonical_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
