//! # Cartesian Coordinate Module
//!
//! A point given by its three signed distances `(x, y, z)` along the axes of
//! a right-handed Euclidean frame. The only invariant is that every
//! component is a finite real number; any range is allowed.
//!
//! ## Conversion to spherical form
//!
//! - `radius = sqrt(x² + y² + z²)`
//! - `phi = atan2(y, x)`, folded into `[0°, 360°)`
//! - `theta = acos(z / radius)`, in `[0°, 180°]`
//!
//! The two-argument arctangent keeps `x = 0` well defined: `(0, 1, 0)` has
//! azimuth 90°. Two singularities remain, and both get fixed values:
//!
//! - on the polar axis (`x = y = 0`) the azimuth is 0°
//! - at the origin both angles are 0°
//!
//! ## Examples
//!
//! ```rust
//! use wahlzeit_coordinates::{CartesianCoordinate, Coordinate};
//!
//! let point = CartesianCoordinate::new(0.0, 1.0, 0.0).unwrap();
//! let spheric = point.as_spheric().unwrap();
//! assert!((spheric.phi() - 90.0).abs() < 1e-12);
//! assert!((spheric.theta() - 90.0).abs() < 1e-12);
//! assert!((spheric.radius() - 1.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use lazy_static::lazy_static;
use nalgebra::Vector3;

use super::registry::Registry;
use super::spheric::SphericCoordinate;
use super::{canonical_zero, Coordinate, CoordinateKind};
use crate::constants::{PHI_MAX_DEG, RAD2DEG, THETA_MAX_DEG};
use crate::errors::{ensure_finite, invalid_argument, invalid_state, Result};

lazy_static! {
    /// Canonical instance of every Cartesian value built so far
    static ref REGISTRY: Registry<CartesianCoordinate> = Registry::new("cartesian");
}

/// Point in 3-D space given by `(x, y, z)`
///
/// Instances are immutable and only handed out as interned [`Arc`]s: two
/// constructions with the same components return the same allocation.
///
/// `PartialEq` and `Hash` compare the raw components. A negative zero is
/// stored as positive zero, so `-0.0` and `0.0` make the same point.
#[derive(Debug)]
pub struct CartesianCoordinate {
    x: f64,
    y: f64,
    z: f64,
}

impl CartesianCoordinate {
    /// Creates (or looks up) the coordinate `(x, y, z)`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any component is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wahlzeit_coordinates::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
    /// assert_eq!(coord.x(), 1.0);
    /// assert_eq!(coord.y(), 2.0);
    /// assert_eq!(coord.z(), 3.0);
    ///
    /// assert!(CartesianCoordinate::new(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Arc<Self>> {
        Self::build(x, y, z).map_err(invalid_argument)
    }

    /// The origin `(0, 0, 0)`
    pub fn origin() -> Arc<Self> {
        REGISTRY.intern(CartesianCoordinate {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        })
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Result<Arc<Self>> {
        Self::new(vec.x, vec.y, vec.z)
    }

    /// Builds a coordinate computed from another representation
    ///
    /// A failure here is a defect in the conversion, not in caller input.
    pub(crate) fn from_conversion(x: f64, y: f64, z: f64) -> Result<Arc<Self>> {
        Self::build(x, y, z).map_err(|msg| {
            invalid_state(format!("Conversion produced an invalid cartesian coordinate: {}", msg))
        })
    }

    fn build(x: f64, y: f64, z: f64) -> std::result::Result<Arc<Self>, String> {
        let candidate = CartesianCoordinate {
            x: canonical_zero(x),
            y: canonical_zero(y),
            z: canonical_zero(z),
        };
        candidate.violation()?;
        Ok(REGISTRY.intern(candidate))
    }

    fn violation(&self) -> std::result::Result<(), String> {
        ensure_finite("X", self.x)?;
        ensure_finite("Y", self.y)?;
        ensure_finite("Z", self.z)
    }

    /// X-component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Same point with `x` replaced
    pub fn with_x(&self, x: f64) -> Result<Arc<Self>> {
        Self::new(x, self.y, self.z)
    }

    /// Same point with `y` replaced
    pub fn with_y(&self, y: f64) -> Result<Arc<Self>> {
        Self::new(self.x, y, self.z)
    }

    /// Same point with `z` replaced
    pub fn with_z(&self, z: f64) -> Result<Arc<Self>> {
        Self::new(self.x, self.y, z)
    }

    /// Distance from the origin
    ///
    /// Uses `hypot` so that large components do not overflow on squaring.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Number of distinct Cartesian values interned in this process
    pub fn registry_len() -> usize {
        REGISTRY.len()
    }

    /// Spherical angles `(phi, theta)` in degrees for a point at `radius`
    fn angles(&self, radius: f64) -> (f64, f64) {
        if radius == 0.0 {
            log::debug!("Origin has no direction; using phi = 0, theta = 0");
            return (0.0, 0.0);
        }

        let theta = ((self.z / radius).clamp(-1.0, 1.0).acos() * RAD2DEG).min(THETA_MAX_DEG);

        let phi = if self.x == 0.0 && self.y == 0.0 {
            log::debug!("{} lies on the polar axis; using phi = 0", self);
            0.0
        } else {
            let mut phi = self.y.atan2(self.x) * RAD2DEG;
            if phi < 0.0 {
                phi += PHI_MAX_DEG;
            }
            // A tiny negative angle can round up to exactly 360
            if phi >= PHI_MAX_DEG {
                phi = 0.0;
            }
            phi
        };

        (phi, theta)
    }
}

impl PartialEq for CartesianCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
    }
}

// Components are never NaN
impl Eq for CartesianCoordinate {}

impl Hash for CartesianCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.to_bits().hash(state);
    }
}

impl fmt::Display for CartesianCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Coordinate for CartesianCoordinate {
    fn kind(&self) -> CoordinateKind {
        CoordinateKind::Cartesian
    }

    fn check_invariants(&self) -> Result<()> {
        self.violation().map_err(invalid_state)
    }

    fn as_cartesian(&self) -> Result<Arc<CartesianCoordinate>> {
        self.check_invariants()?;
        Ok(REGISTRY.intern(CartesianCoordinate {
            x: self.x,
            y: self.y,
            z: self.z,
        }))
    }

    fn as_spheric(&self) -> Result<Arc<SphericCoordinate>> {
        self.check_invariants()?;

        let radius = self.magnitude();
        let (phi, theta) = self.angles(radius);

        SphericCoordinate::from_conversion(phi, theta, radius)
    }
}
