//! # Spherical Coordinate Module
//!
//! A point given by azimuth `phi`, polar angle `theta` and `radius`.
//!
//! ## Conventions
//!
//! Angles are stored in degrees:
//!
//! - `phi` in `[0°, 360°)`, measured around the polar (z) axis from +x
//! - `theta` in `[0°, 180°]`, measured from the +z pole
//! - `radius >= 0`
//!
//! Trigonometry runs in radians, so every conversion multiplies by
//! [`DEG2RAD`] first:
//!
//! - `x = radius · sin(theta) · cos(phi)`
//! - `y = radius · sin(theta) · sin(phi)`
//! - `z = radius · cos(theta)`
//!
//! ```rust
//! use wahlzeit_coordinates::{Coordinate, SphericCoordinate};
//!
//! let west = SphericCoordinate::new(180.0, 90.0, 1.0).unwrap();
//! let cart = west.as_cartesian().unwrap();
//! assert!((cart.x() + 1.0).abs() < 1e-12);
//! assert!(cart.y().abs() < 1e-12);
//! assert!(cart.z().abs() < 1e-12);
//! ```

use std::f64::consts::TAU;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use lazy_static::lazy_static;

use super::cartesian::CartesianCoordinate;
use super::registry::Registry;
use super::{canonical_zero, Coordinate, CoordinateKind};
use crate::constants::{
    DEG2RAD, PHI_MAX_DEG, PHI_MIN_DEG, RAD2DEG, RADIUS_MIN, THETA_MAX_DEG, THETA_MIN_DEG,
};
use crate::errors::{ensure_finite, invalid_argument, invalid_state, Result};

lazy_static! {
    /// Canonical instance of every spherical value built so far
    static ref REGISTRY: Registry<SphericCoordinate> = Registry::new("spheric");
}

/// Point in 3-D space given by `(phi, theta, radius)`, angles in degrees
///
/// Instances are immutable and only handed out as interned [`Arc`]s.
///
/// `PartialEq` and `Hash` compare the stored fields, so two different
/// spellings of the same point (every azimuth at the pole, say) are
/// different values. Use [`Coordinate::is_equal`] to compare points.
#[derive(Debug)]
pub struct SphericCoordinate {
    phi: f64,
    theta: f64,
    radius: f64,
}

impl SphericCoordinate {
    /// Creates (or looks up) the coordinate with angles in degrees
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if a value is not finite, `phi` lies outside
    /// `[0, 360)`, `theta` outside `[0, 180]`, or `radius` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wahlzeit_coordinates::SphericCoordinate;
    ///
    /// let coord = SphericCoordinate::new(180.0, 45.0, 1.0).unwrap();
    /// assert_eq!(coord.phi(), 180.0);
    ///
    /// assert!(SphericCoordinate::new(180.0, 200.0, 1.0).is_err());
    /// ```
    pub fn new(phi: f64, theta: f64, radius: f64) -> Result<Arc<Self>> {
        Self::build(phi, theta, radius).map_err(invalid_argument)
    }

    /// Creates the coordinate from angles given in radians
    ///
    /// `phi` is accepted in `[0, TAU]`: azimuths close enough to a full turn
    /// that they round to 360° in degrees fold to 0°.
    pub fn from_radians(phi: f64, theta: f64, radius: f64) -> Result<Arc<Self>> {
        let mut phi_deg = phi * RAD2DEG;
        if phi_deg >= PHI_MAX_DEG && phi <= TAU {
            phi_deg = 0.0;
        }
        Self::new(phi_deg, theta * RAD2DEG, radius)
    }

    /// Builds a coordinate computed from another representation
    pub(crate) fn from_conversion(phi: f64, theta: f64, radius: f64) -> Result<Arc<Self>> {
        Self::build(phi, theta, radius).map_err(|msg| {
            invalid_state(format!("Conversion produced an invalid spheric coordinate: {}", msg))
        })
    }

    fn build(phi: f64, theta: f64, radius: f64) -> std::result::Result<Arc<Self>, String> {
        let candidate = SphericCoordinate {
            phi: canonical_zero(phi),
            theta: canonical_zero(theta),
            radius: canonical_zero(radius),
        };
        candidate.violation()?;
        Ok(REGISTRY.intern(candidate))
    }

    fn violation(&self) -> std::result::Result<(), String> {
        ensure_finite("Radius", self.radius)?;
        ensure_finite("Theta", self.theta)?;
        ensure_finite("Phi", self.phi)?;

        if self.radius < RADIUS_MIN {
            return Err(format!("Radius: {}. Radius must not be negative", self.radius));
        }
        if !(THETA_MIN_DEG..=THETA_MAX_DEG).contains(&self.theta) {
            return Err(format!(
                "Theta: {}. Theta must lie within [{}, {}] degrees",
                self.theta, THETA_MIN_DEG, THETA_MAX_DEG
            ));
        }
        if !(PHI_MIN_DEG..PHI_MAX_DEG).contains(&self.phi) {
            return Err(format!(
                "Phi: {}. Phi must lie within [{}, {}) degrees",
                self.phi, PHI_MIN_DEG, PHI_MAX_DEG
            ));
        }
        Ok(())
    }

    /// Azimuth in degrees
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Polar angle in degrees
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Azimuth in radians
    pub fn phi_radians(&self) -> f64 {
        self.phi * DEG2RAD
    }

    /// Polar angle in radians
    pub fn theta_radians(&self) -> f64 {
        self.theta * DEG2RAD
    }

    /// Same point with `phi` replaced
    pub fn with_phi(&self, phi: f64) -> Result<Arc<Self>> {
        Self::new(phi, self.theta, self.radius)
    }

    /// Same point with `theta` replaced
    pub fn with_theta(&self, theta: f64) -> Result<Arc<Self>> {
        Self::new(self.phi, theta, self.radius)
    }

    /// Same point with `radius` replaced
    pub fn with_radius(&self, radius: f64) -> Result<Arc<Self>> {
        Self::new(self.phi, self.theta, radius)
    }

    /// Number of distinct spherical values interned in this process
    pub fn registry_len() -> usize {
        REGISTRY.len()
    }
}

impl PartialEq for SphericCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.phi.to_bits() == other.phi.to_bits()
            && self.theta.to_bits() == other.theta.to_bits()
            && self.radius.to_bits() == other.radius.to_bits()
    }
}

impl Eq for SphericCoordinate {}

impl Hash for SphericCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.phi.to_bits().hash(state);
        self.theta.to_bits().hash(state);
        self.radius.to_bits().hash(state);
    }
}

impl fmt::Display for SphericCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(phi={}°, theta={}°, r={})",
            self.phi, self.theta, self.radius
        )
    }
}

impl Coordinate for SphericCoordinate {
    fn kind(&self) -> CoordinateKind {
        CoordinateKind::Spheric
    }

    fn check_invariants(&self) -> Result<()> {
        self.violation().map_err(invalid_state)
    }

    fn as_cartesian(&self) -> Result<Arc<CartesianCoordinate>> {
        self.check_invariants()?;

        let (sin_theta, cos_theta) = self.theta_radians().sin_cos();
        let (sin_phi, cos_phi) = self.phi_radians().sin_cos();

        CartesianCoordinate::from_conversion(
            self.radius * sin_theta * cos_phi,
            self.radius * sin_theta * sin_phi,
            self.radius * cos_theta,
        )
    }

    fn as_spheric(&self) -> Result<Arc<SphericCoordinate>> {
        self.check_invariants()?;
        Ok(REGISTRY.intern(SphericCoordinate {
            phi: self.phi,
            theta: self.theta,
            radius: self.radius,
        }))
    }
}
