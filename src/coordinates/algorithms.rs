//! Measurements shared by every coordinate representation
//!
//! Each operation checks its operands first (a failing operand is an
//! [`InvalidArgument`](crate::CoordinateError::InvalidArgument)), projects
//! both sides into the representation it needs, computes, and then checks
//! the result (a NaN, infinite or negative result is an
//! [`InvalidState`](crate::CoordinateError::InvalidState)). Nothing
//! non-finite ever leaves this module.

use super::Coordinate;
use crate::constants::{DEG2RAD, EQUATOR_THETA_DEG};
use crate::errors::{invalid_state, CoordinateError, Result};

/// Euclidean distance between `a` and `b`
///
/// Both operands are projected to Cartesian form first.
///
/// # Examples
///
/// ```rust
/// use wahlzeit_coordinates::{algorithms, CartesianCoordinate};
///
/// let a = CartesianCoordinate::new(7.0, 4.0, 3.0).unwrap();
/// let b = CartesianCoordinate::new(17.0, 6.0, 2.0).unwrap();
/// let d = algorithms::cartesian_distance(&*a, &*b).unwrap();
/// assert!((d - 10.246951).abs() < 1e-4);
/// ```
pub fn cartesian_distance<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    require_operand(a)?;
    require_operand(b)?;

    let lhs = a.as_cartesian()?;
    let rhs = b.as_cartesian()?;
    // Chained hypot: squaring a difference near 1e200 would overflow
    let delta = lhs.to_vector3() - rhs.to_vector3();
    let distance = delta.x.hypot(delta.y).hypot(delta.z);

    ensure_non_negative_finite("Distance", distance)
}

/// Great-circle angle between `a` and `b`, in radians within `[0, π]`
///
/// Both operands are projected to spherical form and read as points on a
/// sphere with latitude `90° - theta` and longitude `phi`. Radii are ignored.
///
/// Uses the Vincenty form of the central angle, which agrees with the
/// spherical law of cosines but keeps its precision for nearly coincident
/// and nearly antipodal points.
pub fn central_angle<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    require_operand(a)?;
    require_operand(b)?;

    let lhs = a.as_spheric()?;
    let rhs = b.as_spheric()?;

    let lat1 = (EQUATOR_THETA_DEG - lhs.theta()) * DEG2RAD;
    let lat2 = (EQUATOR_THETA_DEG - rhs.theta()) * DEG2RAD;
    let delta_lon = (rhs.phi() - lhs.phi()) * DEG2RAD;

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (sin_dlon, cos_dlon) = delta_lon.sin_cos();

    let across = cos_lat2 * sin_dlon;
    let along = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon;
    let numerator = across.hypot(along);
    let denominator = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlon;

    ensure_non_negative_finite("Central angle", numerator.atan2(denominator))
}

/// Exact equality of the Cartesian projections of `a` and `b`
///
/// There is no tolerance: points one ULP apart are different points. A
/// spherical value and the Cartesian value it was converted from compare
/// equal only if the round trip happens to be exact.
pub fn is_equal<A, B>(a: &A, b: &B) -> Result<bool>
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    require_operand(a)?;
    require_operand(b)?;

    let lhs = a.as_cartesian()?;
    let rhs = b.as_cartesian()?;

    Ok(lhs.x() == rhs.x() && lhs.y() == rhs.y() && lhs.z() == rhs.z())
}

/// Precondition shared by every algorithm
fn require_operand<C: Coordinate + ?Sized>(operand: &C) -> Result<()> {
    operand.check_invariants().map_err(|err| match err {
        CoordinateError::InvalidState(msg) | CoordinateError::InvalidArgument(msg) => {
            CoordinateError::InvalidArgument(format!(
                "{} operand rejected: {}",
                operand.kind(),
                msg
            ))
        }
    })
}

/// Postcondition shared by every algorithm
fn ensure_non_negative_finite(what: &str, value: f64) -> Result<f64> {
    if value.is_nan() {
        Err(invalid_state(format!("{} is not a number", what)))
    } else if !value.is_finite() {
        Err(invalid_state(format!("{} may not be infinite: {}", what, value)))
    } else if value < 0.0 {
        Err(invalid_state(format!("{} must not be negative: {}", what, value)))
    } else {
        Ok(value)
    }
}
