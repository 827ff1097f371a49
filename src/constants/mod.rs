//! Constants module for coordinate conventions
//!
//! Spherical coordinates store their angles in degrees. Trigonometry always
//! runs in radians, so every conversion goes through the factors below.

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Spherical bounds, in degrees
/// Smallest allowed azimuth (inclusive)
pub const PHI_MIN_DEG: f64 = 0.0;
/// Upper azimuth bound (exclusive)
pub const PHI_MAX_DEG: f64 = 360.0;
/// Smallest allowed polar angle (inclusive)
pub const THETA_MIN_DEG: f64 = 0.0;
/// Largest allowed polar angle (inclusive)
pub const THETA_MAX_DEG: f64 = 180.0;
/// Polar angle of the equator; latitude is measured from here
pub const EQUATOR_THETA_DEG: f64 = 90.0;

/// Smallest allowed radius (inclusive)
pub const RADIUS_MIN: f64 = 0.0;
