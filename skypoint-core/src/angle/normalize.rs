//! Angle normalization for astronomical coordinate ranges.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, azimuth | [0, 2π) | [`wrap_0_2pi`] |
//! | Hour angle, longitude difference | [-π, +π) | [`wrap_pm_pi`] |
//! | Declination, latitude | [-π/2, +π/2] | [`clamp_dec`] |
//!
//! Wrapping preserves the direction on the sphere; clamping enforces a
//! physical limit — you cannot go past a pole, only back down the far side.
//! The wrapping functions go through `libm::fmod` because Rust's `%` is a
//! remainder, not a modulo, and the two differ for negative angles.

use crate::constants::{HALF_PI, PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [-π, +π) radians.
///
/// Use for hour angles and longitude differences, where the discontinuity
/// belongs at the anti-meridian rather than at 0/360°.
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w >= PI {
        w - TWOPI
    } else if w < -PI {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps an angle to [0, 2π) radians.
///
/// Use for right ascension, azimuth and any conventionally non-negative
/// angle.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

/// Clamps an angle to [-π/2, +π/2] radians.
///
/// Saturates instead of wrapping: a declination of 91° coming out of an
/// upstream calculation is a defect worth investigating, but clamping keeps
/// downstream spherical trig well-defined.
#[inline]
pub fn clamp_dec(x: f64) -> f64 {
    x.clamp(-HALF_PI, HALF_PI)
}
